//! Tracking of unresolved hits and of which of our ship lengths are
//! still considered afloat.

use alloc::vec::Vec;

use crate::common::{AgentError, Point};

/// Ordered queue of hits that are not yet part of a sunk ship, plus the
/// number of `Kill` cells seen since the last resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitChain {
    queue: Vec<Point>,
    kills: usize,
}

impl HitChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Unresolved hits, oldest first.
    pub fn hits(&self) -> &[Point] {
        &self.queue
    }

    pub fn push(&mut self, p: Point) {
        self.queue.push(p);
    }

    /// Most recent unresolved hit.
    pub fn latest(&self) -> Option<Point> {
        self.queue.last().copied()
    }

    /// The two most recent hits as `(previous, latest)`.
    pub fn latest_pair(&self) -> Option<(Point, Point)> {
        match self.queue.as_slice() {
            [.., prev, latest] => Some((*prev, *latest)),
            _ => None,
        }
    }

    /// Drop the entry at `p`, if any. Returns whether one was removed.
    pub fn remove(&mut self, p: Point) -> bool {
        match self.queue.iter().position(|&q| q == p) {
            Some(idx) => {
                self.queue.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Record a `Kill` cell: it leaves the queue and bumps the kill counter.
    pub fn record_kill(&mut self, p: Point) {
        self.remove(p);
        self.kills += 1;
    }

    /// Kills accumulated since the last resolution.
    pub fn kill_count(&self) -> usize {
        self.kills
    }

    /// Return the accumulated kill count and reset it to zero.
    pub fn take_kills(&mut self) -> usize {
        core::mem::take(&mut self.kills)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.kills = 0;
    }
}

/// Lengths of ships we placed that have not been matched to a kill yet,
/// in placement order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShipLengths {
    lengths: Vec<usize>,
}

impl ShipLengths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, length: usize) {
        self.lengths.push(length);
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.lengths
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Remove the first entry equal to `kills`.
    ///
    /// When two afloat ships share a length the earliest placed one is
    /// removed; the kill itself does not say which ship it was.
    pub fn resolve_kills(&mut self, kills: usize) -> Result<usize, AgentError> {
        let idx = self
            .lengths
            .iter()
            .position(|&len| len == kills)
            .ok_or(AgentError::InconsistentKillResolution { kills })?;
        Ok(self.lengths.remove(idx))
    }

    pub fn clear(&mut self) {
        self.lengths.clear();
    }
}

//! Ship placement: enumerate every legal spot for a ship, score it against
//! the placement-penalty map, and draw one from a weighted pool.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::GridStore,
    common::{AgentError, Point},
    config::{SCORE_NUMERATOR, TOP_CANDIDATES},
    ship::{Candidate, Orientation, Placement},
};

/// Orientation enumerated first in round `round`: vertical on even rounds,
/// horizontal on odd ones.
pub fn preferred_orientation(round: u32) -> Orientation {
    if round % 2 == 0 {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

/// Every placement of `length` that fits and touches no ship we already
/// placed. Both orientations are always included, `preferred` first.
pub fn legal_placements(
    grids: &GridStore,
    length: usize,
    preferred: Orientation,
) -> Result<Vec<Placement>, AgentError> {
    let size = grids.size();
    let mask = grids.ships_placed();
    let mut out = Vec::new();
    for orientation in [preferred, preferred.other()] {
        for origin in mask.points() {
            let placement = Placement::new(origin, length, orientation);
            if !placement.fits(size) {
                continue;
            }
            let mut free = true;
            for cell in placement.cells() {
                if mask.get(cell)? {
                    free = false;
                    break;
                }
            }
            if free {
                out.push(placement);
            }
        }
    }
    Ok(out)
}

/// Score each placement as `SCORE_NUMERATOR / Σ penalty`, so quieter
/// spots score higher.
pub fn score_placements(
    grids: &GridStore,
    placements: &[Placement],
) -> Result<Vec<Candidate>, AgentError> {
    let penalty = grids.placement_penalty();
    placements
        .iter()
        .map(|placement| -> Result<Candidate, AgentError> {
            // The histogram starts at the prior, so sums are positive in
            // practice; clamp so the division stays defined regardless.
            let raw = penalty.sum_over(placement.cells())?.max(1);
            Ok(Candidate {
                placement: *placement,
                score: SCORE_NUMERATOR / raw as f64,
            })
        })
        .collect()
}

/// Sort best-first and multiply the top `TOP_CANDIDATES` scores by
/// `count - TOP_CANDIDATES`, floored at 1 so small pools keep their
/// relative weights.
pub fn concentrate(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    let multiplier = candidates.len().saturating_sub(TOP_CANDIDATES).max(1) as f64;
    for candidate in candidates.iter_mut().take(TOP_CANDIDATES) {
        candidate.score *= multiplier;
    }
}

/// Integer sampling weights: each score rounded to the nearest whole number.
pub fn weights(candidates: &[Candidate]) -> Vec<u64> {
    candidates
        .iter()
        .map(|c| libm::round(c.score.max(0.0)) as u64)
        .collect()
}

/// Draw an index with probability proportional to its weight, using a
/// cumulative table and a binary search.
pub fn sample_weighted<R: Rng + ?Sized>(weights: &[u64], rng: &mut R) -> Result<usize, AgentError> {
    let mut cumulative = Vec::with_capacity(weights.len());
    let mut total: u64 = 0;
    for &w in weights {
        total = total.saturating_add(w);
        cumulative.push(total);
    }
    if total == 0 {
        return Err(AgentError::EmptyCandidatePool);
    }
    let draw = rng.random_range(0..total);
    Ok(cumulative.partition_point(|&c| c <= draw))
}

/// Choose where to put a ship of `length` in round `round`.
pub fn choose_placement<R: Rng + ?Sized>(
    grids: &GridStore,
    length: usize,
    round: u32,
    rng: &mut R,
) -> Result<Placement, AgentError> {
    if length == 0 || length > grids.size() {
        return Err(AgentError::InvalidShipLength(length));
    }
    let legal = legal_placements(grids, length, preferred_orientation(round))?;
    if legal.is_empty() {
        return Err(AgentError::NoLegalPlacement { length });
    }
    let mut candidates = score_placements(grids, &legal)?;
    concentrate(&mut candidates);
    let idx = sample_weighted(&weights(&candidates), rng)?;
    let chosen = candidates[idx];
    log::debug!(
        "placing length {} at {} {:?} (score {:.1}, {} candidates)",
        length,
        chosen.placement.origin,
        chosen.placement.orientation,
        chosen.score,
        candidates.len()
    );
    Ok(chosen.placement)
}

/// Commit `placement`: mark its cells in the ships-placed mask and add
/// `penalty` to every cell around it.
pub fn commit_placement(
    grids: &mut GridStore,
    placement: &Placement,
    penalty: i64,
) -> Result<(), AgentError> {
    let size = grids.size();
    for cell in placement.cells() {
        grids.ships_placed_mut().set(cell, true)?;
    }
    let around: Vec<Point> = placement.surrounding(size);
    for p in around {
        grids.placement_penalty_mut().add(p, penalty)?;
    }
    Ok(())
}

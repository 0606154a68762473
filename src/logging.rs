#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Level filters read from `BATTLESHIP_LOG`, e.g. `warn,battleship_agent::placer=debug`.
/// A bare level sets the default; `target=level` entries override it for
/// every target starting with that prefix, the longest prefix winning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilters {
    default: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
}

impl LogFilters {
    pub fn new(default: LevelFilter) -> Self {
        Self {
            default,
            targets: Vec::new(),
        }
    }

    /// Parse a directive list on top of `default`. Malformed entries are skipped.
    pub fn parse(directives: &str, default: LevelFilter) -> Self {
        let mut filters = Self::new(default);
        for entry in directives.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.split_once('=') {
                Some((target, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        filters.targets.push((target.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = entry.parse() {
                        filters.default = level;
                    }
                }
            }
        }
        filters.targets.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        filters
    }

    /// Level that applies to log records from `target`.
    pub fn level_for(&self, target: &str) -> LevelFilter {
        self.targets
            .iter()
            .find(|(prefix, _)| target.starts_with(prefix.as_str()))
            .map_or(self.default, |&(_, level)| level)
    }

    /// Most verbose level any target may log at.
    pub fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, Ord::max)
    }
}

struct StderrLogger {
    filters: LogFilters,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filters.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger. `default` applies unless `BATTLESHIP_LOG`
/// overrides it. Output goes to stderr so results on stdout stay clean.
pub fn init_logging(default: LevelFilter) {
    let filters = env::var("BATTLESHIP_LOG")
        .map(|directives| LogFilters::parse(&directives, default))
        .unwrap_or_else(|_| LogFilters::new(default));
    let max = filters.max_level();
    let logger: &'static StderrLogger = Box::leak(Box::new(StderrLogger { filters }));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(max);
    }
}

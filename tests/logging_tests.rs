use battleship_agent::LogFilters;
use log::LevelFilter;

#[test]
fn test_bare_level_replaces_default() {
    let filters = LogFilters::parse("debug", LevelFilter::Info);
    assert_eq!(filters.level_for("battleship_agent::ai"), LevelFilter::Debug);
    assert_eq!(filters.max_level(), LevelFilter::Debug);
}

#[test]
fn test_target_overrides_use_longest_prefix() {
    let filters = LogFilters::parse(
        "warn, battleship_agent=info ,battleship_agent::placer=trace",
        LevelFilter::Info,
    );
    assert_eq!(filters.level_for("battleship_agent::placer"), LevelFilter::Trace);
    assert_eq!(filters.level_for("battleship_agent::game"), LevelFilter::Info);
    assert_eq!(filters.level_for("proptest"), LevelFilter::Warn);
    assert_eq!(filters.max_level(), LevelFilter::Trace);
}

#[test]
fn test_malformed_entries_are_skipped() {
    let filters = LogFilters::parse("loud,,battleship_agent=noisy", LevelFilter::Warn);
    assert_eq!(filters, LogFilters::new(LevelFilter::Warn));
    assert_eq!(filters.level_for("battleship_agent"), LevelFilter::Warn);
}

#[test]
fn test_quiet_target_does_not_lower_max_level() {
    let filters = LogFilters::parse("battleship_agent::board=off", LevelFilter::Info);
    assert_eq!(filters.level_for("battleship_agent::board"), LevelFilter::Off);
    assert_eq!(filters.max_level(), LevelFilter::Info);
}

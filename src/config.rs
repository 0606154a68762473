/// Largest board the agent will allocate grids for.
pub const MAX_BOARD_SIZE: usize = 25;
/// Board size used by the CLI when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 10;
/// Ship lengths the referee asks each side to place, in request order.
pub const DEFAULT_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Attack map seed: `ATTACK_SCALE × opponent-shot histogram`.
pub const ATTACK_SCALE: i64 = 4;
/// Placement map seed: `PLACEMENT_SCALE × opponent-shot histogram`.
pub const PLACEMENT_SCALE: i64 = 3;
/// Added around every ship we place to keep the fleet spread out.
pub const ADJACENCY_PENALTY: i64 = 1000;
/// Placement scores are inverted as `SCORE_NUMERATOR / score`.
pub const SCORE_NUMERATOR: f64 = 10_000.0;
/// How many of the best placements get their weight boosted.
pub const TOP_CANDIDATES: usize = 5;
/// Ship names are `SHIP_NAME_PREFIX` followed by the placement index.
pub const SHIP_NAME_PREFIX: &str = "Ship";

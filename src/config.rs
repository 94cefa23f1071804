/// Hit points per cell of a standard (`P`) ship.
pub const STANDARD_STRENGTH: u8 = 1;
/// Hit points of a reinforced (`Q`) ship, shared by all of its cells.
pub const REINFORCED_STRENGTH: u8 = 2;

/// Rows are addressed by a single letter, so a grid has at most 26 of them.
pub const MAX_ROWS: usize = 26;

/// Widest grid a scenario may declare.
pub const MAX_COLUMNS: usize = 999;

/// Line prefix that terminates scenario input read from standard input.
pub const END_OF_DATA: &str = "EOD";

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "VOLLEY_LOG";

/// Bounds used when generating random scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_width: usize,
    pub max_height: usize,
    pub max_ships: usize,
    pub max_ship_side: usize,
    pub max_missiles: usize,
}

impl Limits {
    pub const fn new(
        max_width: usize,
        max_height: usize,
        max_ships: usize,
        max_ship_side: usize,
        max_missiles: usize,
    ) -> Self {
        Self {
            max_width,
            max_height,
            max_ships,
            max_ship_side,
            max_missiles,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        DEFAULT_LIMITS
    }
}

/// Limits used by the `sim` binary.
pub const DEFAULT_LIMITS: Limits = Limits::new(9, 9, 4, 3, 20);

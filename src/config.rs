/// Side length of the square board.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Vessel lengths placed on every board, in placement order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Random placement attempts allowed for a whole fleet on one board.
pub const PLACEMENT_ATTEMPTS: usize = 4000;

/// Fresh boards tried before giving up on setup. Random placement can paint
/// itself into a corner on a small grid.
pub const SETUP_RESTARTS: usize = 100;

/// Setup parameters for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<usize>,
    pub placement_attempts: usize,
    pub setup_restarts: usize,
}

impl GameConfig {
    /// Default fleet and budget on a board of side `board_size`.
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Total number of vessel cells in the fleet.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: FLEET.to_vec(),
            placement_attempts: PLACEMENT_ATTEMPTS,
            setup_restarts: SETUP_RESTARTS,
        }
    }
}

//! Random board generation under a bounded attempt budget.

use log::{debug, warn};
use rand::Rng;

use crate::board::Grid;
use crate::common::{PlacementError, SetupError};
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::ship::{Orientation, Vessel};

/// Uniformly random anchor and orientation for a vessel of `length`.
///
/// The anchor is drawn from the whole grid, so the vessel may not fit.
pub fn random_vessel<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Vessel {
    let n = size as i32;
    let anchor = Coord::new(rng.random_range(0..n), rng.random_range(0..n));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Vessel::new(length, anchor, orientation)
}

/// Fill `grid` with the `fleet`, sharing `budget` attempts across all vessels.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    fleet: &[usize],
    budget: usize,
) -> Result<(), SetupError> {
    let mut attempts = 0;
    for (placed, &length) in fleet.iter().enumerate() {
        loop {
            if attempts >= budget || grid.size() == 0 {
                debug!(
                    "fleet placement gave up after {} attempts ({}/{} placed)",
                    attempts,
                    placed,
                    fleet.len()
                );
                return Err(SetupError::Exhausted {
                    attempts,
                    placed,
                    fleet: fleet.len(),
                });
            }
            attempts += 1;
            let vessel = random_vessel(rng, grid.size(), length);
            match grid.place_vessel(vessel) {
                Ok(()) => break,
                Err(PlacementError::OutOfBounds | PlacementError::Occupied) => continue,
                Err(e @ PlacementError::EmptyVessel) => return Err(SetupError::InvalidVessel(e)),
            }
        }
    }
    debug!("fleet of {} placed in {} attempts", fleet.len(), attempts);
    Ok(())
}

/// Build a fresh grid for `config`, optionally concealed from the opponent.
pub fn random_grid<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    concealed: bool,
) -> Result<Grid, SetupError> {
    let mut grid = if concealed {
        Grid::concealed(config.board_size)
    } else {
        Grid::new(config.board_size)
    };
    place_fleet(rng, &mut grid, &config.fleet, config.placement_attempts)?;
    Ok(grid)
}

/// [`random_grid`] with whole-board restarts: a board that exhausts its
/// attempt budget is thrown away and a fresh one is generated, up to
/// `config.setup_restarts` boards in total.
pub fn generate_grid<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    concealed: bool,
) -> Result<Grid, SetupError> {
    let rounds = config.setup_restarts.max(1);
    let mut round = 1;
    loop {
        match random_grid(rng, config, concealed) {
            Err(SetupError::Exhausted { .. }) if round < rounds => round += 1,
            Err(e) => {
                warn!("board setup failed after {} boards: {}", round, e);
                return Err(e);
            }
            Ok(grid) => {
                debug!("board ready after {} of {} boards", round, rounds);
                return Ok(grid);
            }
        }
    }
}

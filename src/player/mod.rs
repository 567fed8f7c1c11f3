//! Player trait and implementations
//!
//! - AiPlayer: fires at uniformly random cells
//! - CliPlayer: reads targets typed on a console
//!
//! [`take_turn`] performs one shot for any player against the enemy grid.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Grid;
use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coord;
use crate::ui::Reporter;

/// Who is behind a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    Human,
    Ai,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Display name used in announcements.
    fn name(&self) -> &str;

    fn kind(&self) -> PlayerKind;

    /// Choose the next target. The coordinate is not guaranteed to be on the
    /// grid or untargeted; the grid validates it.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Grid) -> anyhow::Result<Coord>;

    /// Inform the player of what became of its last shot.
    fn handle_shot_result(&mut self, _target: Coord, _result: Result<ShotOutcome, ShotError>) {}
}

/// One resolved (or rejected) shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coord,
    pub result: Result<ShotOutcome, ShotError>,
}

impl Shot {
    /// Only a confirmed hit earns another shot.
    pub fn is_hit(&self) -> bool {
        matches!(self.result, Ok(ShotOutcome::Hit))
    }
}

/// Let `player` fire once at `enemy`.
///
/// Rejected shots are reported and returned, never retried. `Err` means the
/// player could not produce a target at all.
pub fn take_turn(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    enemy: &mut Grid,
    reporter: &mut dyn Reporter,
) -> anyhow::Result<Shot> {
    let target = player.select_target(rng, enemy)?;
    if player.kind() == PlayerKind::Ai {
        reporter.target_chosen(player.name(), target)?;
    }
    let result = enemy.resolve_shot(target);
    debug!("{} fired at {:?}: {:?}", player.name(), target, result);
    match result {
        Ok(outcome) => reporter.shot_resolved(player.name(), target, outcome)?,
        Err(e) => reporter.shot_rejected(player.name(), target, e)?,
    }
    player.handle_shot_result(target, result);
    Ok(Shot { target, result })
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;

use rand::rngs::SmallRng;
use rand::Rng;

use super::{Player, PlayerKind};
use crate::board::Grid;
use crate::coord::Coord;

/// Computer player firing at uniformly random cells.
///
/// It keeps no memory of earlier shots and may pick a cell it already
/// targeted; the grid rejects those and the turn passes.
#[derive(Debug)]
pub struct AiPlayer {
    name: String,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::named("Computer")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Ai
    }

    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Grid) -> anyhow::Result<Coord> {
        let n = enemy.size() as i32;
        if n == 0 {
            anyhow::bail!("cannot aim at an empty grid");
        }
        Ok(Coord::new(rng.random_range(0..n), rng.random_range(0..n)))
    }
}

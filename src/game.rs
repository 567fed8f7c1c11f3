//! Turn state machine for one match between two players.

use anyhow::bail;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::board::Grid;
use crate::common::SetupError;
use crate::config::GameConfig;
use crate::placement::generate_grid;
use crate::player::{take_turn, Player, Shot};
use crate::ui::Reporter;

/// One of the two seats at the table. Side one moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// Per-side shot counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SideStats {
    pub shots: u32,
    pub hits: u32,
    pub rejected: u32,
}

/// Serializable record of a game, finished or not.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameSummary {
    pub status: GameStatus,
    pub winner: Option<String>,
    pub turns: u32,
    pub stats: [SideStats; 2],
    pub survivors: [usize; 2],
}

/// Two grids, two players and whose turn it is.
pub struct Game {
    grids: [Grid; 2],
    players: [Box<dyn Player>; 2],
    rng: SmallRng,
    reporter: Box<dyn Reporter>,
    active: Side,
    turn: u32,
    stats: [SideStats; 2],
    status: GameStatus,
}

impl Game {
    /// Generate both boards for `config` and seat the players. Side two's
    /// grid is concealed. Fails without starting if a board cannot be built
    /// within the configured restarts.
    pub fn new(
        config: &GameConfig,
        players: [Box<dyn Player>; 2],
        mut rng: SmallRng,
        reporter: Box<dyn Reporter>,
    ) -> Result<Self, SetupError> {
        let first = generate_grid(&mut rng, config, false)?;
        let second = generate_grid(&mut rng, config, true)?;
        Ok(Self::with_grids([first, second], players, rng, reporter))
    }

    /// Start a game on prepared grids.
    pub fn with_grids(
        grids: [Grid; 2],
        players: [Box<dyn Player>; 2],
        rng: SmallRng,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            grids,
            players,
            rng,
            reporter,
            active: Side::One,
            turn: 0,
            stats: [SideStats::default(); 2],
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side to move next.
    pub fn active(&self) -> Side {
        self.active
    }

    /// Turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        self.players[side.index()].as_ref()
    }

    pub fn stats(&self, side: Side) -> SideStats {
        self.stats[side.index()]
    }

    /// Print the greeting banner.
    pub fn greet(&mut self) -> anyhow::Result<()> {
        let size = self.grids[0].size();
        self.reporter.greet(size)?;
        Ok(())
    }

    /// Play one turn for the active side.
    ///
    /// A hit keeps the turn; a miss or a rejected shot hands it over.
    pub fn step(&mut self) -> anyhow::Result<Shot> {
        if let GameStatus::Won(side) = self.status {
            bail!("game is already over: {:?} won", side);
        }
        let side = self.active;
        let enemy = side.opponent();

        {
            let [first, second] = &self.grids;
            self.reporter
                .turn_started(self.players[side.index()].name(), [first, second])?;
        }

        let shot = take_turn(
            self.players[side.index()].as_mut(),
            &mut self.rng,
            &mut self.grids[enemy.index()],
            self.reporter.as_mut(),
        )?;
        self.turn += 1;

        let stats = &mut self.stats[side.index()];
        stats.shots += 1;
        match shot.result {
            Ok(_) if shot.is_hit() => stats.hits += 1,
            Ok(_) => {}
            Err(_) => stats.rejected += 1,
        }

        if self.grids[enemy.index()].survivors_remaining() == 0 {
            self.status = GameStatus::Won(side);
            info!(
                "{} wins after {} turns",
                self.players[side.index()].name(),
                self.turn
            );
        } else if !shot.is_hit() {
            self.active = enemy;
        }
        debug!("turn {} done, {:?} to move", self.turn, self.active);
        Ok(shot)
    }

    /// Play until one side has no vessels left and announce the winner.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        let winner = loop {
            if let GameStatus::Won(side) = self.status {
                break side;
            }
            self.step()?;
        };
        let [first, second] = &self.grids;
        self.reporter
            .game_over(self.players[winner.index()].name(), [first, second])?;
        Ok(winner)
    }

    pub fn summary(&self) -> GameSummary {
        let winner = match self.status {
            GameStatus::Won(side) => Some(self.players[side.index()].name().to_string()),
            GameStatus::InProgress => None,
        };
        GameSummary {
            status: self.status,
            winner,
            turns: self.turn,
            stats: self.stats,
            survivors: [
                self.grids[0].survivors_remaining(),
                self.grids[1].survivors_remaining(),
            ],
        }
    }
}

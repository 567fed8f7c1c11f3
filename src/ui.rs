//! Output side of the console game: announcements and board display.

use std::io::{self, Write};

use crate::board::Grid;
use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coord;

/// Format a coordinate the way players type it: 1-based `row col`.
pub fn coord_to_string(coord: Coord) -> String {
    format!("{} {}", coord.row() as i64 + 1, coord.col() as i64 + 1)
}

/// Receives everything a game wants to tell its audience.
pub trait Reporter {
    /// Banner shown once before the first turn.
    fn greet(&mut self, _board_size: usize) -> io::Result<()> {
        Ok(())
    }

    /// A turn is about to start. `grids` are the two sides' boards in side
    /// order; the first one belongs to the human seat.
    fn turn_started(&mut self, _player: &str, _grids: [&Grid; 2]) -> io::Result<()> {
        Ok(())
    }

    /// A computer player picked its target.
    fn target_chosen(&mut self, _player: &str, _target: Coord) -> io::Result<()> {
        Ok(())
    }

    fn shot_resolved(
        &mut self,
        _player: &str,
        _target: Coord,
        _outcome: ShotOutcome,
    ) -> io::Result<()> {
        Ok(())
    }

    /// A shot was refused and the turn passes on.
    fn shot_rejected(&mut self, _player: &str, _target: Coord, _error: ShotError) -> io::Result<()> {
        Ok(())
    }

    fn game_over(&mut self, _winner: &str, _grids: [&Grid; 2]) -> io::Result<()> {
        Ok(())
    }
}

/// [`Reporter`] that discards everything.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// [`Reporter`] printing plain text to a writer.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_boards(&mut self, grids: [&Grid; 2]) -> io::Result<()> {
        writeln!(self.out, "Your board:")?;
        write!(self.out, "{}", grids[0].render(true))?;
        writeln!(self.out, "Computer's board:")?;
        write!(self.out, "{}", grids[1].render(false))?;
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn greet(&mut self, board_size: usize) -> io::Result<()> {
        writeln!(self.out, "-------------------")?;
        writeln!(self.out, "    Welcome to")?;
        writeln!(self.out, "    Sea Battle!")?;
        writeln!(self.out, "-------------------")?;
        writeln!(self.out, " Input format: x y")?;
        writeln!(self.out, " x - row number (1-{})", board_size)?;
        writeln!(self.out, " y - column number (1-{})", board_size)?;
        Ok(())
    }

    fn turn_started(&mut self, player: &str, grids: [&Grid; 2]) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(20))?;
        self.print_boards(grids)?;
        writeln!(self.out, "{} to move!", player)
    }

    fn target_chosen(&mut self, player: &str, target: Coord) -> io::Result<()> {
        writeln!(self.out, "{} fires at: {}", player, coord_to_string(target))
    }

    fn shot_resolved(&mut self, _player: &str, _target: Coord, outcome: ShotOutcome) -> io::Result<()> {
        writeln!(self.out, "{}", outcome)
    }

    fn shot_rejected(&mut self, _player: &str, _target: Coord, error: ShotError) -> io::Result<()> {
        writeln!(self.out, "{}", error)
    }

    fn game_over(&mut self, winner: &str, grids: [&Grid; 2]) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(20))?;
        self.print_boards(grids)?;
        writeln!(self.out, "{} wins!", winner)?;
        self.out.flush()
    }
}

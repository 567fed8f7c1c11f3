use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{bail, Context};
use rand::rngs::SmallRng;

use super::{Player, PlayerKind};
use crate::board::Grid;
use crate::coord::Coord;

/// Human player typing targets on a console.
///
/// Generic over its input and output so it can be driven by any reader.
#[derive(Debug)]
pub struct CliPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            name: "Player".to_string(),
            input,
            output,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a line of two whitespace-separated 1-based integers into a
/// zero-based coordinate. Range is not checked here.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(format!("Expected two numbers, got {}", parts.len()));
    };
    let row: i32 = row
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row))?;
    let col: i32 = col
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number", col))?;
    Ok(Coord::from_one_based(row, col))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Grid) -> anyhow::Result<Coord> {
        loop {
            write!(self.output, "Enter shot coordinates (row column): ")?;
            self.output.flush()?;
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read shot coordinates")?;
            if read == 0 {
                bail!("input closed before a target was entered");
            }
            match parse_coord(line.trim()) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}. Enter two numbers separated by a space!", e)?,
            }
        }
    }
}

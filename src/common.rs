//! Common types for Sea Battle: shot outcomes and the error taxonomy.

use core::fmt;

/// Result of a shot that landed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot struck a vessel cell.
    Hit,
    /// Shot landed on water.
    Miss,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "Hit!"),
            ShotOutcome::Miss => write!(f, "Miss!"),
        }
    }
}

/// Errors returned when placing a vessel on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one vessel cell lies outside the grid.
    OutOfBounds,
    /// At least one vessel cell is taken by another vessel or its buffer.
    Occupied,
    /// Vessel has no cells.
    EmptyVessel,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Vessel extends beyond the grid"),
            PlacementError::Occupied => write!(f, "Vessel overlaps another vessel or its buffer"),
            PlacementError::EmptyVessel => write!(f, "Vessel length must be positive"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors returned when resolving a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    OutOfRange,
    /// Target was already hit or missed.
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfRange => write!(f, "Shot is outside the board"),
            ShotError::AlreadyTargeted => write!(f, "That cell has already been targeted"),
        }
    }
}

impl std::error::Error for ShotError {}

/// Errors returned while generating a random board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Attempt budget ran out before the whole fleet was placed.
    Exhausted {
        attempts: usize,
        placed: usize,
        fleet: usize,
    },
    /// Fleet manifest contains a vessel that can never be placed.
    InvalidVessel(PlacementError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Exhausted {
                attempts,
                placed,
                fleet,
            } => write!(
                f,
                "Could not place the fleet in {} attempts ({} of {} vessels placed)",
                attempts, placed, fleet
            ),
            SetupError::InvalidVessel(e) => write!(f, "Invalid fleet manifest: {}", e),
        }
    }
}

impl std::error::Error for SetupError {}

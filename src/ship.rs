//! Vessel definitions: shape on the grid and remaining strength.

use core::fmt;

use crate::coord::Coord;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the column axis from its anchor.
    Horizontal,
    /// Extends along the row axis from its anchor.
    Vertical,
}

/// A straight run of `length` cells starting at `anchor`.
///
/// Shape is fixed at construction; only `strength` changes afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    anchor: Coord,
    orientation: Orientation,
    strength: usize,
}

impl Vessel {
    pub fn new(length: usize, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            length,
            anchor,
            orientation,
            strength: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells not yet hit.
    pub fn strength(&self) -> usize {
        self.strength
    }

    pub fn is_destroyed(&self) -> bool {
        self.strength == 0
    }

    /// Occupied cells in order from the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let anchor = self.anchor;
        let orientation = self.orientation;
        (0..self.length)
            .map_while(|i| i32::try_from(i).ok())
            .map(move |i| match orientation {
                Orientation::Horizontal => anchor.offset(0, i),
                Orientation::Vertical => anchor.offset(i, 0),
            })
    }

    /// Whether `coord` is one of this vessel's cells.
    pub fn contains(&self, coord: Coord) -> bool {
        let (dr, dc) = (
            i64::from(coord.row()) - i64::from(self.anchor.row()),
            i64::from(coord.col()) - i64::from(self.anchor.col()),
        );
        let len = i64::try_from(self.length).unwrap_or(i64::MAX);
        match self.orientation {
            Orientation::Horizontal => dr == 0 && (0..len).contains(&dc),
            Orientation::Vertical => dc == 0 && (0..len).contains(&dr),
        }
    }

    /// Take one point of damage. Returns `true` if this hit destroyed the
    /// vessel; further calls on a destroyed vessel are no-ops returning `false`.
    pub(crate) fn take_hit(&mut self) -> bool {
        if self.strength == 0 {
            return false;
        }
        self.strength -= 1;
        self.strength == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, anchor: ({}, {}), orientation: {:?}, strength: {} }}",
            self.length,
            self.anchor.row(),
            self.anchor.col(),
            self.orientation,
            self.strength,
        )
    }
}

//! Grid coordinates.

/// An immutable zero-based (row, col) position.
///
/// Components are signed so positions just off the grid (including the
/// neighbors of an edge cell) are representable and can be rejected by the
/// grid's bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: i32,
    col: i32,
}

/// Relative offsets of the 8-neighborhood.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Convert a 1-based user entry into a zero-based coordinate.
    pub const fn from_one_based(row: i32, col: i32) -> Self {
        Self::new(row.saturating_sub(1), col.saturating_sub(1))
    }

    pub const fn row(&self) -> i32 {
        self.row
    }

    pub const fn col(&self) -> i32 {
        self.col
    }

    /// Coordinate shifted by (`dr`, `dc`).
    pub const fn offset(&self, dr: i32, dc: i32) -> Self {
        Self::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// The eight surrounding coordinates, whether on the grid or not.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBORS.iter().map(move |&(dr, dc)| self.offset(dr, dc))
    }
}

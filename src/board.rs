//! Grid state for one side: cells, placed vessels and shot resolution.

use core::fmt;
use std::collections::BTreeSet;

use log::{debug, info};

use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::coord::Coord;
use crate::ship::Vessel;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// Next to a vessel; no other vessel may occupy it.
    Buffer,
    Vessel,
    Miss,
    Hit,
}

impl Cell {
    /// Glyph used by the console display.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Buffer => '~',
            Cell::Vessel => '■',
            Cell::Miss => 'T',
            Cell::Hit => 'X',
        }
    }

    /// `true` once the cell has been shot at.
    pub fn is_targeted(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Square board owned by one side.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
    vessels: Vec<Vessel>,
    survivors: usize,
    concealed: bool,
}

impl Grid {
    /// Create an empty `size`×`size` grid with nothing concealed.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::Empty; size]; size],
            vessels: Vec::new(),
            survivors: 0,
            concealed: false,
        }
    }

    /// Create an empty grid whose vessels are hidden from other viewers.
    pub fn concealed(size: usize) -> Self {
        let mut grid = Self::new(size);
        grid.concealed = true;
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Placed vessels, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// `true` if either component of `coord` falls outside `[0, size)`.
    pub fn is_out_of_bounds(&self, coord: Coord) -> bool {
        let n = self.size as i64;
        let (r, c) = (coord.row() as i64, coord.col() as i64);
        !((0..n).contains(&r) && (0..n).contains(&c))
    }

    /// State of the cell at `coord`, or `None` off the grid.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if self.is_out_of_bounds(coord) {
            return None;
        }
        Some(self.cells[coord.row() as usize][coord.col() as usize])
    }

    fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row() as usize][coord.col() as usize] = cell;
    }

    /// In-bounds empty cells surrounding `vessel`, excluding its own cells.
    ///
    /// Evaluated against the current state, so it must be called before the
    /// vessel itself is written.
    pub fn adjacent_free_cells(&self, vessel: &Vessel) -> BTreeSet<Coord> {
        vessel
            .cells()
            .flat_map(Coord::neighbors)
            .filter(|&n| !vessel.contains(n) && self.cell(n) == Some(Cell::Empty))
            .collect()
    }

    /// Place `vessel`, surrounding it with buffer cells.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        if vessel.length() == 0 {
            return Err(PlacementError::EmptyVessel);
        }
        if vessel.length() > self.size {
            return Err(PlacementError::OutOfBounds);
        }
        for coord in vessel.cells() {
            match self.cell(coord) {
                None => return Err(PlacementError::OutOfBounds),
                Some(Cell::Empty) => {}
                Some(_) => return Err(PlacementError::Occupied),
            }
        }

        for coord in self.adjacent_free_cells(&vessel) {
            self.set(coord, Cell::Buffer);
        }
        for coord in vessel.cells() {
            self.set(coord, Cell::Vessel);
        }
        debug!("placed {:?}", vessel);
        self.vessels.push(vessel);
        self.survivors += 1;
        Ok(())
    }

    /// Fire at `coord`. Rejected shots leave the grid untouched.
    pub fn resolve_shot(&mut self, coord: Coord) -> Result<ShotOutcome, ShotError> {
        let cell = self.cell(coord).ok_or(ShotError::OutOfRange)?;
        if cell.is_targeted() {
            return Err(ShotError::AlreadyTargeted);
        }

        if let Some(vessel) = self.vessels.iter_mut().find(|v| v.contains(coord)) {
            if vessel.take_hit() {
                self.survivors -= 1;
                info!(
                    "vessel of length {} destroyed, {} remaining",
                    vessel.length(),
                    self.survivors
                );
            }
            self.set(coord, Cell::Hit);
            debug!("shot at ({}, {}) hit", coord.row(), coord.col());
            Ok(ShotOutcome::Hit)
        } else {
            self.set(coord, Cell::Miss);
            debug!("shot at ({}, {}) missed", coord.row(), coord.col());
            Ok(ShotOutcome::Miss)
        }
    }

    /// Number of vessels with strength left.
    pub fn survivors_remaining(&self) -> usize {
        self.survivors
    }

    /// Cells that can still be shot at.
    pub fn untargeted_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| !c.is_targeted())
            .count()
    }

    /// Number of cells currently in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Snapshot for display. A concealed grid shown to anyone but its owner
    /// has vessel and buffer cells replaced by empty water.
    pub fn render(&self, for_owner: bool) -> GridView {
        let hide = self.concealed && !for_owner;
        let cells = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| match c {
                        Cell::Vessel | Cell::Buffer if hide => Cell::Empty,
                        other => other,
                    })
                    .collect()
            })
            .collect();
        GridView { cells }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ size: {}, survivors: {}, concealed: {}, vessels: {:?} }}",
            self.size, self.survivors, self.concealed, self.vessels
        )?;
        write!(f, "{}", self.render(true))
    }
}

/// Read-only projection of a grid, rendered with 1-based headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    cells: Vec<Vec<Cell>>,
}

impl GridView {
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Cell as seen by the viewer, `None` off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }
}

impl fmt::Display for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.cells.len();
        let w = n.to_string().len();
        write!(f, "{:w$} |", "", w = w)?;
        for c in 1..=n {
            write!(f, " {:>w$} |", c, w = w)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:>w$} |", r + 1, w = w)?;
            for cell in row {
                write!(f, " {:>w$} |", cell.glyph(), w = w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Cell lookup from coordinates to the ship occupying them.

use alloc::vec;
use alloc::vec::Vec;

use crate::coordinate::Coordinate;
use crate::ship::Footprint;

/// Index of a ship in its owner's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Width × height cells, each optionally referring to a ship of the owning
/// player. Cells never own ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<ShipId>>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` when `c` lies inside the grid.
    pub fn contains(&self, c: Coordinate) -> bool {
        c.x < self.width && c.y < self.height
    }

    fn linearize(&self, c: Coordinate) -> usize {
        assert!(
            self.contains(c),
            "coordinate ({}, {}) outside {}x{} grid",
            c.x,
            c.y,
            self.width,
            self.height
        );
        c.y * self.width + c.x
    }

    /// Mark every cell of `footprint` as occupied by `id`. Earlier occupants of
    /// those cells are overwritten.
    pub fn place(&mut self, id: ShipId, footprint: &Footprint) {
        for c in footprint.cells() {
            let i = self.linearize(c);
            self.cells[i] = Some(id);
        }
    }

    /// Ship occupying `c`, if any.
    pub fn lookup(&self, c: Coordinate) -> Option<ShipId> {
        self.cells[self.linearize(c)]
    }

    /// Empty the cell at `c`.
    pub fn clear(&mut self, c: Coordinate) {
        let i = self.linearize(c);
        self.cells[i] = None;
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

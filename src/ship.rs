//! Ship kinds, footprints and per-ship damage tracking.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::config::{REINFORCED_STRENGTH, STANDARD_STRENGTH};
use crate::coordinate::Coordinate;

/// Type of ship as given by the scenario's type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    /// `P`: every cell is destroyed by a single hit.
    Standard,
    /// `Q`: the hull absorbs one hit before cells start being destroyed.
    Reinforced,
}

impl ShipKind {
    /// Decode a type code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "P" | "p" => Some(ShipKind::Standard),
            "Q" | "q" => Some(ShipKind::Reinforced),
            _ => None,
        }
    }

    /// Upper-case type code.
    pub const fn code(self) -> char {
        match self {
            ShipKind::Standard => 'P',
            ShipKind::Reinforced => 'Q',
        }
    }

    /// Initial strength of a ship of this kind.
    pub const fn strength(self) -> u8 {
        match self {
            ShipKind::Standard => STANDARD_STRENGTH,
            ShipKind::Reinforced => REINFORCED_STRENGTH,
        }
    }
}

/// Inclusive rectangle covered by a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Footprint {
    /// Rectangle of `width` by `height` cells whose top-left cell is `anchor`.
    /// Both sides must be at least one cell.
    pub fn at(anchor: Coordinate, width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            start: anchor,
            end: anchor.offset(width - 1, height - 1),
        }
    }

    pub fn width(&self) -> usize {
        self.end.x - self.start.x + 1
    }

    pub fn height(&self) -> usize {
        self.end.y - self.start.y + 1
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        (self.start.x..=self.end.x).contains(&c.x) && (self.start.y..=self.end.y).contains(&c.y)
    }

    /// Iterate the covered cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Footprint { start, end } = *self;
        (start.y..=end.y).flat_map(move |y| (start.x..=end.x).map(move |x| Coordinate::new(x, y)))
    }
}

impl fmt::Display for Footprint {
    /// Formats as `(sx, sy), (ex, ey)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}), ({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

/// Damage dealt by a single hit on a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Damage {
    /// The shared hull strength dropped; no cell was destroyed.
    Absorbed,
    /// One cell was destroyed and others remain.
    CellDestroyed,
    /// The last remaining cell was destroyed.
    Sunk,
}

/// A ship placed in a player's grid.
///
/// Equality, hashing and ordering only consider the footprint: two ships
/// covering the same rectangle are the same ship whatever their damage.
#[derive(Clone)]
pub struct Ship {
    kind: ShipKind,
    footprint: Footprint,
    strength: u8,
    remaining: usize,
}

impl Ship {
    pub fn new(kind: ShipKind, footprint: Footprint) -> Self {
        Self {
            kind,
            footprint,
            strength: kind.strength(),
            remaining: footprint.area(),
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Current hull strength, shared by all cells.
    pub fn strength(&self) -> u8 {
        self.strength
    }

    /// Cells not yet destroyed.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Apply one hit. A hull with two or more strength loses one point and
    /// keeps every cell; otherwise one cell is destroyed.
    pub fn take_hit(&mut self) -> Damage {
        if self.strength >= 2 {
            self.strength -= 1;
            Damage::Absorbed
        } else {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                Damage::Sunk
            } else {
                Damage::CellDestroyed
            }
        }
    }
}

impl PartialEq for Ship {
    fn eq(&self, other: &Self) -> bool {
        self.footprint == other.footprint
    }
}

impl Eq for Ship {}

impl Hash for Ship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.footprint.hash(state);
    }
}

impl PartialOrd for Ship {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ship {
    fn cmp(&self, other: &Self) -> Ordering {
        self.footprint.cmp(&other.footprint)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {:?}, footprint: {}, strength: {}, remaining: {} }}",
            self.kind, self.footprint, self.strength, self.remaining,
        )
    }
}

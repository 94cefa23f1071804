//! Common types: shot results and scenario errors.

use alloc::string::String;
use core::fmt;

use crate::config::{MAX_COLUMNS, MAX_ROWS};
use crate::coordinate::{Coordinate, TupleError};
use crate::player::PlayerId;
use crate::ship::Footprint;

/// Result of a missile landing on a player's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// The target cell was empty.
    Miss,
    /// A reinforced hull absorbed the hit.
    Absorbed,
    /// A ship cell was destroyed.
    Destroyed,
    /// The last cell of the ship with this footprint was destroyed.
    Sunk(Footprint),
}

impl ShotResult {
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors raised while reading a scenario. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Input ended before the named line.
    MissingLine { line: usize, expected: &'static str },
    /// The first line does not hold both a width and a height.
    GridSizeTokens,
    /// The grid width is not a positive integer.
    InvalidWidth(String),
    /// The grid is wider than [`MAX_COLUMNS`] or taller than [`MAX_ROWS`].
    GridTooLarge { width: usize, height: usize },
    /// The grid height is not a letter.
    InvalidHeight(String),
    /// The ship count is not an integer.
    InvalidShipCount(String),
    /// A ship line has fewer than five tokens.
    ShipTokens { line: usize, found: usize },
    /// A ship type code other than `P` or `Q`.
    UnknownShipType { line: usize, code: String },
    /// A ship width or height that is not a positive integer.
    InvalidShipSize { line: usize, value: String },
    /// A tuple that could not be decoded.
    InvalidTuple { line: usize, tuple: String, reason: TupleError },
    /// A tuple that lies outside the grid.
    TargetOutOfBounds { line: usize, tuple: String },
    /// A ship that does not fit in its owner's grid.
    ShipOutOfBounds { line: usize, player: PlayerId, anchor: Coordinate },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::MissingLine { line, expected } => {
                write!(f, "Not enough lines to read! Expected {} on line {}", expected, line)
            }
            ScenarioError::GridSizeTokens => write!(f, "Invalid input for the grid sizes (line1)"),
            ScenarioError::InvalidWidth(v) => {
                write!(f, "\"{}\": invalid format given for the grid size x", v)
            }
            ScenarioError::GridTooLarge { width, height } => write!(
                f,
                "Grid of {}x{} exceeds the {}x{} limit",
                width,
                height,
                MAX_COLUMNS,
                MAX_ROWS
            ),
            ScenarioError::InvalidHeight(v) => {
                write!(f, "\"{}\": the grid size y must be a letter A-Z", v)
            }
            ScenarioError::InvalidShipCount(v) => {
                write!(f, "\"{}\": invalid format given for the number of ships", v)
            }
            ScenarioError::ShipTokens { line, found } => {
                write!(f, "Less than 5 parts on line {} (found {})", line, found)
            }
            ScenarioError::UnknownShipType { line, code } => {
                write!(f, "Unknown ship type \"{}\" on line {}", code, line)
            }
            ScenarioError::InvalidShipSize { line, value } => {
                write!(f, "\"{}\": invalid ship dimension on line {}", value, line)
            }
            ScenarioError::InvalidTuple { line, tuple, reason } => {
                write!(f, "Invalid tuple \"{}\" on line {}: {}", tuple, line, reason)
            }
            ScenarioError::TargetOutOfBounds { line, tuple } => {
                write!(f, "Tuple \"{}\" on line {} lies outside the battle area", tuple, line)
            }
            ScenarioError::ShipOutOfBounds { line, player, anchor } => write!(
                f,
                "Ship at {} for {} on line {} does not fit in the battle area",
                anchor, player, line
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScenarioError {}

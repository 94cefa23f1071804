//! Grid coordinates and the `B2` style tuple notation used by scenario input.

use core::fmt;
use core::str::FromStr;

/// A cell position, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted right by `dx` columns and down by `dy` rows.
    pub const fn offset(self, dx: usize, dy: usize) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// Error returned when a tuple such as `B2` cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleError {
    /// The tuple is empty or does not start with a row letter.
    MissingRow,
    /// The column part is missing, not a number, or zero.
    InvalidColumn,
}

impl fmt::Display for TupleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TupleError::MissingRow => write!(f, "tuple must start with a row letter"),
            TupleError::InvalidColumn => write!(f, "tuple column must be a number from 1"),
        }
    }
}

/// Converts a row letter (either case) into its 0-based row index.
pub fn row_index(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some((letter.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Converts a 0-based row index back into its upper-case letter.
pub fn row_letter(row: usize) -> char {
    (b'A' + row as u8) as char
}

impl FromStr for Coordinate {
    type Err = TupleError;

    /// Parse `B2` into row 1, column 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let y = chars
            .next()
            .and_then(row_index)
            .ok_or(TupleError::MissingRow)?;
        let column = chars.as_str();
        if column.is_empty() || !column.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TupleError::InvalidColumn);
        }
        let x: usize = column.parse().map_err(|_| TupleError::InvalidColumn)?;
        if x == 0 {
            return Err(TupleError::InvalidColumn);
        }
        Ok(Coordinate::new(x - 1, y))
    }
}

impl fmt::Display for Coordinate {
    /// Formats as the tuple notation, e.g. `B2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_letter(self.y), self.x + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_letter_and_column() {
        assert_eq!("B2".parse::<Coordinate>(), Ok(Coordinate::new(1, 1)));
        assert_eq!("a1".parse::<Coordinate>(), Ok(Coordinate::new(0, 0)));
        assert_eq!("E12".parse::<Coordinate>(), Ok(Coordinate::new(11, 4)));
    }

    #[test]
    fn rejects_malformed_tuples() {
        assert_eq!("".parse::<Coordinate>(), Err(TupleError::MissingRow));
        assert_eq!("12".parse::<Coordinate>(), Err(TupleError::MissingRow));
        assert_eq!("B".parse::<Coordinate>(), Err(TupleError::InvalidColumn));
        assert_eq!("B0".parse::<Coordinate>(), Err(TupleError::InvalidColumn));
        assert_eq!("B+2".parse::<Coordinate>(), Err(TupleError::InvalidColumn));
    }

    #[test]
    fn displays_as_tuple() {
        assert_eq!(Coordinate::new(3, 4).to_string(), "E4");
    }
}

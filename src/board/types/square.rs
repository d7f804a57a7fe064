//! Square type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cell of the board: a fixed 1-based `(row, column)` identity and
/// an occupancy flag.
///
/// Squares order row-major, then empty before occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: usize,
    column: usize,
    occupied: bool,
}

impl Square {
    /// Cell text for a square holding a queen
    pub const QUEEN_GLYPH: &'static str = " Q ";
    /// Cell text for an empty square
    pub const EMPTY_GLYPH: &'static str = "   ";

    /// Create an empty square. Bounds are checked by the board that stores it.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Square {
            row,
            column,
            occupied: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// The `(row, column)` pair
    #[inline]
    #[must_use]
    pub const fn coord(self) -> (usize, usize) {
        (self.row, self.column)
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        self.occupied
    }

    /// Put a queen on this square
    #[inline]
    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Remove the queen from this square, if any
    #[inline]
    pub fn vacate(&mut self) {
        self.occupied = false;
    }

    /// Fixed-width text for this square's occupancy
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        if self.occupied {
            Self::QUEEN_GLYPH
        } else {
            Self::EMPTY_GLYPH
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

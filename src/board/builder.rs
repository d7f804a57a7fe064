//! Fluent builder for constructing board positions.
//!
//! # Example
//! ```
//! use queens_board::BoardBuilder;
//!
//! let board = BoardBuilder::<4>::new()
//!     .queen(1, 2)
//!     .queen(2, 4)
//!     .queen(3, 1)
//!     .queen(4, 3)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.queen_count(), 4);
//! ```

use super::{Board, SquareError, DIMENSION};

/// A fluent builder for constructing `Board` positions.
///
/// Coordinates are only checked by [`BoardBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder<const N: usize = DIMENSION> {
    queens: Vec<(usize, usize)>,
}

impl<const N: usize> BoardBuilder<N> {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { queens: Vec::new() }
    }

    /// Place a queen. Placing twice on one square keeps a single queen.
    #[must_use]
    pub fn queen(mut self, row: usize, column: usize) -> Self {
        self.queens.retain(|&coord| coord != (row, column));
        self.queens.push((row, column));
        self
    }

    /// Place a queen on every coordinate in `coords`.
    #[must_use]
    pub fn queens<I>(self, coords: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        coords
            .into_iter()
            .fold(self, |builder, (row, column)| builder.queen(row, column))
    }

    /// Remove a queen from a square.
    #[must_use]
    pub fn clear(mut self, row: usize, column: usize) -> Self {
        self.queens.retain(|&coord| coord != (row, column));
        self
    }

    /// Build the board, failing on the first queen outside `[1, N]²`.
    pub fn build(self) -> Result<Board<N>, SquareError> {
        let mut board = Board::<N>::new();
        for (row, column) in self.queens {
            board.land(row, column)?;
        }
        Ok(board)
    }
}

//! Error types for board operations.

use std::fmt;

/// Error type for coordinates that fall outside the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside `[1, dimension]`
    OutOfBounds {
        row: usize,
        column: usize,
        dimension: usize,
    },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds {
                row,
                column,
                dimension,
            } => {
                write!(
                    f,
                    "Square ({row}, {column}) out of bounds (must be 1-{dimension})"
                )
            }
        }
    }
}

impl std::error::Error for SquareError {}

//! Queen board representation and placement queries.
//!
//! Coordinates are 1-based `(row, column)` pairs in `[1, N]`. The grid is
//! stored zero-based and every accessor checks bounds before touching it.
//!
//! # Example
//! ```
//! use queens_board::board::{Board, BoardBuilder};
//!
//! let board = BoardBuilder::<4>::new().queen(1, 2).queen(2, 4).build().unwrap();
//! assert!(board.taken(1, 2).unwrap());
//! assert!(board.clash(3, 3).unwrap());
//! print!("{board}");
//! ```

mod attacks;
mod builder;
mod display;
mod error;
#[cfg(feature = "serde")]
mod record;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::SquareError;
#[cfg(feature = "serde")]
pub use record::{BoardRecord, RecordError};
pub use state::{Board, DIMENSION};
pub use types::Square;

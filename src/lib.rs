//! Board state for the N-Queens puzzle.
//!
//! A fixed-size grid of squares with placement, attack-detection and
//! rendering helpers. Searching for solutions is left to callers.
//!
//! # Example
//! ```
//! use queens_board::Board;
//!
//! let mut board = Board::<4>::new();
//! board.land(1, 1).unwrap();
//! assert!(board.clash(2, 2).unwrap());
//! assert!(!board.clash(3, 2).unwrap());
//! ```

/// Emits a `log::trace!` record when the `logging` feature is enabled.
#[cfg(feature = "logging")]
macro_rules! trace {
    ($($arg:tt)*) => {
        log::trace!(target: "queens_board", $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub mod board;

pub use board::{Board, BoardBuilder, Square, SquareError, DIMENSION};

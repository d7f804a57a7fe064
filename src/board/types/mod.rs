//! Core board types.

mod square;

pub use square::Square;

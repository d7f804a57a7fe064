//! Row, column and diagonal attack queries.
//!
//! Every scan covers the whole line through the queried coordinate, the
//! queried square included: a queen already on `(row, column)` makes its own
//! row, column and diagonals unclear.

use super::{Board, SquareError};

impl<const N: usize> Board<N> {
    /// True iff no square in `row` holds a queen.
    ///
    /// An out-of-range row is reported with column 1.
    pub fn row_clear(&self, row: usize) -> Result<bool, SquareError> {
        if !self.valid(row, 1) {
            return Err(Self::out_of_bounds(row, 1));
        }
        Ok((1..=N).all(|column| !self.occupied_at(row, column)))
    }

    /// True iff no square in `column` holds a queen.
    ///
    /// An out-of-range column is reported with row 1.
    pub fn column_clear(&self, column: usize) -> Result<bool, SquareError> {
        if !self.valid(1, column) {
            return Err(Self::out_of_bounds(1, column));
        }
        Ok((1..=N).all(|row| !self.occupied_at(row, column)))
    }

    /// True iff neither diagonal through `(row, column)` holds a queen.
    ///
    /// Each diagonal is found by backing up to its top edge anchor and then
    /// sweeping down to the opposite edge.
    pub fn diagonals_clear(&self, row: usize, column: usize) -> Result<bool, SquareError> {
        self.offset(row, column)?;

        // Leading diagonal: anchor top-left, sweep down-right.
        let back = (row - 1).min(column - 1);
        let (mut r, mut c) = (row - back, column - back);
        trace!("diagonals_clear: top left anchor ({r}, {c})");
        while r <= N && c <= N {
            if self.occupied_at(r, c) {
                trace!("diagonals_clear: queen at ({r}, {c})");
                return Ok(false);
            }
            r += 1;
            c += 1;
        }

        // Anti-diagonal: anchor top-right, sweep down-left.
        let back = (row - 1).min(N - column);
        let (mut r, mut c) = (row - back, column + back);
        trace!("diagonals_clear: top right anchor ({r}, {c})");
        loop {
            if self.occupied_at(r, c) {
                trace!("diagonals_clear: queen at ({r}, {c})");
                return Ok(false);
            }
            if r == N || c == 1 {
                break;
            }
            r += 1;
            c -= 1;
        }

        trace!("diagonals_clear: ({row}, {column}) clear");
        Ok(true)
    }

    /// True iff a queen on `(row, column)` would share a row, column or
    /// diagonal with a queen already on the board.
    pub fn clash(&self, row: usize, column: usize) -> Result<bool, SquareError> {
        self.offset(row, column)?;
        trace!("clash: ({row}, {column})");
        let clear = self.row_clear(row)?
            && self.column_clear(column)?
            && self.diagonals_clear(row, column)?;
        Ok(!clear)
    }
}

use super::{Square, SquareError};

/// Default side length for boards that don't name one.
pub const DIMENSION: usize = 8;

/// An `N`×`N` grid of squares.
///
/// Squares are stored row-major in a zero-based `Vec`; the public API speaks
/// 1-based `(row, column)` coordinates and checks them on every call.
#[derive(Debug, PartialEq, Eq)]
pub struct Board<const N: usize = DIMENSION> {
    pub(crate) squares: Vec<Square>,
}

impl<const N: usize> Board<N> {
    const NONZERO: () = assert!(N > 0, "board dimension must be positive");

    /// Create an empty board: every square in `[1, N]²` exists and is unoccupied.
    #[must_use]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO;

        let squares = (1..=N)
            .flat_map(|row| (1..=N).map(move |column| Square::new(row, column)))
            .collect();
        Board { squares }
    }

    /// Side length shared by every board of this type
    #[inline]
    #[must_use]
    pub const fn dimension() -> usize {
        N
    }

    /// Whether `(row, column)` lies on the board
    #[inline]
    #[must_use]
    pub fn valid(&self, row: usize, column: usize) -> bool {
        (1..=N).contains(&row) && (1..=N).contains(&column)
    }

    /// Copy of the square at `(row, column)`
    pub fn get_square(&self, row: usize, column: usize) -> Result<Square, SquareError> {
        let idx = self.offset(row, column)?;
        Ok(self.squares[idx])
    }

    /// Overwrite the occupancy of the cell named by `square`'s own coordinate.
    ///
    /// The stored square keeps its identity; only the occupancy flag is copied.
    pub fn set_square(&mut self, square: Square) -> Result<(), SquareError> {
        trace!("set_square: {:?}", square.coord());
        let idx = self.offset(square.row(), square.column())?;
        let cell = &mut self.squares[idx];
        if square.is_occupied() {
            cell.occupy();
        } else {
            cell.vacate();
        }
        Ok(())
    }

    /// Whether a queen stands on `(row, column)`
    pub fn taken(&self, row: usize, column: usize) -> Result<bool, SquareError> {
        let idx = self.offset(row, column)?;
        Ok(self.squares[idx].is_occupied())
    }

    /// Place a queen on `(row, column)`.
    ///
    /// Placement is unconditional: prior occupancy and attacks are not
    /// checked. Call [`Board::clash`] first when legality matters.
    pub fn land(&mut self, row: usize, column: usize) -> Result<(), SquareError> {
        let idx = self.offset(row, column)?;
        self.squares[idx].occupy();
        Ok(())
    }

    /// All squares in row-major order
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().copied()
    }

    /// Occupied squares in row-major order
    pub fn queens(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares().filter(|sq| sq.is_occupied())
    }

    #[must_use]
    pub fn queen_count(&self) -> usize {
        self.queens().count()
    }

    /// Zero-based grid index for a checked 1-based coordinate
    pub(crate) fn offset(&self, row: usize, column: usize) -> Result<usize, SquareError> {
        if self.valid(row, column) {
            Ok(Self::index(row, column))
        } else {
            Err(Self::out_of_bounds(row, column))
        }
    }

    /// Caller guarantees `(row, column)` is on the board.
    #[inline]
    pub(crate) const fn index(row: usize, column: usize) -> usize {
        (row - 1) * N + (column - 1)
    }

    #[inline]
    pub(crate) fn occupied_at(&self, row: usize, column: usize) -> bool {
        self.squares[Self::index(row, column)].is_occupied()
    }

    pub(crate) const fn out_of_bounds(row: usize, column: usize) -> SquareError {
        SquareError::OutOfBounds {
            row,
            column,
            dimension: N,
        }
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy by reconstruction: a fresh empty board with a queen replayed
/// onto every occupied coordinate of the source.
impl<const N: usize> Clone for Board<N> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for queen in self.queens() {
            copy.squares[Self::index(queen.row(), queen.column())].occupy();
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_every_square() {
        let board = Board::<5>::new();
        assert_eq!(board.squares().count(), 25);
        for (i, sq) in board.squares().enumerate() {
            assert_eq!(sq.coord(), (i / 5 + 1, i % 5 + 1));
            assert!(!sq.is_occupied());
        }
    }

    #[test]
    fn test_default_dimension() {
        assert_eq!(Board::<DIMENSION>::dimension(), 8);
        let board: Board = Board::default();
        assert_eq!(board.squares().count(), 64);
    }

    #[test]
    fn test_valid_bounds() {
        let board = Board::<4>::new();
        assert!(board.valid(1, 1));
        assert!(board.valid(4, 4));
        assert!(!board.valid(0, 1));
        assert!(!board.valid(1, 0));
        assert!(!board.valid(5, 4));
        assert!(!board.valid(4, 5));
    }

    #[test]
    fn test_land_and_taken() {
        let mut board = Board::<4>::new();
        board.land(2, 3).unwrap();
        assert!(board.taken(2, 3).unwrap());
        assert_eq!(board.queen_count(), 1);
        assert_eq!(board.queens().next().map(Square::coord), Some((2, 3)));
    }

    #[test]
    fn test_land_twice_is_harmless() {
        let mut board = Board::<4>::new();
        board.land(1, 1).unwrap();
        board.land(1, 1).unwrap();
        assert_eq!(board.queen_count(), 1);
    }

    #[test]
    fn test_get_square_out_of_bounds() {
        let board = Board::<4>::new();
        assert_eq!(
            board.get_square(0, 1),
            Err(SquareError::OutOfBounds {
                row: 0,
                column: 1,
                dimension: 4
            })
        );
        assert!(board.get_square(1, 5).is_err());
        assert!(board.taken(5, 1).is_err());
    }

    #[test]
    fn test_set_square_copies_occupancy_only() {
        let mut board = Board::<3>::new();
        let mut sq = Square::new(2, 2);
        sq.occupy();
        board.set_square(sq).unwrap();
        assert!(board.taken(2, 2).unwrap());

        sq.vacate();
        board.set_square(sq).unwrap();
        assert!(!board.taken(2, 2).unwrap());
        assert_eq!(board.get_square(2, 2).unwrap().coord(), (2, 2));
    }

    #[test]
    fn test_set_square_rejects_foreign_coordinate() {
        let mut board = Board::<3>::new();
        let err = board.set_square(Square::new(4, 1)).unwrap_err();
        assert_eq!(
            err,
            SquareError::OutOfBounds {
                row: 4,
                column: 1,
                dimension: 3
            }
        );
    }

    #[test]
    fn test_land_out_of_bounds_leaves_board_untouched() {
        let mut board = Board::<3>::new();
        assert!(board.land(0, 0).is_err());
        assert_eq!(board.queen_count(), 0);
    }
}

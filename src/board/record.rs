//! Serialisation of boards as a dimension plus a list of queen coordinates.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Board, SquareError};

/// Serialised form of a [`Board`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub dimension: usize,
    pub queens: Vec<(usize, usize)>,
}

/// Why a [`BoardRecord`] could not become a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Record was written for a board of another size
    DimensionMismatch { expected: usize, found: usize },
    /// A queen lies off the board
    Square(SquareError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::DimensionMismatch { expected, found } => {
                write!(f, "Board dimension {found} does not match {expected}")
            }
            RecordError::Square(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<SquareError> for RecordError {
    fn from(err: SquareError) -> Self {
        RecordError::Square(err)
    }
}

impl<const N: usize> From<&Board<N>> for BoardRecord {
    fn from(board: &Board<N>) -> Self {
        BoardRecord {
            dimension: N,
            queens: board.queens().map(|sq| sq.coord()).collect(),
        }
    }
}

impl<const N: usize> TryFrom<BoardRecord> for Board<N> {
    type Error = RecordError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        if record.dimension != N {
            return Err(RecordError::DimensionMismatch {
                expected: N,
                found: record.dimension,
            });
        }
        let mut board = Board::<N>::new();
        for (row, column) in record.queens {
            board.land(row, column)?;
        }
        Ok(board)
    }
}

impl<const N: usize> Serialize for Board<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BoardRecord::from(self).serialize(serializer)
    }
}

impl<'de, const N: usize> Deserialize<'de> for Board<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = BoardRecord::deserialize(deserializer)?;
        Board::try_from(record).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    #[test]
    fn test_board_serializes_queens_in_row_major_order() {
        let board = BoardBuilder::<4>::new()
            .queen(3, 1)
            .queen(1, 2)
            .build()
            .unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"dimension":4,"queens":[[1,2],[3,1]]}"#);
        let back: Board<4> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_deserialize_rejects_wrong_dimension() {
        let err = serde_json::from_str::<Board<4>>(r#"{"dimension":5,"queens":[]}"#).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_deserialize_rejects_off_board_queen() {
        let err =
            serde_json::from_str::<Board<4>>(r#"{"dimension":4,"queens":[[0,1]]}"#).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_square_round_trip() {
        let mut sq = crate::board::Square::new(2, 3);
        sq.occupy();
        let json = serde_json::to_string(&sq).unwrap();
        let back: crate::board::Square = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sq);
    }
}

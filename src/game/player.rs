use serde::{Deserialize, Serialize};

use super::board::PieceColor;

/// One of the two sides. Unlike [`PieceColor`], a side is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Convert side to its piece color
    pub fn to_piece(self) -> PieceColor {
        match self {
            Side::White => PieceColor::White,
            Side::Black => PieceColor::Black,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

use super::board::{Board, Coord};
use super::player::Side;

/// A proposed move: slide the piece on `source` into `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveTrack {
    pub source: Coord,
    pub target: Coord,
}

impl MoveTrack {
    pub fn new(source: Coord, target: Coord) -> Self {
        MoveTrack { source, target }
    }

    /// Play the move on a copy of `board`.
    pub fn applied_to(&self, board: &Board) -> Board {
        let mut next = *board;
        next.swap(self.source, self.target);
        next
    }
}

/// Every slide available to `side`.
///
/// Pieces are visited in row-major order; each one tries left, up, right,
/// down.
pub fn all_moves(board: &Board, side: Side) -> Vec<MoveTrack> {
    let piece = side.to_piece();
    let mut moves = Vec::new();

    for (pos, color) in board.cells() {
        if color != piece {
            continue;
        }
        for step in [-1, 1] {
            for target in [pos.offset(step, 0), pos.offset(0, step)] {
                if Board::in_bounds(target) && !board.is_occupied(target) {
                    moves.push(MoveTrack::new(pos, target));
                }
            }
        }
    }
    moves
}

//! Flank capture rule.
//!
//! After a piece lands on `target`, the row and the column through `target`
//! are scanned from the low index up. The first run of exactly three occupied
//! cells in a line decides it; longer runs are skipped. The run fires when
//! exactly two of its cells belong to the mover, and the enemy piece is
//! captured only if it sits at an end of the run. An enemy in the middle is
//! left alone.

use std::collections::BTreeSet;

use super::board::{Board, Coord, PieceColor, COLS, ROWS};

/// Cells removed by a move that just landed on `target`, in row-major order.
pub fn captures(board: &Board, target: Coord) -> BTreeSet<Coord> {
    let key = board.color_at(target);
    let mut killed = BTreeSet::new();
    if key == PieceColor::Empty {
        return killed;
    }

    let row: Vec<Coord> = (0..COLS as i32).map(|c| Coord::new(c, target.row)).collect();
    let col: Vec<Coord> = (0..ROWS as i32).map(|r| Coord::new(target.col, r)).collect();

    for line in [row, col] {
        let colors: Vec<PieceColor> = line.iter().map(|&p| board.color_at(p)).collect();
        if let Some(i) = flanked_end(&colors, key) {
            killed.insert(line[i]);
        }
    }
    killed
}

/// Start index of the first run of exactly three occupied cells.
fn first_run_of_three(line: &[PieceColor]) -> Option<usize> {
    let mut len = 0;
    for (i, &color) in line.iter().enumerate() {
        if color != PieceColor::Empty {
            len += 1;
            continue;
        }
        if len == 3 {
            return Some(i - 3);
        }
        len = 0;
    }
    (len == 3).then(|| line.len() - 3)
}

/// Index of the end cell taken by `key`, when the line's run holds exactly
/// two `key` pieces.
fn flanked_end(line: &[PieceColor], key: PieceColor) -> Option<usize> {
    let start = first_run_of_three(line)?;
    let owned = line[start..start + 3].iter().filter(|&&c| c == key).count();
    if owned != 2 {
        return None;
    }
    // The middle never qualifies
    [start, start + 2].into_iter().find(|&i| line[i] != key)
}

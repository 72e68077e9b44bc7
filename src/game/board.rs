use std::fmt;

use crate::error::LayoutError;

use super::player::Side;

pub const ROWS: usize = 4;
pub const COLS: usize = 4;
pub const CELLS: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceColor {
    #[default]
    Empty,
    White,
    Black,
}

impl PieceColor {
    /// Decode a layout code: 0 empty, 1 white, 2 black.
    pub fn from_code(code: u8) -> Option<PieceColor> {
        match code {
            0 => Some(PieceColor::Empty),
            1 => Some(PieceColor::White),
            2 => Some(PieceColor::Black),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            PieceColor::Empty => 0,
            PieceColor::White => 1,
            PieceColor::Black => 2,
        }
    }

    /// The side owning this piece, `None` for an empty cell.
    pub fn side(self) -> Option<Side> {
        match self {
            PieceColor::Empty => None,
            PieceColor::White => Some(Side::White),
            PieceColor::Black => Some(Side::Black),
        }
    }
}

/// A cell position. Field order gives row-major ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(col: i32, row: i32) -> Self {
        Coord { row, col }
    }

    pub fn offset(self, dcol: i32, drow: i32) -> Coord {
        Coord::new(self.col + dcol, self.row + drow)
    }

    /// Manhattan distance
    pub fn distance(self, other: Coord) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }

    fn from_index(index: usize) -> Coord {
        Coord::new((index % COLS) as i32, (index / COLS) as i32)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [PieceColor; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [PieceColor::Empty; CELLS],
        }
    }

    /// Decode an initial layout of `ROWS * COLS` codes in row-major order.
    pub fn from_layout(codes: &[u8]) -> Result<Self, LayoutError> {
        if codes.len() != CELLS {
            return Err(LayoutError::WrongCellCount {
                expected: CELLS,
                found: codes.len(),
            });
        }

        let mut board = Board::new();
        for (index, &code) in codes.iter().enumerate() {
            board.cells[index] =
                PieceColor::from_code(code).ok_or(LayoutError::BadCellCode { index, code })?;
        }
        Ok(board)
    }

    /// Encode back into layout codes.
    pub fn to_layout(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.code()).collect()
    }

    fn index(pos: Coord) -> Option<usize> {
        if Self::in_bounds(pos) {
            Some(pos.row as usize * COLS + pos.col as usize)
        } else {
            None
        }
    }

    pub fn in_bounds(pos: Coord) -> bool {
        pos.col >= 0 && pos.row >= 0 && (pos.col as usize) < COLS && (pos.row as usize) < ROWS
    }

    /// Color at `pos`, `Empty` when out of bounds
    pub fn color_at(&self, pos: Coord) -> PieceColor {
        Self::index(pos).map_or(PieceColor::Empty, |i| self.cells[i])
    }

    pub fn is_occupied(&self, pos: Coord) -> bool {
        self.color_at(pos) != PieceColor::Empty
    }

    /// Both in bounds and one orthogonal step apart
    pub fn is_adjacent(a: Coord, b: Coord) -> bool {
        Self::in_bounds(a) && Self::in_bounds(b) && a.distance(b) == 1
    }

    /// Exchange two cells. No legality check; out-of-bounds positions are ignored.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        if let (Some(i), Some(j)) = (Self::index(a), Self::index(b)) {
            self.cells.swap(i, j);
        }
    }

    pub fn set(&mut self, pos: Coord, color: PieceColor) {
        if let Some(i) = Self::index(pos) {
            self.cells[i] = color;
        }
    }

    pub fn clear(&mut self, pos: Coord) {
        self.set(pos, PieceColor::Empty);
    }

    /// Number of cells holding `color`
    pub fn count(&self, color: PieceColor) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Coordinates holding `color`, row-major
    pub fn pieces(&self, color: PieceColor) -> Vec<Coord> {
        self.cells()
            .filter(|&(_, c)| c == color)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, PieceColor)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (Coord::from_index(i), c))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

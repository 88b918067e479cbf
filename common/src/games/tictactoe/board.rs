use std::fmt;

use super::types::{Mark, Move, SIZE};
use super::win_detector::winning_line;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; SIZE]; SIZE] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; SIZE]; SIZE];
    }

    pub fn is_cell_valid(&self, row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE
    }

    /// # Panics
    ///
    /// Panics on out-of-range coordinates; use [`Board::is_cell_free`] when
    /// the coordinates are not known to be valid.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Mark::Empty
    }

    pub fn is_cell_free(&self, row: usize, col: usize) -> bool {
        self.is_cell_valid(row, col) && self.is_cell_empty(row, col)
    }

    /// Writes `mark` into the cell without any legality check. Passing
    /// [`Mark::Empty`] undoes a previous move.
    pub fn make_move(&mut self, mv: Move, mark: Mark) {
        self.cells[mv.row][mv.col] = mark;
    }

    pub fn is_win(&self, mark: Mark) -> bool {
        winning_line(self, mark).is_some()
    }

    pub fn is_draw(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn mark_counts(&self) -> (usize, usize) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(x, o), &cell| match cell {
                Mark::X => (x + 1, o),
                Mark::O => (x, o + 1),
                Mark::Empty => (x, o),
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..SIZE {
            write!(f, "{} ", col + 1)?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", row + 1)?;
            for cell in cells {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

use super::board::Board;
use super::types::{Mark, SIZE, WinningLine};

const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .find(|line| {
            line.iter()
                .all(|&(row, col)| board.cell(row, col) == Some(mark))
        })
        .map(|&cells| WinningLine::new(mark, cells))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    Mark::SYMBOLS
        .into_iter()
        .find(|&mark| board.is_win(mark))
}

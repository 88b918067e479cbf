use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::types::{COMPUTER_MARK, Difficulty, HUMAN_MARK, Mark, Move, SIZE};

pub const HUMAN_WIN_SCORE: i32 = -10;
pub const COMPUTER_WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

pub fn calculate_move(
    difficulty: Difficulty,
    board: &mut Board,
    rng: &mut SessionRng,
) -> Option<Move> {
    match difficulty {
        Difficulty::Random => calculate_random_move(board, rng),
        Difficulty::Optimal => {
            let (best_move, stats) = find_best_move_with_stats(board);
            log!(
                "Optimal search explored {} nodes, picked {:?}",
                stats.nodes,
                best_move
            );
            best_move
        }
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Move> {
    if board.available_moves().is_empty() {
        return None;
    }

    loop {
        let row = rng.random_range(0..SIZE);
        let col = rng.random_range(0..SIZE);
        if board.is_cell_free(row, col) {
            return Some(Move::new(row, col));
        }
    }
}

/// Scores the position from the computer's side: maximizing on the
/// computer's turns, minimizing on the human's.
///
/// The board is mutated during the search and restored before returning.
pub fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    search(board, is_maximizing, &mut stats)
}

/// Best move for the computer, the earliest one in row-major order among
/// equally scored moves. `None` when the board has no free cell.
pub fn find_best_move(board: &mut Board) -> Option<Move> {
    find_best_move_with_stats(board).0
}

pub fn find_best_move_with_stats(board: &mut Board) -> (Option<Move>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for mv in board.available_moves() {
        board.make_move(mv, COMPUTER_MARK);
        let score = search(board, false, &mut stats);
        board.make_move(mv, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(Move::with_score(mv.row, mv.col, score));
        }
    }

    (best_move, stats)
}

fn terminal_score(board: &Board) -> Option<i32> {
    if board.is_win(HUMAN_MARK) {
        return Some(HUMAN_WIN_SCORE);
    }
    if board.is_win(COMPUTER_MARK) {
        return Some(COMPUTER_WIN_SCORE);
    }
    if board.is_draw() {
        return Some(DRAW_SCORE);
    }
    None
}

fn search(board: &mut Board, is_maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if let Some(score) = terminal_score(board) {
        return score;
    }

    let (mark, mut best_score) = if is_maximizing {
        (COMPUTER_MARK, i32::MIN)
    } else {
        (HUMAN_MARK, i32::MAX)
    };

    for mv in board.available_moves() {
        board.make_move(mv, mark);
        let score = search(board, !is_maximizing, stats);
        board.make_move(mv, Mark::Empty);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

mod board;
mod bot_controller;
mod broadcaster;
mod errors;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    COMPUTER_WIN_SCORE, DRAW_SCORE, HUMAN_WIN_SCORE, SearchStats, calculate_move,
    calculate_random_move, find_best_move, find_best_move_with_stats, minimax,
};
pub use broadcaster::{GameBroadcaster, HumanInput};
pub use errors::{Menu, MenuError, MoveError, SessionError};
pub use game_state::{
    SessionPhase, SessionSettings, TicTacToeGameState, TurnResult, parse_coordinates,
};
pub use session::TicTacToeSession;
pub use types::{
    COMPUTER_MARK, Difficulty, FirstPlayerMode, GameOutcome, HUMAN_MARK, Mark, Move, Mover,
    OpponentMode, SIZE, WinningLine,
};
pub use win_detector::{check_win, winning_line};

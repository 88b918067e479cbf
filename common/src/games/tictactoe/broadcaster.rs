use super::board::Board;
use super::errors::MoveError;
use super::types::{GameOutcome, Mark};

pub trait GameBroadcaster {
    fn render_board(&mut self, board: &Board);
    fn announce_first_player(&mut self, mark: Mark);
    fn announce_turn(&mut self, mark: Mark);
    fn announce_result(&mut self, outcome: GameOutcome);
    fn report_invalid_move(&mut self, error: MoveError);
}

pub trait HumanInput {
    /// Returns the raw `"row col"` line, or `Ok(None)` once input is exhausted.
    fn read_coordinates(&mut self, mark: Mark) -> Result<Option<String>, String>;
}

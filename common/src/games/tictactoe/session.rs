use crate::games::SessionRng;
use crate::log;
use super::broadcaster::{GameBroadcaster, HumanInput};
use super::errors::SessionError;
use super::game_state::{SessionPhase, TicTacToeGameState, TurnResult};
use super::types::{FirstPlayerMode, GameOutcome, Mover};

pub struct TicTacToeSession;

impl TicTacToeSession {
    pub fn start(
        state: &mut TicTacToeGameState,
        first_player: FirstPlayerMode,
        input: &mut impl HumanInput,
        broadcaster: &mut impl GameBroadcaster,
        rng: &mut SessionRng,
    ) -> Result<GameOutcome, SessionError> {
        let first = state.choose_first_player(first_player, rng)?;
        broadcaster.announce_first_player(first);
        Self::run(state, input, broadcaster, rng)
    }

    pub fn run(
        state: &mut TicTacToeGameState,
        input: &mut impl HumanInput,
        broadcaster: &mut impl GameBroadcaster,
        rng: &mut SessionRng,
    ) -> Result<GameOutcome, SessionError> {
        if state.phase() != SessionPhase::TurnLoop {
            return Err(SessionError::WrongPhase(state.phase()));
        }

        loop {
            let turn = match state.current_mover() {
                Mover::Computer => state.play_computer_turn(rng)?,
                Mover::Human => play_human_turn(state, input, broadcaster)?,
            };

            broadcaster.render_board(state.board());

            if let Some(outcome) = turn.outcome {
                broadcaster.announce_result(outcome);
                log!("Session finished after {} steps (seed {})", state.step(), rng.seed());
                return Ok(outcome);
            }
        }
    }
}

fn play_human_turn(
    state: &mut TicTacToeGameState,
    input: &mut impl HumanInput,
    broadcaster: &mut impl GameBroadcaster,
) -> Result<TurnResult, SessionError> {
    let mark = state.current_mark();
    loop {
        broadcaster.announce_turn(mark);
        let line = input
            .read_coordinates(mark)
            .map_err(SessionError::Io)?
            .ok_or(SessionError::InputClosed)?;

        match state.submit_human_input(&line) {
            Ok(turn) => return Ok(turn),
            Err(SessionError::InvalidMove(e)) => {
                log!("Rejected input {:?} from {}: {:?}", line, mark, e);
                broadcaster.report_invalid_move(e);
            }
            Err(e) => return Err(e),
        }
    }
}

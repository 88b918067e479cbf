use std::io::{BufRead, Write};

use common::games::tictactoe::{
    Difficulty, OpponentMode, SessionError, SessionPhase, TicTacToeGameState,
};
use common::log;

use crate::console_io::Prompter;

/// Menu answers fixed ahead of time by config or command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuPresets {
    pub opponent: Option<OpponentMode>,
    pub difficulty: Option<Difficulty>,
}

fn ask_required<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    question: &str,
) -> Result<String, SessionError> {
    prompter
        .ask(question)
        .map_err(SessionError::Io)?
        .ok_or(SessionError::InputClosed)
}

/// Walks the session through opponent and difficulty selection until it is
/// ready to pick the first player.
pub fn configure_session<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    presets: MenuPresets,
    prompter: &mut Prompter<R, W>,
) -> Result<(), SessionError> {
    loop {
        let result = match state.phase() {
            SessionPhase::ConfiguringOpponent => match presets.opponent {
                Some(mode) => state.submit_opponent_choice(mode == OpponentMode::Computer),
                None => {
                    let answer =
                        ask_required(prompter, "Do you want to play against computer? (y/n): ")?;
                    state.submit_opponent_input(&answer)
                }
            },
            SessionPhase::ConfiguringDifficulty => match presets.difficulty {
                Some(difficulty) => state.submit_difficulty(difficulty),
                None => {
                    prompter
                        .say("Choose difficulty:\n1. Random\n2. Optimal")
                        .map_err(SessionError::Io)?;
                    let answer = ask_required(prompter, "Your choice: ")?;
                    state.submit_difficulty_input(&answer)
                }
            },
            _ => return Ok(()),
        };

        match result {
            Ok(()) => {}
            Err(SessionError::Menu(e)) => {
                log!("Menu input rejected: {:?}", e);
                prompter.say(&e.to_string()).map_err(SessionError::Io)?;
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn ask_play_again<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<bool, SessionError> {
    loop {
        let answer = ask_required(prompter, "Play again? (y/n): ")?;
        match answer.trim() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(prompter: &Prompter<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(prompter.writer().clone()).unwrap()
    }

    #[test]
    fn test_hot_seat_needs_one_answer() {
        let mut state = TicTacToeGameState::new();
        let mut prompter = prompter("n\n");

        configure_session(&mut state, MenuPresets::default(), &mut prompter).unwrap();

        assert_eq!(state.phase(), SessionPhase::ChoosingFirstPlayer);
        assert_eq!(state.settings().opponent_mode, OpponentMode::Human);
    }

    #[test]
    fn test_invalid_difficulty_asks_opponent_again() {
        let mut state = TicTacToeGameState::new();
        let mut prompter = prompter("maybe\ny\n7\ny\n2\n");

        configure_session(&mut state, MenuPresets::default(), &mut prompter).unwrap();

        assert_eq!(state.settings().difficulty, Difficulty::Optimal);
        let text = output(&prompter);
        assert_eq!(text.matches("Do you want to play against computer?").count(), 3);
        assert!(text.contains("Invalid difficulty '7'!"));
    }

    #[test]
    fn test_presets_skip_questions() {
        let mut state = TicTacToeGameState::new();
        let mut prompter = prompter("");
        let presets = MenuPresets {
            opponent: Some(OpponentMode::Computer),
            difficulty: Some(Difficulty::Random),
        };

        configure_session(&mut state, presets, &mut prompter).unwrap();

        assert_eq!(state.phase(), SessionPhase::ChoosingFirstPlayer);
        assert!(output(&prompter).is_empty());
    }

    #[test]
    fn test_preset_opponent_still_asks_difficulty() {
        let mut state = TicTacToeGameState::new();
        let mut prompter = prompter("1\n");
        let presets = MenuPresets {
            opponent: Some(OpponentMode::Computer),
            difficulty: None,
        };

        configure_session(&mut state, presets, &mut prompter).unwrap();

        assert_eq!(state.settings().difficulty, Difficulty::Random);
        assert!(output(&prompter).contains("Choose difficulty:"));
    }

    #[test]
    fn test_end_of_input_during_menu() {
        let mut state = TicTacToeGameState::new();
        let mut prompter = prompter("y\n");

        let result = configure_session(&mut state, MenuPresets::default(), &mut prompter);

        assert_eq!(result, Err(SessionError::InputClosed));
    }

    #[test]
    fn test_play_again_repeats_until_answered() {
        let mut prompter = prompter("sure\nn\n");

        assert_eq!(ask_play_again(&mut prompter), Ok(false));
        assert_eq!(output(&prompter).matches("Play again?").count(), 2);
    }
}

use std::io::{BufRead, Write};

use common::config::GameConfig;
use common::games::SessionRng;
use common::games::tictactoe::{
    GameBroadcaster, SessionError, TicTacToeGameState, TicTacToeSession,
};
use common::log;

use crate::console_io::Prompter;
use crate::menu::{MenuPresets, ask_play_again, configure_session};

/// Plays games until the user declines another round. Returns how many
/// games were finished.
pub fn play<R: BufRead, W: Write>(
    config: &GameConfig,
    prompter: &mut Prompter<R, W>,
    broadcaster: &mut impl GameBroadcaster,
    rng: &mut SessionRng,
) -> Result<u32, SessionError> {
    let presets = MenuPresets {
        opponent: config.opponent,
        difficulty: config.difficulty,
    };
    let mut state = TicTacToeGameState::new();
    configure_session(&mut state, presets, prompter)?;

    let mut games = 0;
    loop {
        let outcome =
            TicTacToeSession::start(&mut state, config.first_player, prompter, broadcaster, rng)?;
        games += 1;
        log!("Game {} ended: {}", games, outcome);

        if !ask_play_again(prompter)? {
            return Ok(games);
        }
        state.restart()?;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use common::games::tictactoe::{Difficulty, FirstPlayerMode, OpponentMode};

    use super::*;
    use crate::console_io::ConsoleBroadcaster;

    #[test]
    fn test_full_hot_seat_game_from_menu() {
        let config = GameConfig {
            first_player: FirstPlayerMode::X,
            ..GameConfig::default()
        };
        let input = "n\n1 1\n2 1\n1 2\n2 2\n1 3\nn\n";
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        let mut broadcaster = ConsoleBroadcaster::new(Vec::new());
        let mut rng = SessionRng::new(4);

        let games = play(&config, &mut prompter, &mut broadcaster, &mut rng).unwrap();

        assert_eq!(games, 1);
        let text = String::from_utf8(broadcaster.writer().clone()).unwrap();
        assert!(text.starts_with("X starts the game!\n"));
        assert!(text.ends_with("X wins (1 1 to 1 3)\n"));
    }

    #[test]
    fn test_two_games_against_optimal_computer() {
        let config = GameConfig {
            opponent: Some(OpponentMode::Computer),
            difficulty: Some(Difficulty::Optimal),
            first_player: FirstPlayerMode::O,
            ..GameConfig::default()
        };
        // The computer wins each round within two human moves; the leftover
        // lines are skipped by the play-again question.
        let round = "3 1\n3 2\n3 3\n2 1\n2 2\n2 3\n";
        let input = format!("{round}y\n{round}n\n");
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        let mut broadcaster = ConsoleBroadcaster::new(Vec::new());
        let mut rng = SessionRng::new(9);

        let games = play(&config, &mut prompter, &mut broadcaster, &mut rng).unwrap();

        assert_eq!(games, 2);
    }
}

use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::calculate_move;
use super::errors::{Menu, MenuError, MoveError, SessionError};
use super::types::{
    COMPUTER_MARK, Difficulty, FirstPlayerMode, GameOutcome, Mark, Move, Mover, OpponentMode,
    SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    ConfiguringOpponent,
    ConfiguringDifficulty,
    ChoosingFirstPlayer,
    TurnLoop,
    Finished(GameOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub opponent_mode: OpponentMode,
    pub difficulty: Difficulty,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            opponent_mode: OpponentMode::Human,
            difficulty: Difficulty::Random,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    pub mv: Move,
    pub mark: Mark,
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    phase: SessionPhase,
    settings: SessionSettings,
    current_mark: Mark,
    step: u32,
    last_move: Option<Move>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: SessionPhase::ConfiguringOpponent,
            settings: SessionSettings::default(),
            current_mark: Mark::X,
            step: 0,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            SessionPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    fn expect_phase(&self, expected: SessionPhase) -> Result<(), SessionError> {
        if self.phase != expected {
            return Err(SessionError::WrongPhase(self.phase));
        }
        Ok(())
    }

    pub fn submit_opponent_choice(&mut self, vs_computer: bool) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::ConfiguringOpponent)?;

        if vs_computer {
            self.settings.opponent_mode = OpponentMode::Computer;
            self.phase = SessionPhase::ConfiguringDifficulty;
        } else {
            self.settings.opponent_mode = OpponentMode::Human;
            self.phase = SessionPhase::ChoosingFirstPlayer;
        }
        log!("Opponent: {:?}", self.settings.opponent_mode);
        Ok(())
    }

    pub fn submit_opponent_input(&mut self, input: &str) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::ConfiguringOpponent)?;

        match input.trim() {
            "y" => self.submit_opponent_choice(true),
            "n" => self.submit_opponent_choice(false),
            other => Err(MenuError::InvalidMenuChoice {
                menu: Menu::Opponent,
                input: other.to_string(),
            }
            .into()),
        }
    }

    pub fn submit_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::ConfiguringDifficulty)?;

        self.settings.difficulty = difficulty;
        self.phase = SessionPhase::ChoosingFirstPlayer;
        log!("Difficulty: {:?}", difficulty);
        Ok(())
    }

    pub fn submit_difficulty_input(&mut self, input: &str) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::ConfiguringDifficulty)?;

        match input.trim() {
            "1" => self.submit_difficulty(Difficulty::Random),
            "2" => self.submit_difficulty(Difficulty::Optimal),
            other => {
                self.phase = SessionPhase::ConfiguringOpponent;
                Err(MenuError::InvalidMenuChoice {
                    menu: Menu::Difficulty,
                    input: other.to_string(),
                }
                .into())
            }
        }
    }

    pub fn choose_first_player(
        &mut self,
        mode: FirstPlayerMode,
        rng: &mut SessionRng,
    ) -> Result<Mark, SessionError> {
        self.expect_phase(SessionPhase::ChoosingFirstPlayer)?;

        self.current_mark = match mode {
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
            FirstPlayerMode::X => Mark::X,
            FirstPlayerMode::O => Mark::O,
        };
        self.phase = SessionPhase::TurnLoop;
        log!("{} starts the game", self.current_mark);
        Ok(self.current_mark)
    }

    pub fn current_mover(&self) -> Mover {
        if self.settings.opponent_mode == OpponentMode::Computer
            && self.current_mark == COMPUTER_MARK
        {
            Mover::Computer
        } else {
            Mover::Human
        }
    }

    pub fn validate_human_move(&self, row: i64, col: i64) -> Result<Move, MoveError> {
        let size = SIZE as i64;
        if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
            return Err(MoveError::OutOfRange);
        }

        let mv = Move::new((row - 1) as usize, (col - 1) as usize);
        if !self.board.is_cell_free(mv.row, mv.col) {
            return Err(MoveError::Occupied);
        }
        Ok(mv)
    }

    pub fn submit_human_move(&mut self, row: i64, col: i64) -> Result<TurnResult, SessionError> {
        self.expect_phase(SessionPhase::TurnLoop)?;
        if self.current_mover() != Mover::Human {
            return Err(SessionError::NotHumanTurn);
        }

        let mv = self.validate_human_move(row, col)?;
        self.apply_move(mv)
    }

    pub fn submit_human_input(&mut self, line: &str) -> Result<TurnResult, SessionError> {
        self.expect_phase(SessionPhase::TurnLoop)?;

        let (row, col) = parse_coordinates(line)?;
        self.submit_human_move(row, col)
    }

    pub fn computer_move(&mut self, rng: &mut SessionRng) -> Result<Move, SessionError> {
        self.expect_phase(SessionPhase::TurnLoop)?;
        if self.current_mover() != Mover::Computer {
            return Err(SessionError::NotComputerTurn);
        }

        calculate_move(self.settings.difficulty, &mut self.board, rng)
            .ok_or(SessionError::NoMoveAvailable)
    }

    pub fn play_computer_turn(
        &mut self,
        rng: &mut SessionRng,
    ) -> Result<TurnResult, SessionError> {
        let mv = self.computer_move(rng)?;
        self.apply_move(mv)
    }

    // Callers have already checked phase and mover; win is checked before draw.
    fn apply_move(&mut self, mv: Move) -> Result<TurnResult, SessionError> {
        if !self.board.is_cell_valid(mv.row, mv.col) {
            return Err(MoveError::OutOfRange.into());
        }
        if !self.board.is_cell_empty(mv.row, mv.col) {
            return Err(MoveError::Occupied.into());
        }

        let mark = self.current_mark;
        self.board.make_move(mv, mark);
        self.last_move = Some(mv);
        self.step += 1;
        log!("Step {}: {} plays ({}, {})", self.step, mark, mv.row + 1, mv.col + 1);

        let outcome = if self.board.is_win(mark) {
            Some(GameOutcome::Winner(mark))
        } else if self.board.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                self.phase = SessionPhase::Finished(outcome);
                log!("Game over: {}", outcome);
            }
            None => {
                if let Some(next) = mark.opponent() {
                    self.current_mark = next;
                }
            }
        }

        Ok(TurnResult { mv, mark, outcome })
    }

    pub fn restart(&mut self) -> Result<(), SessionError> {
        if self.outcome().is_none() {
            return Err(SessionError::WrongPhase(self.phase));
        }

        self.board.clear();
        self.step = 0;
        self.last_move = None;
        self.phase = SessionPhase::ChoosingFirstPlayer;
        Ok(())
    }
}

pub fn parse_coordinates(line: &str) -> Result<(i64, i64), MoveError> {
    let mut parts = line.split_whitespace();
    let mut next_number = || {
        parts
            .next()
            .and_then(|part| part.parse::<i64>().ok())
            .ok_or(MoveError::NotANumber)
    };
    let row = next_number()?;
    let col = next_number()?;
    Ok((row, col))
}

use std::fmt;

use super::game_state::SessionPhase;
use super::types::SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Opponent,
    Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    InvalidMenuChoice { menu: Menu, input: String },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::InvalidMenuChoice { menu: Menu::Opponent, input } => {
                write!(f, "Invalid choice '{}', answer y or n!", input)
            }
            MenuError::InvalidMenuChoice { menu: Menu::Difficulty, input } => {
                write!(f, "Invalid difficulty '{}'!", input)
            }
        }
    }
}

impl std::error::Error for MenuError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    NotANumber,
    OutOfRange,
    Occupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotANumber => write!(f, "You should enter numbers!"),
            MoveError::OutOfRange => write!(f, "Coordinates should be from 1 to {}!", SIZE),
            MoveError::Occupied => write!(f, "This cell is occupied! Choose another one!"),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    WrongPhase(SessionPhase),
    NotHumanTurn,
    NotComputerTurn,
    NoMoveAvailable,
    Menu(MenuError),
    InvalidMove(MoveError),
    InputClosed,
    Io(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::WrongPhase(phase) => {
                write!(f, "Operation not allowed while {:?}", phase)
            }
            SessionError::NotHumanTurn => write!(f, "It is the computer's turn"),
            SessionError::NotComputerTurn => write!(f, "It is not the computer's turn"),
            SessionError::NoMoveAvailable => write!(f, "No free cell left to play"),
            SessionError::Menu(e) => write!(f, "{}", e),
            SessionError::InvalidMove(e) => write!(f, "{}", e),
            SessionError::InputClosed => write!(f, "Input closed before the game ended"),
            SessionError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Menu(e) => Some(e),
            SessionError::InvalidMove(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MenuError> for SessionError {
    fn from(e: MenuError) -> Self {
        SessionError::Menu(e)
    }
}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        SessionError::InvalidMove(e)
    }
}

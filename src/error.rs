use crate::types::Player;

/// Errors raised by the engine API. Every variant is a caller mistake;
/// the game state is never touched when one is returned.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move at ({row}, {col})")]
    InvalidMove { row: u8, col: u8 },

    #[error("row/col out of range: ({row}, {col})")]
    OutOfBounds { row: i32, col: i32 },

    #[error("game is already over")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Player),

    #[error("selector returned no move for {0:?} while it has legal moves")]
    NoMoveSelected(Player),

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

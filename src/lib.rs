use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::{Board, LegalMoves, within_bounds};
pub use config::{AiPolicy, GameConfig};
pub use error::GameError;
pub use game::{GameState, MoveRecord, Session, TurnState};
pub use types::{Cell, GameResult, Outcome, Player, Position, Score};

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

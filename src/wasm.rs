//! Browser entry points. The page renders, wires clicks and paces the
//! computer's reply; everything rule-related goes through [`OthelloGame`].

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Session;
use crate::types::Player;

#[wasm_bindgen]
pub struct OthelloGame {
    session: Session,
}

#[wasm_bindgen]
impl OthelloGame {
    /// `config` may be `undefined` for the defaults (greedy computer as white).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<OthelloGame, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| GameError::InvalidConfig(e.to_string()))?
        };
        Ok(Self {
            session: Session::new(config),
        })
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.to_snapshot())
    }

    /// `[{row, col, flips}]` for the side to move.
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.legal_moves())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.session.is_computer_turn()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.state().is_terminal()
    }

    /// Human move. Returns the new state.
    pub fn place(&mut self, row: i32, col: i32) -> Result<JsValue, JsError> {
        self.session.place(row, col)?;
        self.state()
    }

    /// Computer move (or pass). Returns the new state.
    pub fn ai_move(&mut self) -> Result<JsValue, JsError> {
        self.session.step_computer()?;
        self.state()
    }

    /// `{outcome, black_count, white_count}` once the game is over, else `undefined`.
    pub fn result(&self) -> Result<JsValue, JsError> {
        match self.session.to_game_result() {
            Some(result) => to_js(&result),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Loads a position in the 8-row text format.
    pub fn load_position(&mut self, rows: &str, black_to_move: bool) -> Result<JsValue, JsError> {
        let board: Board = rows.parse()?;
        let to_move = if black_to_move {
            Player::Black
        } else {
            Player::White
        };
        self.session.load_position(board, to_move);
        self.state()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

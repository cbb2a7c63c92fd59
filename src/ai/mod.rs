//! Computer move selection.
//!
//! A selector only chooses a coordinate; the game applies it. Swapping the
//! policy never touches legality.

mod greedy;
mod random;

pub use greedy::GreedySelector;
pub use random::RandomSelector;

use crate::board::Board;
use crate::types::{Player, Position};

pub trait MoveSelector: Send {
    /// Returns `None` when `player` has no legal move.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Position>;
}

use crate::ai::MoveSelector;
use crate::board::Board;
use crate::types::{Player, Position};

/// Picks the move that flips the most stones right now.
/// Ties go to the first move in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        let legal = board.legal_moves(player);
        let mut best: Option<(Position, usize)> = None;

        for (pos, flips) in legal.iter() {
            if best.is_none_or(|(_, most)| flips.len() > most) {
                best = Some((pos, flips.len()));
            }
        }

        best.map(|(pos, _)| pos)
    }
}

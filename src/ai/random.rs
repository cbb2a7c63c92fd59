use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ai::MoveSelector;
use crate::board::Board;
use crate::types::{Player, Position};

/// Picks uniformly among legal moves, ignoring capture size.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: SmallRng,
}

impl RandomSelector {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        let legal = board.legal_moves(player);
        if legal.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..legal.len());
        legal.positions().nth(pick)
    }
}

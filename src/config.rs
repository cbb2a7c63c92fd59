use serde::{Deserialize, Serialize};
use web_time::SystemTime;

use crate::ai::{GreedySelector, MoveSelector, RandomSelector};
use crate::error::GameError;
use crate::types::Player;

/// How the computer side picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiPolicy {
    /// Largest immediate capture, first in row-major order on ties.
    #[default]
    Greedy,
    /// Uniform among legal moves.
    Random,
}

/// Session settings handed over by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub policy: AiPolicy,
    pub computer: Player,
    /// Seed for [`AiPolicy::Random`]. Taken from the clock when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            policy: AiPolicy::Greedy,
            computer: Player::White,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    pub fn human(&self) -> Player {
        self.computer.opponent()
    }

    pub fn build_selector(&self) -> Box<dyn MoveSelector> {
        match self.policy {
            AiPolicy::Greedy => Box::new(GreedySelector),
            AiPolicy::Random => {
                let seed = self.seed.unwrap_or_else(clock_seed);
                log::debug!("random selector seeded with {seed}");
                Box::new(RandomSelector::seeded(seed))
            }
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn empty_object_uses_defaults() {
        let config = GameConfig::from_json("{}").unwrap();

        assert_eq!(config, GameConfig::default());
        assert_eq!(config.human(), Player::Black);
    }

    #[test]
    fn parses_all_fields() {
        let config =
            GameConfig::from_json(r#"{"policy":"random","computer":"black","seed":9}"#).unwrap();

        assert_eq!(config.policy, AiPolicy::Random);
        assert_eq!(config.computer, Player::Black);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = GameConfig::from_json(r#"{"policy":"minimax"}"#).unwrap_err();

        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn seeded_random_selectors_agree() {
        let config = GameConfig {
            policy: AiPolicy::Random,
            seed: Some(11),
            ..GameConfig::default()
        };
        let board = Board::new();
        let mut a = config.build_selector();
        let mut b = config.build_selector();

        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, Player::Black),
                b.select_move(&board, Player::Black)
            );
        }
    }
}

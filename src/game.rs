use log::{debug, info, warn};

use crate::ai::MoveSelector;
use crate::board::{Board, LegalMoves, within_bounds};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::types::{GameResult, GameSnapshot, LegalMoveView, Player, Position, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove(Player),
    Terminal,
}

/// What one accepted move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub position: Position,
    /// Flip order, for replaying the animation.
    pub flipped: Vec<Position>,
    /// Side that had to pass right after this move, if any.
    pub passed: Option<Player>,
    pub next: TurnState,
}

/// Board, side to move and terminal flag of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Player,
    terminal: bool,
    is_pass: bool,
    last_move: Option<Position>,
    flipped: Vec<Position>,
}

impl GameState {
    /// Standard starting position, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::Black,
            terminal: false,
            is_pass: false,
            last_move: None,
            flipped: Vec::new(),
        }
    }

    /// Starts from an arbitrary position. Pass and game-over rules are applied
    /// immediately, so `to_move` may not end up being the side to move.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut state = Self {
            board,
            current: to_move,
            ..Self::new()
        };
        state.resolve_turn();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn flipped(&self) -> &[Position] {
        &self.flipped
    }

    pub fn turn_state(&self) -> TurnState {
        if self.terminal {
            TurnState::Terminal
        } else {
            TurnState::AwaitingMove(self.current)
        }
    }

    /// Legal moves of the side to move. Empty once the game is over.
    pub fn legal_moves(&self) -> LegalMoves {
        if self.terminal {
            return LegalMoves::default();
        }
        self.board.legal_moves(self.current)
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Final score and winner, only once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.terminal.then(|| GameResult::from_score(self.score()))
    }

    /// Plays `pos` for the side to move, then hands the turn over, passing or
    /// ending the game when the rules require it.
    ///
    /// Fails with [`GameError::InvalidMove`] without touching the state when
    /// `pos` is not a legal move: occupied, off-board, capturing nothing, or
    /// the game is already over.
    pub fn apply_move(&mut self, pos: Position) -> Result<MoveRecord, GameError> {
        let player = self.current;
        let flips = if self.terminal {
            Vec::new()
        } else {
            self.board.flips_for_move(pos, player)
        };
        if flips.is_empty() {
            return Err(GameError::InvalidMove {
                row: pos.row,
                col: pos.col,
            });
        }

        self.board.apply_move(pos, player, &flips);
        debug!(
            "{player:?} played ({}, {}) flipping {}",
            pos.row,
            pos.col,
            flips.len()
        );

        self.last_move = Some(pos);
        self.flipped = flips;
        self.is_pass = false;
        self.current = player.opponent();
        self.resolve_turn();

        Ok(MoveRecord {
            player,
            position: pos,
            flipped: self.flipped.clone(),
            passed: self.is_pass.then_some(player.opponent()),
            next: self.turn_state(),
        })
    }

    /// Skips the side to move when it is stuck, or ends the game when both
    /// sides are.
    fn resolve_turn(&mut self) {
        if self.terminal || self.board.has_legal_move(self.current) {
            return;
        }

        let stuck = self.current;
        if self.board.has_legal_move(stuck.opponent()) {
            info!("{stuck:?} has no legal move, passing");
            self.current = stuck.opponent();
            self.is_pass = true;
        } else {
            self.terminal = true;
            let score = self.score();
            info!("game over: black {} white {}", score.black, score.white);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// One human-vs-computer game as driven by the page.
pub struct Session {
    state: GameState,
    config: GameConfig,
    selector: Box<dyn MoveSelector>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let selector = config.build_selector();
        Self::with_selector(config, selector)
    }

    pub fn with_selector(config: GameConfig, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            state: GameState::new(),
            config,
            selector,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Back to the starting position with a fresh selector.
    pub fn restart(&mut self) {
        self.state = GameState::new();
        self.selector = self.config.build_selector();
        info!("game restarted");
    }

    /// Replaces the game with an arbitrary position.
    pub fn load_position(&mut self, board: Board, to_move: Player) {
        self.state = GameState::from_position(board, to_move);
    }

    pub fn is_computer_turn(&self) -> bool {
        self.state.turn_state() == TurnState::AwaitingMove(self.config.computer)
    }

    /// Human move from a clicked cell.
    pub fn place(&mut self, row: i32, col: i32) -> Result<MoveRecord, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(GameError::NotYourTurn(self.config.human()));
        }

        let pos = row_col_to_pos(row, col)?;
        self.state.apply_move(pos)
    }

    /// Lets the computer take its turn.
    ///
    /// Passes are already resolved when a move lands, so whenever the computer
    /// is due it has a legal move.
    pub fn step_computer(&mut self) -> Result<MoveRecord, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        let computer = self.config.computer;
        if !self.is_computer_turn() {
            return Err(GameError::NotYourTurn(computer));
        }

        let pos = self
            .selector
            .select_move(self.state.board(), computer)
            .ok_or(GameError::NoMoveSelected(computer))?;

        self.state.apply_move(pos).inspect_err(|err| {
            warn!("selector chose ({}, {}) for {computer:?}: {err}", pos.row, pos.col);
        })
    }

    /// Legal moves of the side to move, with flip counts for hints.
    pub fn legal_moves(&self) -> Vec<LegalMoveView> {
        self.state
            .legal_moves()
            .iter()
            .map(|(pos, flips)| LegalMoveView {
                row: pos.row,
                col: pos.col,
                flips: flips.len() as u8,
            })
            .collect()
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        let score = self.state.score();
        GameSnapshot {
            board: self.state.board().to_array().to_vec(),
            current_player: self.state.current_player(),
            black_count: score.black,
            white_count: score.white,
            is_game_over: self.state.is_terminal(),
            is_pass: self.state.is_pass(),
            last_move: self.state.last_move(),
            flipped: self.state.flipped().to_vec(),
        }
    }

    pub fn to_game_result(&self) -> Option<GameResult> {
        self.state.result()
    }
}

fn row_col_to_pos(row: i32, col: i32) -> Result<Position, GameError> {
    if !within_bounds(row, col) {
        return Err(GameError::OutOfBounds { row, col });
    }
    Ok(Position::new(row as u8, col as u8))
}

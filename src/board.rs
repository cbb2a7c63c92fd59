use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;
use crate::types::{BOARD_SIZE, Cell, NUM_SQUARES, Player, Position, Score};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True iff both coordinates lie in `[0, 8)`.
pub fn within_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Legal coordinates for one side mapped to their flip sets.
///
/// Iteration is row-major. The set is a snapshot of one board; it goes stale
/// as soon as that board is mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    moves: BTreeMap<Position, Vec<Position>>,
}

impl LegalMoves {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.moves.contains_key(&pos)
    }

    pub fn flips(&self, pos: Position) -> Option<&[Position]> {
        self.moves.get(&pos).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Position])> {
        self.moves.iter().map(|(pos, flips)| (*pos, flips.as_slice()))
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves.keys().copied()
    }
}

/// 8x8 Othello grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Position::new(3, 3), Cell::White);
        board.set(Position::new(3, 4), Cell::Black);
        board.set(Position::new(4, 3), Cell::Black);
        board.set(Position::new(4, 4), Cell::White);
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    /// `None` when `pos` is off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cell_at(pos.row as i32, pos.col as i32)
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        within_bounds(row, col).then(|| self.cells[row as usize * BOARD_SIZE + col as usize])
    }

    /// Opponent stones that `player` would flip by playing at `pos`, in
    /// direction order. Empty when the square is occupied, off-board, or
    /// captures nothing.
    pub fn flips_for_move(&self, pos: Position, player: Player) -> Vec<Position> {
        let (row, col) = (pos.row as i32, pos.col as i32);
        if self.cell_at(row, col) != Some(Cell::Empty) {
            return Vec::new();
        }

        let mine = player.stone();
        let theirs = player.opponent().stone();
        let mut flips = Vec::new();

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = Vec::new();

            while self.cell_at(r, c) == Some(theirs) {
                line.push(Position::new(r as u8, c as u8));
                r += dr;
                c += dc;
            }

            // A run only counts when it is non-empty and capped by our own stone.
            if !line.is_empty() && self.cell_at(r, c) == Some(mine) {
                flips.extend(line);
            }
        }

        flips
    }

    /// Every legal move for `player`, scanned row-major.
    pub fn legal_moves(&self, player: Player) -> LegalMoves {
        let moves = all_positions()
            .filter_map(|pos| {
                let flips = self.flips_for_move(pos, player);
                (!flips.is_empty()).then_some((pos, flips))
            })
            .collect();
        LegalMoves { moves }
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        all_positions().any(|pos| !self.flips_for_move(pos, player).is_empty())
    }

    /// Places a stone for `player` and flips `flips`.
    ///
    /// Caller contract: `flips` is exactly `flips_for_move(pos, player)` and is
    /// non-empty. Nothing is re-validated here.
    pub fn apply_move(&mut self, pos: Position, player: Player, flips: &[Position]) {
        debug_assert!(!flips.is_empty(), "apply_move() requires a legal move");
        let stone = player.stone();
        self.set(pos, stone);
        for &flip in flips {
            self.set(flip, stone);
        }
    }

    pub fn score(&self) -> Score {
        self.cells.iter().fold(Score::default(), |mut score, cell| {
            match cell {
                Cell::Black => score.black += 1,
                Cell::White => score.white += 1,
                Cell::Empty => {}
            }
            score
        })
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.score().total()
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        self.cells.map(Cell::to_u8)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses 8 rows of 8 squares: `.` empty, `B`/`X` black, `W`/`O` white.
/// Whitespace is ignored.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut squares = s.chars().filter(|ch| !ch.is_whitespace());

        for pos in all_positions() {
            let ch = squares
                .next()
                .ok_or_else(|| GameError::InvalidPosition(format!("expected {NUM_SQUARES} squares")))?;
            let cell = match ch {
                '.' | '-' => Cell::Empty,
                'B' | 'b' | 'X' | 'x' => Cell::Black,
                'W' | 'w' | 'O' | 'o' => Cell::White,
                other => {
                    return Err(GameError::InvalidPosition(format!(
                        "unexpected square '{other}' at ({}, {})",
                        pos.row, pos.col
                    )));
                }
            };
            board.set(pos, cell);
        }

        if squares.next().is_some() {
            return Err(GameError::InvalidPosition(format!(
                "more than {NUM_SQUARES} squares"
            )));
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn all_positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn board(rows: &str) -> Board {
        rows.parse().unwrap()
    }

    #[test]
    fn initial_black_legal_moves_are_four_expected_squares() {
        let board = Board::new();

        let legal: Vec<_> = board.legal_moves(Player::Black).positions().collect();

        assert_eq!(legal, vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)]); // d3,c4,f5,e6
    }

    #[test]
    fn within_bounds_rejects_edges() {
        assert!(within_bounds(0, 7));
        assert!(!within_bounds(-1, 0));
        assert!(!within_bounds(0, 8));
    }

    #[test]
    fn opening_move_flips_one_stone_and_updates_counts() {
        let mut board = Board::new();

        let flips = board.flips_for_move(pos(2, 3), Player::Black); // d3
        assert_eq!(flips, vec![pos(3, 3)]); // d4

        board.apply_move(pos(2, 3), Player::Black, &flips);

        assert_eq!(board.score(), Score { black: 4, white: 1 });
        assert_eq!(board.empty_count(), 59);
        assert_eq!(board.get(pos(2, 3)), Some(Cell::Black));
        assert_eq!(board.get(pos(3, 3)), Some(Cell::Black));
        assert_eq!(board.get(pos(0, 8)), None);
        let cells = board.to_array();
        assert_eq!(cells[pos(2, 3).index()], 1);
        assert_eq!(cells[pos(3, 3).index()], 1);
        assert_eq!(cells[pos(4, 4).index()], 2);
    }

    #[test]
    fn occupied_and_off_board_squares_have_no_flips() {
        let board = Board::new();

        assert!(board.flips_for_move(pos(3, 3), Player::Black).is_empty());
        assert!(board.flips_for_move(pos(8, 0), Player::Black).is_empty());
        assert!(board.flips_for_move(pos(0, 0), Player::Black).is_empty());
    }

    #[test]
    fn run_ending_on_empty_or_edge_is_discarded() {
        let board = board(
            "
            .WWW....
            W.......
            ........
            ........
            ........
            ........
            ........
            ........",
        );

        assert!(board.flips_for_move(pos(0, 0), Player::Black).is_empty());
    }

    #[test]
    fn adjacent_own_stone_does_not_capture() {
        let board = board(
            "
            .BW.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........",
        );

        assert!(board.flips_for_move(pos(0, 0), Player::Black).is_empty());
        assert!(board.legal_moves(Player::Black).is_empty());
    }

    #[test]
    fn flips_concatenate_runs_in_direction_order() {
        let board = board(
            "
            B.BB....
            .WW.....
            B.WWB...
            ........
            ..B.....
            ........
            ........
            ........",
        );

        // Up-right run comes before the rightward run.
        let flips = board.flips_for_move(pos(2, 1), Player::Black);
        assert_eq!(flips, vec![pos(1, 2), pos(2, 2), pos(2, 3)]);

        // Both runs from here end on an empty square.
        assert!(board.flips_for_move(pos(0, 1), Player::Black).is_empty());

        // Upward run is walked outward from the placed stone.
        let flips = board.flips_for_move(pos(3, 2), Player::Black);
        assert_eq!(flips, vec![pos(2, 2), pos(1, 2)]);
    }

    #[test]
    fn legal_moves_match_flip_sets() {
        let board = Board::new();
        for player in [Player::Black, Player::White] {
            let legal = board.legal_moves(player);
            for pos in all_positions() {
                let flips = board.flips_for_move(pos, player);
                assert_eq!(legal.contains(pos), !flips.is_empty());
                if let Some(stored) = legal.flips(pos) {
                    assert_eq!(stored, flips.as_slice());
                }
            }
            assert_eq!(board.has_legal_move(player), !legal.is_empty());
        }
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            "B".parse::<Board>().unwrap_err(),
            GameError::InvalidPosition(_)
        ));
        let too_long = ".".repeat(NUM_SQUARES + 1);
        assert!(too_long.parse::<Board>().is_err());
        let bad = format!("{}Z", ".".repeat(NUM_SQUARES - 1));
        assert!(bad.parse::<Board>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let board = Board::new();
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }
}

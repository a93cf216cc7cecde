//! Controller for the recycling variant.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, BoardDelta, Coord, GameEvent, MoveRecord, RejectReason};
use crate::rules::{find_line, GameEngine, GameStatus};

use super::ledger::PieceLedger;

/// Board side length.
pub const BOARD_SIZE: usize = 4;

/// Pieces a player may keep on the board at once.
pub const PIECE_CAP: usize = 4;

/// Aligned marks required to win.
pub const WIN_LEN: usize = 3;

/// Player marks, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player.
    I,
    /// Second player.
    X,
    /// Third player.
    O,
}

impl Player {
    /// Roster size.
    pub const COUNT: usize = 3;

    /// Next player in the fixed cycle `I → X → O → I`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Player::I => Player::X,
            Player::X => Player::O,
            Player::O => Player::I,
        }
    }

    /// Roster index, for per-player storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::I => 0,
            Player::X => 1,
            Player::O => 2,
        }
    }

    /// All players, in turn order.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::I, Player::X, Player::O].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Player::I => "I",
            Player::X => "X",
            Player::O => "O",
        };
        write!(f, "{glyph}")
    }
}

/// The recycling three-in-a-row game.
///
/// 4×4 board, three players, at most [`PIECE_CAP`] pieces per player on
/// the board. A placement beyond the cap first recycles the player's
/// oldest surviving piece, so lines can fall apart as pieces age out.
/// Every move is a placement on an empty cell; the first aligned run of
/// 3 wins.
///
/// ```
/// use trigrid::{Coord, GameEngine, GameEvent};
/// use trigrid::games::recycling::{Player, RecyclingGame};
///
/// let mut game = RecyclingGame::new();
/// assert_eq!(game.to_move(), Player::I);
///
/// match game.apply_input(Coord::new(0, 0)) {
///     GameEvent::Applied(delta) => assert_eq!(delta.placed, Coord::new(0, 0)),
///     other => panic!("unexpected event: {other:?}"),
/// }
/// assert_eq!(game.to_move(), Player::X);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecyclingGame {
    board: Board<Player>,
    ledgers: [PieceLedger; Player::COUNT],
    to_move: Player,
    status: GameStatus<Player>,
    history: Vec<MoveRecord<Player>>,
}

impl RecyclingGame {
    /// Create a game with an empty board and `I` to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(BOARD_SIZE),
            ledgers: std::array::from_fn(|_| PieceLedger::new(PIECE_CAP)),
            to_move: Player::I,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board<Player> {
        &self.board
    }

    /// On-board pieces of `player`, oldest first.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        self.ledgers[player.index()].iter()
    }

    /// Applied moves since the last reset, in order.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord<Player>] {
        &self.history
    }
}

impl Default for RecyclingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine for RecyclingGame {
    type Mark = Player;

    #[instrument(skip(self), fields(player = %self.to_move))]
    fn apply_input(&mut self, target: Coord) -> GameEvent<Player> {
        if let GameStatus::Won { winner, line } = &self.status {
            // Terminal state is frozen; report it again.
            return GameEvent::Won {
                winner: *winner,
                line: line.clone(),
            };
        }
        if !self.board.is_empty_cell(target) {
            return GameEvent::Rejected(RejectReason::CellOccupied);
        }

        let player = self.to_move;

        // Evict first when the player is at the cap, so ledger and board
        // change in one step and stay in agreement.
        let evicted = self.ledgers[player.index()].record(target);
        if let Some(oldest) = evicted {
            self.board.clear_cell(oldest);
            debug!(%player, %oldest, "evicted oldest piece");
        }
        self.board.set(target, player);

        let delta = BoardDelta {
            placed: target,
            cleared: evicted,
        };
        self.history.push(MoveRecord { player, delta });

        if let Some(line) = find_line(&self.board, player, WIN_LEN) {
            debug!(%player, "winning line completed");
            self.status = GameStatus::Won {
                winner: player,
                line: line.clone(),
            };
            return GameEvent::Won {
                winner: player,
                line,
            };
        }

        self.to_move = player.next();
        GameEvent::Applied(delta)
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.board.clear();
        for ledger in &mut self.ledgers {
            ledger.clear();
        }
        self.to_move = Player::I;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    fn mark_at(&self, at: Coord) -> Option<Player> {
        self.board.mark_at(at)
    }

    fn board_size(&self) -> usize {
        self.board.size()
    }

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn status(&self) -> &GameStatus<Player> {
        &self.status
    }
}

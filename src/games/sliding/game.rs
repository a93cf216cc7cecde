//! Controller for the placement-then-movement variant.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, BoardDelta, Coord, GameEvent, MoveRecord, RejectReason};
use crate::rules::{find_line, GameEngine, GameStatus};

use super::phase::{Phase, MOVEMENT};

/// Board side length.
pub const BOARD_SIZE: usize = 3;

/// Pieces each player places before movement begins.
pub const PIECES_PER_PLAYER: u8 = 3;

/// Aligned marks required to win.
pub const WIN_LEN: usize = 3;

/// Player marks, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Player {
    /// Roster size.
    pub const COUNT: usize = 2;

    /// The other player.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Roster index, for per-player storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// All players, in turn order.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::X, Player::O].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Player::X => "X",
            Player::O => "O",
        };
        write!(f, "{glyph}")
    }
}

/// The placement-then-movement game.
///
/// 3×3 board, two players, three pieces each. Pieces are first dropped
/// on empty cells; once all six are down, a turn becomes a slide of an
/// owned piece to a king-adjacent empty cell, chosen in two inputs
/// (select a source, then pick a destination). The first aligned run of
/// 3 wins, in either regime.
///
/// The player who drops the final piece keeps the move and slides
/// first - preserved from the reference behavior (see DESIGN.md).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingGame {
    board: Board<Player>,
    phase: Phase,
    to_move: Player,
    status: GameStatus<Player>,
    history: Vec<MoveRecord<Player>>,
}

impl SlidingGame {
    /// Create a game in the placement phase with `X` to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(BOARD_SIZE),
            phase: Phase::start(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board<Player> {
        &self.board
    }

    /// Current rule regime and its regime-local state.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Pending slide source, if a piece is selected.
    #[must_use]
    pub fn selection(&self) -> Option<Coord> {
        self.phase.selection()
    }

    /// Pieces `player` has placed so far.
    #[must_use]
    pub fn placed_count(&self, player: Player) -> u8 {
        self.phase.placed_count(player)
    }

    /// Applied moves since the last reset, in order.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord<Player>] {
        &self.history
    }

    fn place(&mut self, target: Coord, mut placed: [u8; Player::COUNT]) -> GameEvent<Player> {
        if !self.board.is_empty_cell(target) {
            return GameEvent::Rejected(RejectReason::CellOccupied);
        }

        let player = self.to_move;
        if placed[player.index()] >= PIECES_PER_PLAYER {
            // Unreachable while the transition below is correct; kept as
            // a guard so a broken caller cannot overfill the board.
            return GameEvent::Rejected(RejectReason::MustMoveNotPlace);
        }

        self.board.set(target, player);
        placed[player.index()] += 1;
        self.phase = Phase::Placing { placed };

        let delta = BoardDelta::placement(target);
        self.history.push(MoveRecord { player, delta });

        if let Some(line) = find_line(&self.board, player, WIN_LEN) {
            debug!(%player, "winning line completed during placement");
            self.status = GameStatus::Won {
                winner: player,
                line: line.clone(),
            };
            return GameEvent::Won {
                winner: player,
                line,
            };
        }

        if placed.iter().all(|&count| count >= PIECES_PER_PLAYER) {
            // Every piece is down: movement begins. The player who
            // dropped the final piece keeps the move and slides first.
            self.phase = Phase::Moving { selection: None };
            debug!(%player, "placement complete, movement begins");
            return GameEvent::PhaseChanged(MOVEMENT);
        }

        self.to_move = player.opponent();
        GameEvent::Applied(delta)
    }

    fn slide(&mut self, target: Coord, selection: Option<Coord>) -> GameEvent<Player> {
        let player = self.to_move;

        let Some(source) = selection else {
            // No pending source: this input picks one.
            return match self.board.mark_at(target) {
                Some(mark) if mark == player => {
                    self.phase = Phase::Moving {
                        selection: Some(target),
                    };
                    GameEvent::Selected(target)
                }
                Some(_) => GameEvent::Rejected(RejectReason::NotYourPiece),
                None => GameEvent::Rejected(RejectReason::NothingSelected),
            };
        };

        match self.board.mark_at(target) {
            // Clicking the pending source again clears it.
            Some(_) if target == source => {
                self.phase = Phase::Moving { selection: None };
                GameEvent::Deselected
            }
            // Another own piece: the selection moves there.
            Some(mark) if mark == player => {
                self.phase = Phase::Moving {
                    selection: Some(target),
                };
                GameEvent::Selected(target)
            }
            Some(_) => GameEvent::Rejected(RejectReason::CellOccupied),
            None if !source.is_adjacent(target) => {
                GameEvent::Rejected(RejectReason::NotAdjacent)
            }
            None => {
                self.board.clear_cell(source);
                self.board.set(target, player);
                self.phase = Phase::Moving { selection: None };

                let delta = BoardDelta::relocation(target, source);
                self.history.push(MoveRecord { player, delta });

                if let Some(line) = find_line(&self.board, player, WIN_LEN) {
                    debug!(%player, "winning line completed by slide");
                    self.status = GameStatus::Won {
                        winner: player,
                        line: line.clone(),
                    };
                    return GameEvent::Won {
                        winner: player,
                        line,
                    };
                }

                self.to_move = player.opponent();
                GameEvent::Applied(delta)
            }
        }
    }
}

impl Default for SlidingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine for SlidingGame {
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

        match self.phase {
            Phase::Placing { placed } => self.place(target, placed),
            Phase::Moving { selection } => self.slide(target, selection),
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.board.clear();
        self.phase = Phase::start();
        self.to_move = Player::X;
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

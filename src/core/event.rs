//! The event surface returned to the rendering collaborator.
//!
//! Every call to an engine's `apply_input` answers with exactly one
//! [`GameEvent`]. Events are descriptive: the engine mutates its own
//! state and reports what happened; all presentation (status text, cell
//! highlighting) is the collaborator's business, driven off the event
//! and the board snapshot accessors.
//!
//! ## Rejections
//!
//! An illegal move is not a failure. It comes back as
//! `GameEvent::Rejected(reason)` with state untouched, and the player
//! simply tries again. The closed [`RejectReason`] set is the whole
//! error taxonomy of the crate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;

/// Ordered cells of a winning run.
///
/// Win length is 3 in both shipped variants; inline storage keeps the
/// per-move win scan allocation-free.
pub type LineCells = SmallVec<[Coord; 3]>;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Target cell already holds a piece.
    CellOccupied,
    /// Target piece belongs to another player, so it cannot be selected.
    NotYourPiece,
    /// Target is empty but not king-adjacent to the selected piece.
    NotAdjacent,
    /// Empty cell chosen while nothing is selected. Informational: the
    /// input simply did nothing.
    NothingSelected,
    /// Placement attempted by a player whose pieces are all on the board.
    MustMoveNotPlace,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            RejectReason::CellOccupied => "cell is already occupied",
            RejectReason::NotYourPiece => "piece belongs to another player",
            RejectReason::NotAdjacent => "target is not adjacent to the selected piece",
            RejectReason::NothingSelected => "no piece is selected",
            RejectReason::MustMoveNotPlace => "all pieces are placed; move one instead",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for RejectReason {}

/// Cells changed by an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardDelta {
    /// Cell the moving player's piece landed on.
    pub placed: Coord,
    /// Cell vacated in the same step: an evicted oldest piece, or the
    /// source of a slide. `None` for a plain placement.
    pub cleared: Option<Coord>,
}

impl BoardDelta {
    /// Delta for a plain placement on an empty cell.
    #[must_use]
    pub const fn placement(placed: Coord) -> Self {
        Self {
            placed,
            cleared: None,
        }
    }

    /// Delta for a move that also vacated a cell.
    #[must_use]
    pub const fn relocation(placed: Coord, cleared: Coord) -> Self {
        Self {
            placed,
            cleared: Some(cleared),
        }
    }
}

/// Opaque phase identifier.
///
/// The shared event type does not interpret phases. Variants with more
/// than one rule regime assign meaning to their own ids; single-regime
/// variants never emit one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseId(pub u32);

impl PhaseId {
    /// Create a phase ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// What one input did.
///
/// The type parameter `M` is the variant's player mark enum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent<M> {
    /// Move refused; state unchanged.
    Rejected(RejectReason),
    /// Piece placed or slid; the turn has advanced.
    Applied(BoardDelta),
    /// The piece at the coord is now the pending move source.
    Selected(Coord),
    /// The pending selection was cleared without moving.
    Deselected,
    /// The rule regime changed; the board snapshot has the new position.
    PhaseChanged(PhaseId),
    /// The game is over. Re-emitted, state unchanged, for any input that
    /// arrives after the win; only `reset` leaves this state.
    Won {
        /// Player who completed the line.
        winner: M,
        /// The completed run, in scan order.
        line: LineCells,
    },
}

impl<M> GameEvent<M> {
    /// Whether this event reports a refused move.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, GameEvent::Rejected(_))
    }
}

/// An applied move, for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord<M> {
    /// Player who moved.
    pub player: M,
    /// Cells changed by the move.
    pub delta: BoardDelta,
}

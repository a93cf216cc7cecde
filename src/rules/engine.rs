//! The contract game variants implement.
//!
//! A variant is a self-contained controller: it owns its board and
//! turn/phase state and exposes exactly one mutating entry point per
//! user input. The rendering collaborator drives it through this trait
//! and renders purely from the returned events and the snapshot
//! accessors.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, GameEvent, LineCells};

/// Status of a game.
///
/// Starts `InProgress`, transitions at most once to `Won`, and is then
/// immutable until reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus<M> {
    /// Moves are being accepted.
    InProgress,
    /// Terminal: `winner` completed `line`. Frozen until reset.
    Won {
        /// Player who completed the line.
        winner: M,
        /// The completed run, in scan order.
        line: LineCells,
    },
}

impl<M: Copy> GameStatus<M> {
    /// The winner, if the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<M> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            GameStatus::InProgress => None,
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won { .. })
    }
}

/// Rules contract shared by the variants.
///
/// `apply_input` handles one cell selection to completion before the
/// next is accepted; there is no suspension or background work. `reset`
/// is the only way to abort a game and is unconditionally accepted in
/// any state.
pub trait GameEngine {
    /// Player mark type of this variant.
    type Mark: Copy + Eq;

    /// Handle one cell selection and report what happened.
    ///
    /// The coordinate must be on the board; the collaborator only emits
    /// coordinates that exist on the rendered grid, so an out-of-range
    /// value is a caller bug and panics.
    fn apply_input(&mut self, target: Coord) -> GameEvent<Self::Mark>;

    /// Reinitialize every piece of owned state to its starting value.
    fn reset(&mut self);

    /// Snapshot accessor for full redraws (reset, win highlight).
    fn mark_at(&self, at: Coord) -> Option<Self::Mark>;

    /// Board side length.
    fn board_size(&self) -> usize;

    /// Player whose turn it is.
    fn to_move(&self) -> Self::Mark;

    /// Current status.
    fn status(&self) -> &GameStatus<Self::Mark>;
}

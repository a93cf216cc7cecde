//! Phase machine for the placement-then-movement variant.
//!
//! The variant has two rule regimes, and each carries its own data: the
//! placement phase counts the pieces each player has dropped, the
//! movement phase holds the pending slide source. The counters freeze
//! on transition by construction - the movement phase simply has none.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, PhaseId};

use super::game::{Player, PIECES_PER_PLAYER};

/// Regime id reported in `PhaseChanged` events while pieces are dropped.
pub const PLACEMENT: PhaseId = PhaseId::new(0);

/// Regime id reported in `PhaseChanged` events once pieces slide.
pub const MOVEMENT: PhaseId = PhaseId::new(1);

/// Current rule regime, with its regime-local state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Players drop new pieces on empty cells.
    Placing {
        /// Pieces placed so far, indexed by roster order.
        placed: [u8; Player::COUNT],
    },
    /// Players slide an owned piece to an adjacent empty cell.
    Moving {
        /// Pending slide source, if a piece is selected.
        selection: Option<Coord>,
    },
}

impl Phase {
    /// Starting regime: nothing placed yet.
    #[must_use]
    pub fn start() -> Self {
        Phase::Placing {
            placed: [0; Player::COUNT],
        }
    }

    /// Opaque id for the event boundary.
    #[must_use]
    pub fn id(&self) -> PhaseId {
        match self {
            Phase::Placing { .. } => PLACEMENT,
            Phase::Moving { .. } => MOVEMENT,
        }
    }

    /// Pieces `player` has placed. Once movement begins every roster is
    /// fully down, so the answer is the full allotment.
    #[must_use]
    pub fn placed_count(&self, player: Player) -> u8 {
        match self {
            Phase::Placing { placed } => placed[player.index()],
            Phase::Moving { .. } => PIECES_PER_PLAYER,
        }
    }

    /// Pending slide source, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Coord> {
        match self {
            Phase::Moving { selection } => *selection,
            Phase::Placing { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_phase() {
        let phase = Phase::start();

        assert_eq!(phase.id(), PLACEMENT);
        assert_eq!(phase.placed_count(Player::X), 0);
        assert_eq!(phase.placed_count(Player::O), 0);
        assert_eq!(phase.selection(), None);
    }

    #[test]
    fn test_moving_phase_counts_are_frozen_full() {
        let phase = Phase::Moving { selection: None };

        assert_eq!(phase.id(), MOVEMENT);
        assert_eq!(phase.placed_count(Player::X), PIECES_PER_PLAYER);
        assert_eq!(phase.placed_count(Player::O), PIECES_PER_PLAYER);
    }

    #[test]
    fn test_selection_only_exists_while_moving() {
        let placing = Phase::Placing { placed: [3, 2] };
        assert_eq!(placing.selection(), None);

        let moving = Phase::Moving {
            selection: Some(Coord::new(1, 1)),
        };
        assert_eq!(moving.selection(), Some(Coord::new(1, 1)));
    }
}

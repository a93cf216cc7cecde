//! Piece ledgers: per-player FIFO records of on-board pieces.
//!
//! The defining mechanic of the recycling variant. Each player keeps a
//! bounded number of pieces on the board; recording a placement while
//! full first yields the oldest record, and the game clears that cell
//! in the same logical step. A player's ledger therefore always mirrors
//! exactly the cells they occupy.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// Bounded FIFO of one player's on-board pieces, oldest first.
///
/// ```
/// use trigrid::games::recycling::PieceLedger;
/// use trigrid::Coord;
///
/// let mut ledger = PieceLedger::new(2);
/// assert_eq!(ledger.record(Coord::new(0, 0)), None);
/// assert_eq!(ledger.record(Coord::new(0, 1)), None);
///
/// // Full: the oldest piece comes back out to be cleared.
/// assert_eq!(ledger.record(Coord::new(1, 1)), Some(Coord::new(0, 0)));
/// assert_eq!(ledger.oldest(), Some(Coord::new(0, 1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceLedger {
    pieces: VecDeque<Coord>,
    capacity: usize,
}

impl PieceLedger {
    /// Create an empty ledger holding at most `capacity` pieces.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Ledger capacity must be positive");

        Self {
            pieces: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a newly placed piece.
    ///
    /// If the ledger is full, the oldest record is removed and returned
    /// first; the caller clears that cell from the board before the new
    /// piece is considered placed.
    pub fn record(&mut self, at: Coord) -> Option<Coord> {
        let evicted = if self.pieces.len() >= self.capacity {
            self.pieces.pop_front()
        } else {
            None
        };
        self.pieces.push_back(at);
        evicted
    }

    /// Number of pieces currently recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether no pieces are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Whether the next `record` will evict.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pieces.len() >= self.capacity
    }

    /// Maximum pieces this ledger holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest recorded piece, the next eviction candidate.
    #[must_use]
    pub fn oldest(&self) -> Option<Coord> {
        self.pieces.front().copied()
    }

    /// Iterate over recorded pieces, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.pieces.iter().copied()
    }

    /// Forget all pieces.
    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}

//! Cell references on a square grid.
//!
//! A `Coord` names one cell by zero-based `(row, col)`. The collaborator
//! driving an engine only ever produces coordinates that exist on the
//! rendered grid, so boards assert bounds rather than reporting range
//! errors (see `core::board`).

use serde::{Deserialize, Serialize};

/// Zero-based cell reference.
///
/// ```
/// use trigrid::core::Coord;
///
/// let corner = Coord::new(0, 0);
/// let center = Coord::new(1, 1);
///
/// assert!(corner.is_adjacent(center));
/// assert!(!corner.is_adjacent(Coord::new(2, 2)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Create a cell reference.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance to another cell: `max(|Δrow|, |Δcol|)`.
    #[must_use]
    pub fn chebyshev(self, other: Coord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// King-move adjacency: the cells differ by at most 1 on each axis
    /// and are not identical.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.chebyshev(other) == 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_distance() {
        let origin = Coord::new(0, 0);

        assert_eq!(origin.chebyshev(origin), 0);
        assert_eq!(origin.chebyshev(Coord::new(0, 1)), 1);
        assert_eq!(origin.chebyshev(Coord::new(1, 1)), 1);
        assert_eq!(origin.chebyshev(Coord::new(2, 1)), 2);
        assert_eq!(Coord::new(3, 0).chebyshev(Coord::new(0, 2)), 3);
    }

    #[test]
    fn test_king_move_adjacency() {
        let center = Coord::new(1, 1);

        // All 8 neighbors of (1, 1) are adjacent.
        for row in 0..=2 {
            for col in 0..=2 {
                let other = Coord::new(row, col);
                if other == center {
                    assert!(!center.is_adjacent(other), "cell is not its own neighbor");
                } else {
                    assert!(center.is_adjacent(other), "{other} should be adjacent");
                }
            }
        }

        assert!(!center.is_adjacent(Coord::new(3, 1)));
        assert!(!center.is_adjacent(Coord::new(1, 3)));
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(2, 2)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(2, 3)), "(2, 3)");
    }

    #[test]
    fn test_serialization() {
        let at = Coord::new(1, 2);
        let json = serde_json::to_string(&at).unwrap();
        let deserialized: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(at, deserialized);
    }
}

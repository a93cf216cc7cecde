//! Placement-then-movement: a 3×3 board, two players, three pieces
//! each.
//!
//! The game opens like tic-tac-toe with a piece budget - six drops and
//! the board is set - then turns into a sliding game: pick one of your
//! pieces, slide it to a touching empty cell, and try to line up three
//! before your opponent does.

mod game;
mod phase;

pub use game::{Player, SlidingGame, BOARD_SIZE, PIECES_PER_PLAYER, WIN_LEN};
pub use phase::{Phase, MOVEMENT, PLACEMENT};

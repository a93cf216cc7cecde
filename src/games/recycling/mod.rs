//! Recycling three-in-a-row: a 4×4 board, three players, and a piece
//! cap that forces each player's oldest piece off the board.
//!
//! Every turn is a placement, but board pressure is bounded: a player's
//! 5th piece recycles their oldest surviving one. A promising line can
//! fall apart simply because its owner kept playing elsewhere.

mod game;
mod ledger;

pub use game::{Player, RecyclingGame, BOARD_SIZE, PIECE_CAP, WIN_LEN};
pub use ledger::PieceLedger;

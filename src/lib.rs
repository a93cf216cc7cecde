//! # trigrid
//!
//! A rules engine for two fixed variants of the positional
//! three-in-a-row family, driven by an external rendering/I-O
//! collaborator.
//!
//! ## Design Principles
//!
//! 1. **No presentation**: engines answer every input with a
//!    descriptive [`GameEvent`]; status text, highlighting, and input
//!    wiring belong to the caller.
//!
//! 2. **Rejections are values**: an illegal move comes back as
//!    `Rejected(reason)` with state untouched. There is no fatal path
//!    in the core; the only terminal state is a win, and `reset` clears
//!    even that.
//!
//! 3. **Owned state, no singletons**: a game is a plain struct. Any
//!    number of instances coexist and tests stay isolated.
//!
//! ## Variants
//!
//! - [`games::recycling`]: 4×4 board, three players, at most 4 pieces
//!   each on the board - the 5th placement recycles the player's oldest
//!   surviving piece.
//! - [`games::sliding`]: 3×3 board, two players, three pieces each -
//!   a placement phase, then king-move sliding.
//!
//! ## Example
//!
//! ```
//! use trigrid::{Coord, GameEngine, GameEvent, RecyclingGame};
//!
//! let mut game = RecyclingGame::new();
//! match game.apply_input(Coord::new(0, 0)) {
//!     GameEvent::Applied(delta) => assert_eq!(delta.placed, Coord::new(0, 0)),
//!     other => panic!("unexpected event: {other:?}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: cell references, boards, the event surface
//! - `rules`: the `GameEngine` contract and win detection
//! - `games`: the two variant controllers

pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, BoardDelta, Coord, GameEvent, LineCells, MoveRecord, PhaseId, RejectReason};

pub use crate::games::recycling::RecyclingGame;
pub use crate::games::sliding::SlidingGame;

pub use crate::rules::{find_line, GameEngine, GameStatus};

//! Rules shared by the variants: the engine contract and win detection.
//!
//! Variants implement [`GameEngine`] to expose one mutating entry point
//! to the collaborator; [`win::find_line`] answers the win question
//! after every placement or slide.

pub mod engine;
pub mod win;

pub use engine::{GameEngine, GameStatus};
pub use win::find_line;

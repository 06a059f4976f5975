//! Per-table game state
//!
//! Each table owns one of every item here. Nothing is shared between tables.
//!
//! - [`TurnState`] / [`TablePhase`] - Whose turn it is and the table lifecycle
//! - [`Selection`] - Idle, or the selected piece with its offered moves
//! - [`AvailableMoves`] - Move cache rebuilt after every commit
//! - [`MoveHistory`] - Committed moves
//! - [`CapturedPieces`] - Material tracking

pub mod available_moves;
pub mod captured;
pub mod history;
pub mod selection;
pub mod turn;

pub use available_moves::*;
pub use captured::*;
pub use history::*;
pub use selection::*;
pub use turn::*;

//! Chess rules module - Pure game logic with no presentation coupling
//!
//! Implements board occupancy, move generation and king safety as plain data
//! and pure functions, so every rule can be unit tested without a world, a
//! player or a table.
//!
//! # Module Structure
//!
//! - `board_state` - Arena-with-index board, the single owner of piece positions
//! - `piece_moves` - Movement pattern table and the generic ray/step walker
//! - `check` - King safety (safe, check, checkmate, trapped)
//! - `opening` - Starting layouts

pub mod board_state;
pub mod check;
pub mod opening;
pub mod piece_moves;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use board_state::Board;
pub use check::{evaluate_king, king_state, threatened_squares, KingReport};
pub use opening::Opening;
pub use piece_moves::{moves_for, moves_with, MoveRules};

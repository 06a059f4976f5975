//! Tile-board chess rules engine
//!
//! Pure rules live in [`rules`]; everything that needs a player, a table or a
//! world to talk to is layered on top of them.
//!
//! # Module Organization
//!
//! - `types` - Coordinates, sides, piece kinds and identifier newtypes
//! - `components` - Plain data: pieces, move candidates, king state, move records
//! - `rules` - Board model, move generator, check evaluator, openings
//! - `resources` - Per-table state: turn, selection, move cache, history, captures
//! - `table` - One game instance and its turn controller
//! - `registry` - Every table in the process, matchmaking and routing
//! - `presentation` - Traits the engine calls out through, plus a recording stub
//! - `events` - Interaction targets and outbound events
//! - `error` - Faults and rejection reasons

pub mod components;
pub mod error;
pub mod events;
pub mod presentation;
pub mod registry;
pub mod resources;
pub mod rules;
pub mod table;
pub mod types;

pub use error::{GameError, GameResult, Rejection};
pub use events::{GameEvent, Target};
pub use presentation::{PlayerDirectory, Presentation, Recorder};
pub use registry::{GameRegistry, Joined};
pub use table::{Seat, Table};

//! Core module - process-level infrastructure
//!
//! - [`settings`] - [`TableSettings`] and JSON persistence
//! - [`logging`] - `tracing` subscriber setup
//! - [`error`] - [`CoreError`] and [`CoreResult`]

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings::{settings_path, SettingsSource, TableSettings};

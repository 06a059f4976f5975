//! Rules engine for tile-board chess tables
//!
//! - [`game`] - Board model, move generation, king safety, tables and the registry
//! - [`core`] - Settings, logging and process-level errors
//! - [`cli`] - Script-driven host used by the `tilechess` binary

pub mod cli;
pub mod core;
pub mod game;

//! Table settings and their persistence
//!
//! [`TableSettings`] is stored as pretty JSON. Every field has a default, so a
//! partial file is valid and a missing one means "all defaults".
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory, e.g.
//! `~/.config/tilechess/settings.json`. Falls back to the working directory if
//! the platform directory cannot be resolved.

use crate::core::error::{CoreError, CoreResult};
use crate::game::rules::{MoveRules, Opening};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SETTINGS_FILENAME: &str = "settings.json";

/// Settings applied to every table a registry creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    pub opening: Opening,
    /// Unmoved pawns may advance two squares
    pub pawn_double_step: bool,
    /// Emit a king status report after every turn
    pub announce_king_status: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            opening: Opening::Standard,
            pawn_double_step: false,
            announce_king_status: true,
            log_filter: "info".to_string(),
        }
    }
}

impl TableSettings {
    pub fn move_rules(&self) -> MoveRules {
        MoveRules {
            pawn_double_step: self.pawn_double_step,
        }
    }

    /// Read settings from `path`
    pub fn load(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Read settings from `path` (or the default location), falling back to
    /// defaults on any failure, and say where they came from
    ///
    /// Nothing is logged here, so the binary can resolve settings before its
    /// subscriber exists and report the source afterwards.
    pub fn resolve(path: Option<&Path>) -> (Self, SettingsSource) {
        let path = path.map(Path::to_path_buf).unwrap_or_else(settings_path);

        if !path.exists() {
            return (Self::default(), SettingsSource::Missing(path));
        }

        match Self::load(&path) {
            Ok(settings) => (settings, SettingsSource::File(path)),
            Err(error) => (Self::default(), SettingsSource::Invalid { path, error }),
        }
    }

    /// [`TableSettings::resolve`], logging the source right away
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let (settings, source) = Self::resolve(path);
        source.log();
        settings
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CoreError::io(parent, e))?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| CoreError::io(path, e))?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }
}

/// Where a resolved [`TableSettings`] came from
#[derive(Debug)]
pub enum SettingsSource {
    File(PathBuf),
    /// No file at this path; defaults apply
    Missing(PathBuf),
    /// The file exists but could not be read or parsed; defaults apply
    Invalid { path: PathBuf, error: CoreError },
}

impl SettingsSource {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, SettingsSource::File(_))
    }

    pub fn log(&self) {
        match self {
            SettingsSource::File(path) => info!("[SETTINGS] Loaded settings from {:?}", path),
            SettingsSource::Missing(path) => {
                info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path)
            }
            SettingsSource::Invalid { path, error } => {
                warn!("[SETTINGS] {:?}: {}. Using defaults.", path, error)
            }
        }
    }
}

/// Default settings file location
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "tilechess", "tilechess") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

//! Calculator preferences.
//!
//! Only window and font settings live here; the calculation itself is
//! never saved between runs.

use serde::{Deserialize, Serialize};
use slowcore::storage::{self, StorageError};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub font_size_display: f32,
    pub font_size_buttons: f32,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            window_width: 400.0,
            window_height: 500.0,
            font_size_display: 50.0,
            font_size_buttons: 25.0,
            log_filter: slowcore::logging::DEFAULT_FILTER.to_string(),
        }
    }
}

impl CalcConfig {
    pub fn default_path() -> PathBuf {
        storage::config_dir("slowcalc").join(CONFIG_FILE)
    }

    /// Read preferences from `path` without touching the filesystem otherwise.
    pub fn load(path: &Path) -> storage::Result<Self> {
        storage::load_json::<Self>(path).map(Self::sanitized)
    }

    /// Settle the outcome of [`load`](Self::load).
    ///
    /// A missing file is created with the defaults so there is something to
    /// edit. An unreadable one is left alone and the defaults are used.
    pub fn or_init(loaded: storage::Result<Self>, path: &Path) -> Self {
        match loaded {
            Ok(config) => config,
            Err(StorageError::NotFound(_)) => {
                let config = Self::default();
                match storage::save_json(&config, path) {
                    Ok(()) => tracing::info!(path = %path.display(), "wrote default config"),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "could not write default config")
                    }
                }
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Replace sizes egui cannot work with by their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: &mut f32, fallback: f32| {
            if !value.is_finite() || *value <= 0.0 {
                *value = fallback;
            }
        };
        fix(&mut self.window_width, defaults.window_width);
        fix(&mut self.window_height, defaults.window_height);
        fix(&mut self.font_size_display, defaults.font_size_display);
        fix(&mut self.font_size_buttons, defaults.font_size_buttons);
        self
    }
}

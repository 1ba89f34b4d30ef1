//! Persisted theme preference.
//!
//! Stored as `{"theme":"dark"}` or `{"theme":"light"}`. Read once when the
//! store is opened, written on every toggle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed preferences in {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    theme: String,
}

/// File-backed theme preference
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
    theme: Theme,
}

impl ThemeStore {
    /// Open the store. A missing file means `Light`; an unrecognised value
    /// is logged and treated as `Light`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let theme = match fs::read_to_string(&path) {
            Ok(raw) => {
                let stored: StoredPreferences =
                    serde_json::from_str(&raw).map_err(|source| PreferenceError::Decode {
                        path: path.display().to_string(),
                        source,
                    })?;
                match stored.theme.as_str() {
                    "dark" => Theme::Dark,
                    "light" => Theme::Light,
                    other => {
                        warn!("Unknown theme '{}' in {:?}, using light", other, path);
                        Theme::Light
                    }
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Theme::default(),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        debug!("Theme preference: {}", theme);
        Ok(Self { path, theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flip the theme and persist it. On a failed write the stored theme
    /// is left unchanged.
    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.theme.toggled();
        self.save(next)?;
        self.theme = next;
        Ok(next)
    }

    fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
        let io_err = |source: io::Error| PreferenceError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let stored = StoredPreferences {
            theme: theme.as_str().to_string(),
        };
        let body = serde_json::to_string(&stored)?;
        fs::write(&self.path, body).map_err(io_err)
    }
}

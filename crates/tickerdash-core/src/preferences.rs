//! Persistent key-value preferences backed by a small JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{StoreError, ThemePreference};

/// Key under which the theme flag is stored.
pub const THEME_KEY: &str = "theme";

const ENV_COLOR_SCHEME: &str = "TICKERDASH_COLOR_SCHEME";
const ENV_COLORFGBG: &str = "COLORFGBG";

/// JSON object of string keys to string values, persisted on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                path: path.display().to_string(),
                source,
            })?,
            Err(error) if error.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.values.insert(key.into(), value.into());
        self.flush()
    }

    fn flush(&self) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = serde_json::to_string_pretty(&self.values).map_err(|source| StoreError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_error)?;
        debug!(path = %self.path.display(), "preferences written");
        Ok(())
    }

    /// Saved theme, or `system` when nothing valid is stored.
    pub fn theme_or(&self, system: ThemePreference) -> ThemePreference {
        self.get(THEME_KEY)
            .and_then(|raw| ThemePreference::parse(raw).ok())
            .unwrap_or(system)
    }

    pub fn save_theme(&mut self, theme: ThemePreference) -> Result<(), StoreError> {
        self.set(THEME_KEY, theme.as_str())
    }
}

/// Operating-environment colour-scheme preference.
///
/// `TICKERDASH_COLOR_SCHEME` (`light`/`dark`) wins; otherwise the terminal's
/// `COLORFGBG` background index is used (0-6 and 8 are dark backgrounds);
/// otherwise light.
pub fn detect_system_theme() -> ThemePreference {
    detect_system_theme_from(|key| std::env::var(key).ok())
}

pub fn detect_system_theme_from<F>(lookup: F) -> ThemePreference
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(theme) =
        lookup(ENV_COLOR_SCHEME).and_then(|raw| ThemePreference::parse(&raw).ok())
    {
        return theme;
    }

    let background = lookup(ENV_COLORFGBG).and_then(|raw| {
        raw.rsplit(';')
            .next()
            .and_then(|bg| bg.trim().parse::<u8>().ok())
    });

    match background {
        Some(0..=6 | 8) => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}

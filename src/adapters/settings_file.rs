//! Settings file discovery and loading.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::domain::settings::Settings;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "angle-prompts.toml";

/// Load settings from `explicit`, or from [`DEFAULT_SETTINGS_FILE`] under `dir`.
///
/// A missing default file yields default settings; a missing explicit file is an error.
pub fn load_settings(explicit: Option<&Path>, dir: &Path) -> Result<Settings, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = dir.join(DEFAULT_SETTINGS_FILE);
            if !path.is_file() {
                return Ok(Settings::default());
            }
            path
        }
    };

    log::debug!("loading settings from {}", path.display());
    let content = fs::read_to_string(&path)?;
    Settings::parse_toml(&content)
}

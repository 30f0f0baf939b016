//! Locating, reading and writing card documents on disk.
//!
//! Documents are read as JSON5, which also accepts plain JSON, and written
//! back as pretty-printed JSON.
//!
//! # File Locations
//!
//! [`find_config_file`] tries, in order:
//!
//! 1. `./cardex.json5`, `./cardex.json`
//! 2. `<config dir>/cardex/card.json5`, `<config dir>/cardex/card.json`,
//!    where `<config dir>` is `~/.config` on Linux

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// File names looked up in the working directory.
const LOCAL_FILE_NAMES: &[&str] = &["cardex.json5", "cardex.json"];

/// Sub-directory of the platform config directory.
const USER_CONFIG_DIR: &str = "cardex";

/// File names looked up in the user config directory.
const USER_FILE_NAMES: &[&str] = &["card.json5", "card.json"];

/// Lists the places a card document may live, most specific first.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use cardex_config::persistence::candidate_paths;
///
/// let paths = candidate_paths(Path::new("work"), Some(Path::new("/home/ana/.config")));
/// assert_eq!(paths[0], PathBuf::from("work/cardex.json5"));
/// assert_eq!(paths[3], PathBuf::from("/home/ana/.config/cardex/card.json"));
///
/// assert_eq!(candidate_paths(Path::new("."), None).len(), 2);
/// ```
#[must_use]
pub fn candidate_paths(local_dir: &Path, user_config_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_config_dir
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).collect()
}

/// Finds the card document to load by default.
///
/// Returns the first of [`candidate_paths`] that exists, relative to the
/// working directory and the platform config directory.
///
/// # Examples
///
/// ```no_run
/// use cardex_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found card at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir();
    let found = candidate_paths(Path::new("."), user_dir.as_deref())
        .into_iter()
        .find(|path| path.is_file());

    match &found {
        Some(path) => debug!(path = %path.display(), "found card configuration"),
        None => debug!("no card configuration file found"),
    }
    found
}

/// Reads a card document into an untyped, order-preserving value.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON5.
///
/// # Examples
///
/// ```no_run
/// use cardex_config::persistence::read_document;
///
/// # fn main() -> cardex_config::Result<()> {
/// let document = read_document("cardex.json5")?;
/// assert!(document.get("groups").is_some());
/// # Ok(())
/// # }
/// ```
pub fn read_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json5::from_str(&content)?)
}

/// Writes `document` to `path` as pretty-printed JSON, creating missing
/// parent directories.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized or the file
/// cannot be written.
pub fn write_document<T: Serialize>(path: impl AsRef<Path>, document: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut content = serde_json::to_string_pretty(document).map_err(ConfigError::SerializeJson)?;
    content.push('\n');

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, content).map_err(write_error)
}

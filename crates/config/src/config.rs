//! Card document struct and loading logic.
//!
//! This module provides the main [`Config`] struct: one card document, made
//! of an optional name, the spacing settings, and the groups of the card.

use std::path::Path;

use cardex_protocol::{CardConfiguration, dummy::sample_card};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_document, write_document};
use crate::spacing::Spacing;
use crate::validator::validate_document;

/// A card document.
///
/// # Examples
///
/// ```
/// use cardex_config::{Config, Spacing};
///
/// // An empty card
/// let config = Config::default();
/// assert!(!config.has_groups());
///
/// // The built-in sample card
/// let config = Config::sample();
/// assert_eq!(config.groups.len(), 3);
/// assert_eq!(config.spacing, Spacing::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Display name of the card configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Spacing settings.
    #[serde(default)]
    pub spacing: Spacing,

    /// Groups of the card, in display order.
    pub groups: CardConfiguration,
}

impl Config {
    /// Creates a configuration around an existing set of groups.
    #[must_use]
    pub fn new(groups: CardConfiguration) -> Self {
        Self {
            name: None,
            spacing: Spacing::default(),
            groups,
        }
    }

    /// Returns the built-in sample card with default spacing.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: Some("Sample".to_string()),
            ..Self::new(sample_card())
        }
    }

    /// Loads the card document from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./cardex.json5` or `./cardex.json`
    /// 2. User: `~/.config/cardex/card.json5` or `~/.config/cardex/card.json`
    ///
    /// If no configuration file is found, returns [`Config::sample`].
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cardex_config::Config;
    ///
    /// # fn example() -> cardex_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Loaded {} groups", config.groups.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no card configuration found, using the sample card");
                Ok(Self::sample())
            }
        }
    }

    /// Loads the card document from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cardex_config::Config;
    ///
    /// # fn example() -> cardex_config::Result<()> {
    /// let config = Config::load_from("cards/default.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading card configuration");
        let document = read_document(path)?;
        Self::from_document(document)
    }

    /// Parses a card document from JSON5 (or JSON) text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardex_config::Config;
    ///
    /// let config = Config::from_json5_str(r#"
    ///     {
    ///         // one group, one row
    ///         groups: { header: { rows: { title: { columns: { subject: {} } } } } },
    ///     }
    /// "#).unwrap();
    /// assert_eq!(config.groups["header"].rows.len(), 1);
    ///
    /// assert!(Config::from_json5_str("{ groups: { header: {} } }").is_err());
    /// ```
    pub fn from_json5_str(text: &str) -> Result<Self> {
        let document: Value = serde_json5::from_str(text)?;
        Self::from_document(document)
    }

    /// Builds a configuration from a parsed document.
    ///
    /// The document's shape is checked first, then it is mapped onto the
    /// typed model, then the values are validated.
    ///
    /// # Errors
    ///
    /// Returns a shape error, a deserialization error, or a validation error.
    pub fn from_document(document: Value) -> Result<Self> {
        validate_document(&document)?;
        let config: Config = serde_json::from_value(document).map_err(ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_document(path, self)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the spacing settings are out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardex_config::{Config, Spacing};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.spacing = Spacing::new(-2, 4);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.spacing.validate()
    }

    /// Returns whether the card has any groups.
    #[must_use]
    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Returns the display name, falling back to `"Untitled"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled")
    }
}

//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during card
//! configuration loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[source] serde_json::Error),

    /// A shape-checked document still failed to map onto the typed model,
    /// for instance a string where a number was expected.
    #[error("invalid value in config: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// A level of the card document is not a mapping.
    #[error("badly formed card configuration at {location}: expected a mapping")]
    MalformedConfiguration {
        /// Where in the document the problem was found (e.g. `groups.header.rows`).
        location: String,
    },

    /// A mapping contains a key that is not allowed at its level.
    #[error("unknown key '{key}' at {location}")]
    UnknownKey {
        /// Where in the document the key was found.
        location: String,
        /// The offending key.
        key: String,
    },

    /// A mapping lacks keys that are required at its level.
    #[error("required keys not present at {location}: {}", keys.join(", "))]
    MissingKeys {
        /// Where in the document the keys are missing.
        location: String,
        /// The missing keys.
        keys: Vec<String>,
    },

    /// Invalid spacing settings.
    #[error("invalid spacing: {reason}")]
    InvalidSpacing {
        /// The reason the spacing is invalid.
        reason: String,
    },
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::MissingKeys {
            location: "groups.header".to_string(),
            keys: vec!["rows".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "required keys not present at groups.header: rows"
        );

        let err = ConfigError::UnknownKey {
            location: "groups.header.rows.title".to_string(),
            key: "colour".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown key 'colour' at groups.header.rows.title"
        );
    }
}

//! Configuration management for the cardex application.
//!
//! This crate loads card documents, checks their shape, and persists them.
//!
//! # Overview
//!
//! - [`config`]: The card document struct and loading logic
//! - [`validator`]: Allowed and required keys per nesting level
//! - [`spacing`]: Text and group padding settings
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Document Format
//!
//! Card documents are JSON5 (or plain JSON). Groups, rows and columns are
//! mappings whose key order is the display order:
//!
//! ```json5
//! {
//!   name: "Default",
//!   spacing: { text_padding: 1, group_padding: 2 },
//!   groups: {
//!     header: {
//!       has_border: true,
//!       rows: {
//!         title: { priority: 1, columns: { subject: { font_style: "bold", minimum_lines: 2 } } },
//!       },
//!     },
//!   },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use cardex_config::Config;
//!
//! # fn example() -> cardex_config::Result<()> {
//! let config = Config::load()?;
//! for (name, group) in &config.groups {
//!     println!("{name}: {} rows", group.rows.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod spacing;
pub mod validator;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use spacing::Spacing;

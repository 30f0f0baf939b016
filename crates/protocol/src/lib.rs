//! Shared protocol types for the cardex application.
//!
//! This crate defines the types used across all cardex components: the
//! declarative card configuration, the work items shown on cards, and the
//! preview application's messages.
//!
//! # Overview
//!
//! - [`card`]: Card configuration (groups, rows, columns)
//! - [`work_item`]: Work items and their field values
//! - [`message`]: Preview application messages
//! - [`dummy`]: Sample configuration and work items
//!
//! # Examples
//!
//! ```
//! use cardex_protocol::{CardConfiguration, Column, Group, Row, WorkItem};
//!
//! let mut card = CardConfiguration::new();
//! let mut group = Group::default();
//! group.rows.insert(
//!     "title".to_string(),
//!     Row::with_columns([("subject", Column::default())]),
//! );
//! card.insert("header".to_string(), group);
//!
//! let item = WorkItem::new("Replace flaky login test");
//! assert!(item.has_value("subject"));
//! assert_eq!(card["header"].rows.len(), 1);
//! ```

pub mod card;
pub mod dummy;
pub mod message;
pub mod work_item;

// Re-export primary types at crate root for convenience
pub use card::{
    CardConfiguration, Column, DEFAULT_FONT_SIZE, DEFAULT_MINIMUM_LINES, DEFAULT_PRIORITY,
    FontStyle, Group, Row, TextAlign,
};
pub use message::Message;
pub use work_item::{FieldValue, SUBJECT_FIELD, WorkItem, WorkItemId};

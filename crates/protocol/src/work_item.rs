//! Work items displayed on cards.
//!
//! A work item is a bag of named field values. Card columns refer to fields
//! by name; the layout engine only asks whether a field has a value, while
//! the painter decides how to show it.

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a work item.
pub type WorkItemId = uuid::Uuid;

/// Name of the field holding a work item's title.
pub const SUBJECT_FIELD: &str = "subject";

/// The value of a single work-item field.
///
/// # Examples
///
/// ```
/// use cardex_protocol::FieldValue;
///
/// assert!(FieldValue::from("  ").is_empty());
/// assert!(!FieldValue::from("Ready").is_empty());
/// assert_eq!(FieldValue::from(vec!["a".to_string(), "b".to_string()]).to_string(), "a, b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An integer such as an estimate or an identifier.
    Number(i64),
    /// A calendar date, serialized as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Free text.
    Text(String),
    /// A list of entries such as watchers or tags.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns `true` for blank text and empty lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::List(entries) => entries.is_empty(),
            Self::Number(_) | Self::Date(_) => false,
        }
    }

    /// Number of entries for list values.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::List(entries) => Some(entries.len()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Text(text) => f.write_str(text),
            Self::List(entries) => f.write_str(&entries.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// A work item whose fields are shown on a card.
///
/// # Examples
///
/// ```
/// use cardex_protocol::WorkItem;
///
/// let item = WorkItem::new("Fix login redirect")
///     .with_field("status", "In progress")
///     .with_field("estimate", 3_i64);
///
/// assert_eq!(item.subject(), Some("Fix login redirect"));
/// assert!(item.has_value("status"));
/// assert!(!item.has_value("assignee"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier for this work item.
    pub id: WorkItemId,
    /// Field values keyed by field name, in insertion order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldValue>,
}

impl WorkItem {
    /// Creates a work item with a fresh id and the given subject.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self::with_id(WorkItemId::new_v4(), subject)
    }

    /// Creates a work item with a specific id.
    ///
    /// Useful for tests and for items recreated from storage.
    #[must_use]
    pub fn with_id(id: WorkItemId, subject: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(SUBJECT_FIELD.to_string(), FieldValue::Text(subject.into()));
        Self { id, fields }
    }

    /// Adds or replaces a field value.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Adds or replaces a field value in place.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns `true` if the field is present and not empty.
    #[must_use]
    pub fn has_value(&self, name: &str) -> bool {
        self.field(name).is_some_and(|value| !value.is_empty())
    }

    /// Returns the subject text, if the item has one.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match self.field(SUBJECT_FIELD) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }
}

//! Shape validation for card documents.
//!
//! Card documents are checked level by level before they are mapped onto
//! the typed model, so that errors name the offending key and its location
//! instead of surfacing as a generic deserialization failure.
//!
//! | Level | Allowed keys | Required keys |
//! |-------|--------------|---------------|
//! | group | `rows`, `has_border`, `height` | `rows` |
//! | row | `columns`, `height`, `priority` | `columns` |
//! | column | see [`COLUMN_KEYS`] | none |

use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};

/// Keys allowed at the top level of a card document.
pub const DOCUMENT_KEYS: &[&str] = &["name", "spacing", "groups"];

/// Keys required at the top level of a card document.
pub const REQUIRED_DOCUMENT_KEYS: &[&str] = &["groups"];

/// Keys allowed on a group.
pub const GROUP_KEYS: &[&str] = &["rows", "has_border", "height"];

/// Keys required on a group.
pub const REQUIRED_GROUP_KEYS: &[&str] = &["rows"];

/// Keys allowed on a row.
pub const ROW_KEYS: &[&str] = &["columns", "height", "priority"];

/// Keys required on a row.
pub const REQUIRED_ROW_KEYS: &[&str] = &["columns"];

/// Keys allowed on a column.
pub const COLUMN_KEYS: &[&str] = &[
    "has_label",
    "min_font_size",
    "max_font_size",
    "font_size",
    "font_style",
    "text_align",
    "minimum_lines",
    "render_if_empty",
    "width",
    "indented",
    "custom_label",
    "has_count",
];

/// Keys required on a column.
pub const REQUIRED_COLUMN_KEYS: &[&str] = &[];

/// Validates the shape of a whole card document.
///
/// # Errors
///
/// Returns the first shape error found, see [`validate_groups`].
///
/// # Examples
///
/// ```
/// use cardex_config::validator::validate_document;
///
/// let document = serde_json::json!({ "name": "Default", "groups": {} });
/// assert!(validate_document(&document).is_ok());
///
/// let document = serde_json::json!({ "name": "Default" });
/// assert!(validate_document(&document).is_err());
/// ```
pub fn validate_document(document: &Value) -> Result<()> {
    let document = assert_keys(document, "document", DOCUMENT_KEYS, REQUIRED_DOCUMENT_KEYS)?;
    validate_groups(&document["groups"], "groups")
}

/// Validates the shape of a card's `groups` mapping.
///
/// `location` is the path of the mapping inside the enclosing document and
/// prefixes every reported location.
///
/// # Errors
///
/// - [`ConfigError::MalformedConfiguration`] if any level is not a mapping
/// - [`ConfigError::UnknownKey`] for keys not allowed at their level
/// - [`ConfigError::MissingKeys`] for required keys that are absent
///
/// # Examples
///
/// ```
/// use cardex_config::validator::validate_groups;
///
/// let groups = serde_json::json!({
///     "header": { "rows": { "title": { "columns": { "subject": { "font_size": 12 } } } } }
/// });
/// assert!(validate_groups(&groups, "groups").is_ok());
///
/// let groups = serde_json::json!({ "header": { "rows": { "title": { "priority": 1 } } } });
/// assert!(validate_groups(&groups, "groups").is_err());
/// ```
pub fn validate_groups(groups: &Value, location: &str) -> Result<()> {
    for (group_key, group) in as_mapping(groups, location)? {
        let group_location = format!("{location}.{group_key}");
        let group = assert_keys(group, &group_location, GROUP_KEYS, REQUIRED_GROUP_KEYS)?;

        let rows_location = format!("{group_location}.rows");
        for (row_key, row) in as_mapping(&group["rows"], &rows_location)? {
            let row_location = format!("{rows_location}.{row_key}");
            let row = assert_keys(row, &row_location, ROW_KEYS, REQUIRED_ROW_KEYS)?;

            let columns_location = format!("{row_location}.columns");
            for (column_key, column) in as_mapping(&row["columns"], &columns_location)? {
                let column_location = format!("{columns_location}.{column_key}");
                assert_keys(column, &column_location, COLUMN_KEYS, REQUIRED_COLUMN_KEYS)?;
            }
        }
    }

    Ok(())
}

fn as_mapping<'v>(value: &'v Value, location: &str) -> Result<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ConfigError::MalformedConfiguration {
            location: location.to_string(),
        })
}

fn assert_keys<'v>(
    value: &'v Value,
    location: &str,
    allowed: &[&str],
    required: &[&str],
) -> Result<&'v Map<String, Value>> {
    let mapping = as_mapping(value, location)?;

    if let Some(key) = mapping.keys().find(|key| !allowed.contains(&key.as_str())) {
        return Err(ConfigError::UnknownKey {
            location: location.to_string(),
            key: key.clone(),
        });
    }

    let missing: Vec<String> = required
        .iter()
        .filter(|key| !mapping.contains_key(**key))
        .map(|key| (*key).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::MissingKeys {
            location: location.to_string(),
            keys: missing,
        });
    }

    Ok(mapping)
}

//! Card configuration types.
//!
//! A card is described declaratively as an ordered mapping of groups, each
//! holding an ordered mapping of rows, each holding an ordered mapping of
//! columns. Ordering is the insertion order of the source document and is
//! preserved end to end.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Priority assigned to rows that don't declare one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Font size used when a column declares neither `min_font_size` nor `font_size`.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Number of text lines a column reserves when `minimum_lines` is absent.
pub const DEFAULT_MINIMUM_LINES: u32 = 1;

/// The full layout description of a card, keyed by group name.
///
/// # Examples
///
/// ```
/// use cardex_protocol::CardConfiguration;
///
/// let card: CardConfiguration = serde_json::from_str(
///     r#"{ "header": { "rows": { "title": { "columns": { "subject": {} } } } } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(card.len(), 1);
/// assert_eq!(card["header"].rows["title"].priority, 10);
/// ```
pub type CardConfiguration = IndexMap<String, Group>;

/// A vertical section of a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Group {
    /// Rows of this group, in display order.
    pub rows: IndexMap<String, Row>,

    /// Whether the group's bounds are stroked when the card is drawn.
    #[serde(default)]
    pub has_border: bool,

    /// Declared group height.
    ///
    /// Accepted for compatibility with existing card documents. Heights are
    /// allocated across the whole card, so layout does not consult it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

impl Group {
    /// Returns `true` if the group has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A horizontal band within a group.
///
/// # Examples
///
/// ```
/// use cardex_protocol::{Row, DEFAULT_PRIORITY};
///
/// let row: Row = serde_json::from_str(r#"{ "columns": {} }"#).unwrap();
/// assert_eq!(row.priority, DEFAULT_PRIORITY);
/// assert!(row.height.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Row {
    /// Fixed height. Overrides the font-derived minimum height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,

    /// Redistribution priority. Rows with lower values give up surplus first.
    #[serde(default = "default_priority")]
    pub priority: i32,

    /// Columns of this row, keyed by the work-item field they display.
    pub columns: IndexMap<String, Column>,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl Default for Row {
    fn default() -> Self {
        Self {
            height: None,
            priority: DEFAULT_PRIORITY,
            columns: IndexMap::new(),
        }
    }
}

impl Row {
    /// Creates a row with the given columns and default priority.
    #[must_use]
    pub fn with_columns<K: Into<String>>(columns: impl IntoIterator<Item = (K, Column)>) -> Self {
        Self {
            columns: columns.into_iter().map(|(k, c)| (k.into(), c)).collect(),
            ..Self::default()
        }
    }

    /// Sets the row priority.
    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets a fixed row height.
    #[must_use]
    pub fn fixed_height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }
}

/// Font style applied to a column's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Returns `true` for bold and bold-italic.
    #[must_use]
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Returns `true` for italic and bold-italic.
    #[must_use]
    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

/// Horizontal alignment of a column's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A leaf cell displaying one work-item field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Column {
    /// Whether the field label is drawn before the value.
    #[serde(default)]
    pub has_label: bool,

    /// Smallest font size the value may shrink to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_font_size: Option<f32>,

    /// Largest font size the value may grow to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_font_size: Option<f32>,

    /// Preferred font size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    #[serde(default)]
    pub font_style: FontStyle,

    #[serde(default)]
    pub text_align: TextAlign,

    /// Number of text lines the column must be able to show.
    #[serde(default = "default_minimum_lines")]
    pub minimum_lines: u32,

    /// Keep the column even when its field is missing or empty.
    #[serde(default)]
    pub render_if_empty: bool,

    /// Explicit column width in card units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,

    /// Indent the text by one extra text padding.
    #[serde(default)]
    pub indented: bool,

    /// Label drawn instead of the humanized field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,

    /// Append the number of entries of a list value to the label.
    #[serde(default)]
    pub has_count: bool,
}

fn default_minimum_lines() -> u32 {
    DEFAULT_MINIMUM_LINES
}

impl Default for Column {
    fn default() -> Self {
        Self {
            has_label: false,
            min_font_size: None,
            max_font_size: None,
            font_size: None,
            font_style: FontStyle::Normal,
            text_align: TextAlign::Left,
            minimum_lines: DEFAULT_MINIMUM_LINES,
            render_if_empty: false,
            width: None,
            indented: false,
            custom_label: None,
            has_count: false,
        }
    }
}

impl Column {
    /// Font size used to compute the column's minimum height.
    ///
    /// Resolution order is `min_font_size`, then `font_size`, then
    /// [`DEFAULT_FONT_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cardex_protocol::Column;
    ///
    /// let column = Column { font_size: Some(12.0), ..Column::default() };
    /// assert_eq!(column.sizing_font_size(), 12.0);
    ///
    /// let column = Column { min_font_size: Some(8.0), font_size: Some(12.0), ..Column::default() };
    /// assert_eq!(column.sizing_font_size(), 8.0);
    ///
    /// assert_eq!(Column::default().sizing_font_size(), 10.0);
    /// ```
    #[must_use]
    pub fn sizing_font_size(&self) -> f32 {
        self.min_font_size
            .or(self.font_size)
            .unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Font size the value is drawn with.
    ///
    /// Prefers `font_size`, clamped into `min_font_size..=max_font_size`
    /// when those bounds are set.
    #[must_use]
    pub fn display_font_size(&self) -> f32 {
        let mut size = self.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        if let Some(max) = self.max_font_size {
            size = size.min(max);
        }
        if let Some(min) = self.min_font_size {
            size = size.max(min);
        }
        size
    }
}

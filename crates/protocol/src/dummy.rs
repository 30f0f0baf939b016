//! Sample data for demonstration and testing.
//!
//! This module provides a ready-made card configuration and a handful of
//! realistic work items, used by the preview binary when no configuration
//! file is found.
//!
//! # Examples
//!
//! ```
//! use cardex_protocol::dummy::{sample_card, sample_work_items};
//!
//! let card = sample_card();
//! assert_eq!(card.len(), 3);
//! assert_eq!(sample_work_items().len(), 4);
//! ```

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::card::{CardConfiguration, Column, FontStyle, Group, Row, TextAlign};
use crate::work_item::WorkItem;

/// A builder for card groups.
///
/// Internal helper to keep the sample configuration readable.
struct GroupBuilder {
    rows: IndexMap<String, Row>,
    has_border: bool,
}

impl GroupBuilder {
    fn new() -> Self {
        Self {
            rows: IndexMap::new(),
            has_border: false,
        }
    }

    fn bordered(mut self) -> Self {
        self.has_border = true;
        self
    }

    fn row(mut self, key: &str, row: Row) -> Self {
        self.rows.insert(key.to_string(), row);
        self
    }

    fn build(self) -> Group {
        Group {
            rows: self.rows,
            has_border: self.has_border,
            height: None,
        }
    }
}

fn labelled() -> Column {
    Column {
        has_label: true,
        ..Column::default()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Returns the sample card configuration.
///
/// The card has three groups:
///
/// - **header** (bordered): the subject in bold over two lines, then type and status
/// - **details** (bordered): people, a three-line description, and dates
/// - **footer**: the work item id, right aligned
///
/// Row priorities are chosen so that the description keeps its space
/// longest when the card is short.
#[must_use]
pub fn sample_card() -> CardConfiguration {
    let header = GroupBuilder::new()
        .bordered()
        .row(
            "title",
            Row::with_columns([(
                "subject",
                Column {
                    font_style: FontStyle::Bold,
                    minimum_lines: 2,
                    ..Column::default()
                },
            )])
            .priority(30),
        )
        .row(
            "meta",
            Row::with_columns([
                ("type", labelled()),
                (
                    "status",
                    Column {
                        text_align: TextAlign::Right,
                        ..labelled()
                    },
                ),
            ]),
        )
        .build();

    let details = GroupBuilder::new()
        .bordered()
        .row(
            "people",
            Row::with_columns([
                (
                    "assignee",
                    Column {
                        render_if_empty: true,
                        ..labelled()
                    },
                ),
                (
                    "watchers",
                    Column {
                        has_count: true,
                        ..labelled()
                    },
                ),
            ])
            .priority(20),
        )
        .row(
            "description",
            Row::with_columns([(
                "description",
                Column {
                    minimum_lines: 3,
                    indented: true,
                    ..Column::default()
                },
            )])
            .priority(5),
        )
        .row(
            "dates",
            Row::with_columns([
                ("start_date", labelled()),
                (
                    "due_date",
                    Column {
                        text_align: TextAlign::Right,
                        ..labelled()
                    },
                ),
            ])
            .priority(15),
        )
        .build();

    let footer = GroupBuilder::new()
        .row(
            "reference",
            Row::with_columns([(
                "reference",
                Column {
                    font_size: Some(8.0),
                    text_align: TextAlign::Right,
                    font_style: FontStyle::Italic,
                    ..Column::default()
                },
            )])
            .fixed_height(1),
        )
        .build();

    let mut card = CardConfiguration::new();
    card.insert("header".to_string(), header);
    card.insert("details".to_string(), details);
    card.insert("footer".to_string(), footer);
    card
}

/// Returns sample work items with a mix of filled and empty fields.
#[must_use]
pub fn sample_work_items() -> Vec<WorkItem> {
    vec![
        WorkItem::new("Export cards as PDF")
            .with_field("reference", "#1042")
            .with_field("type", "Feature")
            .with_field("status", "In progress")
            .with_field("assignee", "Mira Okafor")
            .with_field(
                "watchers",
                vec!["jules".to_string(), "tamsin".to_string(), "li".to_string()],
            )
            .with_field(
                "description",
                "Allow exporting the current query as printable cards, one work item per card.",
            )
            .with_field("start_date", date(2024, 4, 2))
            .with_field("due_date", date(2024, 5, 17)),
        WorkItem::new("Card layout clips long subjects")
            .with_field("reference", "#1057")
            .with_field("type", "Bug")
            .with_field("status", "New")
            .with_field("assignee", "")
            .with_field("description", "Subjects longer than two lines are cut off without an ellipsis."),
        WorkItem::new("Rename default card configuration")
            .with_field("reference", "#1060")
            .with_field("type", "Task")
            .with_field("status", "Closed")
            .with_field("watchers", Vec::<String>::new())
            .with_field("due_date", date(2024, 6, 1)),
        WorkItem::new("Priority-aware row heights")
            .with_field("reference", "#1071")
            .with_field("type", "Feature")
            .with_field("status", "In review")
            .with_field("assignee", "Noor Haddad")
            .with_field("watchers", vec!["mira".to_string()])
            .with_field(
                "description",
                "Rows under their minimum borrow space from lower priority rows first.",
            )
            .with_field("estimate", 5_i64),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_card_group_order() {
        let card = sample_card();
        let groups: Vec<&str> = card.keys().map(String::as_str).collect();
        assert_eq!(groups, ["header", "details", "footer"]);
    }

    #[test]
    fn sample_card_serializes() {
        let card = sample_card();
        let json = serde_json::to_string(&card).expect("serialize");
        let parsed: CardConfiguration = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(card, parsed);
    }

    #[test]
    fn sample_items_have_subjects() {
        for item in sample_work_items() {
            assert!(item.subject().is_some());
        }
    }
}

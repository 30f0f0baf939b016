//! Card painter.
//!
//! Draws a laid-out card onto any [`RenderSurface`]. Each group strokes its
//! border (when it has one) before its text is drawn, and the card's own
//! outline is stroked last.

use cardex_layout::{CardLayout, ColumnGeometry, RenderSurface, TextStyle};
use cardex_protocol::{Column, FieldValue, WorkItem};

/// Draws `layout` for `item` onto `surface`.
///
/// # Examples
///
/// ```
/// use cardex_layout::{CardLayoutEngine, Orientation};
/// use cardex_protocol::dummy::{sample_card, sample_work_items};
/// use cardex_tui::surface::{BufferSurface, TerminalMetrics};
/// use cardex_tui::widgets::draw_card;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let config = sample_card();
/// let item = &sample_work_items()[0];
/// let orientation = Orientation::new(60, 24).with_padding(1, 2);
/// let layout = CardLayoutEngine::new(TerminalMetrics).layout(&config, &orientation, item);
///
/// let mut buf = Buffer::empty(Rect::new(0, 0, 60, 24));
/// draw_card(&mut BufferSurface::new(&mut buf, &orientation), &layout, item);
/// ```
pub fn draw_card<S: RenderSurface>(surface: &mut S, layout: &CardLayout<'_>, item: &WorkItem) {
    let text_padding = layout.orientation.text_padding;

    surface.draw_bounding_box(layout.orientation.card_bounds(), |surface| {
        for group in &layout.groups {
            if group.group.has_border {
                surface.draw_bounding_box(group.bounds, |surface| surface.stroke_bounds());
            }
            for row in &group.rows {
                for column in &row.columns {
                    draw_column(surface, column, item, text_padding);
                }
            }
        }
        surface.stroke_bounds();
    });
}

fn draw_column<S: RenderSurface>(
    surface: &mut S,
    geometry: &ColumnGeometry<'_>,
    item: &WorkItem,
    text_padding: i32,
) {
    let column = geometry.column;
    let bounds = if column.indented {
        geometry.text_bounds.indent(text_padding)
    } else {
        geometry.text_bounds
    };
    let style = TextStyle {
        font_size: column.display_font_size(),
        font_style: column.font_style,
        align: column.text_align,
    };

    surface.draw_text(bounds, &column_text(geometry.key, column, item), &style);
}

/// Text shown by a column: the field value, prefixed by its label when the
/// column has one.
///
/// # Examples
///
/// ```
/// use cardex_protocol::{Column, WorkItem};
/// use cardex_tui::widgets::column_text;
///
/// let item = WorkItem::new("Fix login")
///     .with_field("due_date", "2024-05-01")
///     .with_field("watchers", vec!["ana".to_string(), "bo".to_string()]);
///
/// let labelled = Column { has_label: true, ..Column::default() };
/// assert_eq!(column_text("due_date", &labelled, &item), "Due date: 2024-05-01");
///
/// let counted = Column { has_label: true, has_count: true, ..Column::default() };
/// assert_eq!(column_text("watchers", &counted, &item), "Watchers (2): ana, bo");
///
/// assert_eq!(column_text("subject", &Column::default(), &item), "Fix login");
/// ```
#[must_use]
pub fn column_text(key: &str, column: &Column, item: &WorkItem) -> String {
    let value = item.field(key);
    let text = value.map(ToString::to_string).unwrap_or_default();

    if column.has_label {
        format!("{}: {text}", column_label(key, column, value))
    } else {
        text
    }
}

/// Label of a column, with the entry count appended when requested.
#[must_use]
pub fn column_label(key: &str, column: &Column, value: Option<&FieldValue>) -> String {
    let label = column
        .custom_label
        .clone()
        .unwrap_or_else(|| humanize(key));

    match value.and_then(FieldValue::count) {
        Some(count) if column.has_count => format!("{label} ({count})"),
        _ => label,
    }
}

/// Turns a field key into a label: underscores become spaces and the first
/// letter is capitalized.
///
/// # Examples
///
/// ```
/// use cardex_tui::widgets::humanize;
///
/// assert_eq!(humanize("start_date"), "Start date");
/// assert_eq!(humanize("assignee"), "Assignee");
/// assert_eq!(humanize(""), "");
/// ```
#[must_use]
pub fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

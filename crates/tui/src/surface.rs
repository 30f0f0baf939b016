//! A rendering surface backed by a ratatui [`Buffer`].
//!
//! One card unit is one terminal cell. Card geometry has `y` growing upward
//! from the card's bottom edge, so a box whose top edge is at `y` starts on
//! screen row `card_top + (card_height - y)`.

use cardex_layout::{Bounds, FontMetrics, Orientation, RenderSurface, TextStyle};
use cardex_protocol::{DEFAULT_FONT_SIZE, TextAlign};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// Font sizes covered by one terminal row.
pub const POINTS_PER_ROW: f32 = 10.0;

/// Line heights for a terminal grid.
///
/// A line takes one row per started [`POINTS_PER_ROW`] of font size, and
/// never less than one row.
///
/// # Examples
///
/// ```
/// use cardex_layout::FontMetrics;
/// use cardex_tui::surface::TerminalMetrics;
///
/// assert_eq!(TerminalMetrics.font_height_at(8.0), 1.0);
/// assert_eq!(TerminalMetrics.font_height_at(10.0), 1.0);
/// assert_eq!(TerminalMetrics.font_height_at(14.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalMetrics;

impl FontMetrics for TerminalMetrics {
    fn font_height_at(&self, font_size: f32) -> f32 {
        (font_size / POINTS_PER_ROW).ceil().max(1.0)
    }
}

/// Draws cards into a [`Buffer`].
#[derive(Debug)]
pub struct BufferSurface<'b> {
    buf: &'b mut Buffer,
    origin_x: i32,
    origin_y: i32,
    card_height: i32,
    clips: Vec<Rect>,
}

impl<'b> BufferSurface<'b> {
    /// Creates a surface for a card placed at the orientation's offsets.
    #[must_use]
    pub fn new(buf: &'b mut Buffer, orientation: &Orientation) -> Self {
        Self {
            buf,
            origin_x: orientation.x_offset,
            origin_y: orientation.y_offset,
            card_height: orientation.height,
            clips: Vec::new(),
        }
    }

    /// Converts card bounds to a screen rectangle clipped to the buffer.
    #[must_use]
    pub fn to_rect(&self, bounds: Bounds) -> Rect {
        let left = self.origin_x + bounds.x;
        let top = self.origin_y + (self.card_height - bounds.y);
        let right = left + bounds.width.max(0);
        let bottom = top + bounds.height.max(0);

        let left = to_cell(left);
        let top = to_cell(top);
        let rect = Rect::new(
            left,
            top,
            to_cell(right).saturating_sub(left),
            to_cell(bottom).saturating_sub(top),
        );
        rect.intersection(self.buf.area)
    }

    fn clip(&self) -> Rect {
        self.clips.last().copied().unwrap_or(self.buf.area)
    }
}

impl FontMetrics for BufferSurface<'_> {
    fn font_height_at(&self, font_size: f32) -> f32 {
        TerminalMetrics.font_height_at(font_size)
    }
}

impl RenderSurface for BufferSurface<'_> {
    fn draw_bounding_box<F>(&mut self, bounds: Bounds, body: F)
    where
        F: FnOnce(&mut Self),
    {
        let rect = self.to_rect(bounds).intersection(self.clip());
        self.clips.push(rect);
        body(self);
        self.clips.pop();
    }

    fn stroke_bounds(&mut self) {
        let rect = self.clip();
        if !rect.is_empty() {
            Block::bordered().render(rect, self.buf);
        }
    }

    fn draw_text(&mut self, bounds: Bounds, text: &str, style: &TextStyle) {
        let rect = self.to_rect(bounds).intersection(self.clip());
        if rect.is_empty() || text.is_empty() {
            return;
        }

        Paragraph::new(text)
            .style(text_style(style))
            .alignment(alignment(style.align))
            .wrap(Wrap { trim: true })
            .render(rect, self.buf);
    }
}

fn to_cell(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

fn alignment(align: TextAlign) -> Alignment {
    match align {
        TextAlign::Left => Alignment::Left,
        TextAlign::Center => Alignment::Center,
        TextAlign::Right => Alignment::Right,
    }
}

fn text_style(style: &TextStyle) -> Style {
    let mut modifiers = Modifier::empty();
    if style.font_style.is_bold() {
        modifiers |= Modifier::BOLD;
    }
    if style.font_style.is_italic() {
        modifiers |= Modifier::ITALIC;
    }
    if style.font_size < DEFAULT_FONT_SIZE {
        modifiers |= Modifier::DIM;
    }
    Style::default().add_modifier(modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use cardex_protocol::FontStyle;

    fn plain(align: TextAlign) -> TextStyle {
        TextStyle {
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::Normal,
            align,
        }
    }

    #[test]
    fn terminal_metrics_round_up() {
        assert_eq!(TerminalMetrics.font_height_at(0.0), 1.0);
        assert_eq!(TerminalMetrics.font_height_at(10.5), 2.0);
        assert_eq!(TerminalMetrics.font_height_at(30.0), 3.0);
    }

    #[test]
    fn converts_page_coordinates_to_rows() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        let orientation = Orientation::new(16, 8).at(2, 1);
        let surface = BufferSurface::new(&mut buf, &orientation);

        assert_eq!(surface.to_rect(Bounds::new(0, 8, 16, 8)), Rect::new(2, 1, 16, 8));
        assert_eq!(surface.to_rect(Bounds::new(3, 5, 4, 2)), Rect::new(5, 4, 4, 2));
    }

    #[test]
    fn clips_to_the_buffer() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 4));
        let orientation = Orientation::new(10, 4);
        let surface = BufferSurface::new(&mut buf, &orientation);

        assert_eq!(surface.to_rect(Bounds::new(-3, 6, 20, 20)), Rect::new(0, 0, 10, 4));
        assert!(surface.to_rect(Bounds::new(0, 2, 5, -1)).is_empty());
    }

    #[test]
    fn strokes_the_current_box() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 3));
        let orientation = Orientation::new(6, 3);
        let mut surface = BufferSurface::new(&mut buf, &orientation);

        surface.draw_bounding_box(orientation.card_bounds(), |surface| surface.stroke_bounds());

        assert_eq!(buffer_to_string(&buf), "┌────┐\n│    │\n└────┘\n");
    }

    #[test]
    fn text_is_clipped_to_the_enclosing_box() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 2));
        let orientation = Orientation::new(12, 2);
        let mut surface = BufferSurface::new(&mut buf, &orientation);

        surface.draw_bounding_box(Bounds::new(0, 2, 4, 1), |surface| {
            surface.draw_text(Bounds::new(0, 2, 12, 1), "overflowing", &plain(TextAlign::Left));
        });

        assert_eq!(buffer_to_string(&buf), "over\n\n");
    }

    #[test]
    fn text_alignment() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 2));
        let orientation = Orientation::new(8, 2);
        let mut surface = BufferSurface::new(&mut buf, &orientation);

        surface.draw_text(Bounds::new(0, 2, 8, 1), "ab", &plain(TextAlign::Right));
        surface.draw_text(Bounds::new(0, 1, 8, 1), "ab", &plain(TextAlign::Center));

        assert_eq!(buffer_to_string(&buf), "      ab\n   ab\n");
    }

    #[test]
    fn bold_text_is_styled() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let orientation = Orientation::new(4, 1);
        let mut surface = BufferSurface::new(&mut buf, &orientation);
        let style = TextStyle {
            font_style: FontStyle::Bold,
            ..plain(TextAlign::Left)
        };

        surface.draw_text(Bounds::new(0, 1, 4, 1), "Bug", &style);

        let cell = buf.cell((0, 0)).unwrap();
        assert!(cell.modifier.contains(Modifier::BOLD));
    }
}

//! The rendering surface contract.
//!
//! Layout needs exactly one thing from the outside world: how tall a line of
//! text is at a given font size. Drawing needs a little more: confining
//! output to a box, stroking that box, and placing text. Both are injected
//! as traits so the layout core stays free of I/O and can be tested with
//! fixed metrics.

use cardex_protocol::{FontStyle, TextAlign};

use crate::geometry::Bounds;

/// Font metric lookup.
pub trait FontMetrics {
    /// Height of one line of text at `font_size`, in card units.
    fn font_height_at(&self, font_size: f32) -> f32;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn font_height_at(&self, font_size: f32) -> f32 {
        (**self).font_height_at(font_size)
    }
}

/// Line height proportional to the font size.
///
/// # Examples
///
/// ```
/// use cardex_layout::{FontMetrics, ProportionalMetrics};
///
/// let metrics = ProportionalMetrics::new(1.5);
/// assert_eq!(metrics.font_height_at(10.0), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalMetrics {
    line_height: f32,
}

impl ProportionalMetrics {
    /// Creates metrics where a line is `line_height` times the font size.
    #[must_use]
    pub const fn new(line_height: f32) -> Self {
        Self { line_height }
    }
}

impl Default for ProportionalMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl FontMetrics for ProportionalMetrics {
    fn font_height_at(&self, font_size: f32) -> f32 {
        font_size * self.line_height
    }
}

/// How a piece of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_style: FontStyle,
    pub align: TextAlign,
}

/// Something cards can be drawn onto.
pub trait RenderSurface: FontMetrics {
    /// Runs `body` with drawing confined to `bounds`.
    ///
    /// Boxes nest; [`stroke_bounds`](Self::stroke_bounds) strokes the
    /// innermost one.
    fn draw_bounding_box<F>(&mut self, bounds: Bounds, body: F)
    where
        F: FnOnce(&mut Self),
        Self: Sized;

    /// Strokes the outline of the current bounding box.
    fn stroke_bounds(&mut self);

    /// Draws text inside `bounds`, wrapping onto as many lines as fit.
    fn draw_text(&mut self, bounds: Bounds, text: &str, style: &TextStyle);
}

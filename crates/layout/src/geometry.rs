//! Rectangles and the card orientation.
//!
//! All geometry uses page coordinates: `x` grows to the right and `y` grows
//! upward from the bottom edge of the card. A box is described by its
//! top-left corner, so `y` is the box's TOP edge and the box extends
//! `height` units downward from it.

use serde::{Deserialize, Serialize};

/// An axis-aligned box in card units.
///
/// # Examples
///
/// ```
/// use cardex_layout::Bounds;
///
/// let bounds = Bounds::new(0, 100, 40, 30);
/// assert_eq!(bounds.bottom(), 70);
/// assert_eq!(bounds.right(), 40);
///
/// let inner = bounds.inset(2);
/// assert_eq!(inner, Bounds::new(2, 98, 36, 26));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub x: i32,
    /// Top edge, measured upward from the card's bottom edge.
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y - self.height
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Shrinks the box by `amount` on every side.
    ///
    /// Width and height never drop below zero.
    #[must_use]
    pub fn inset(&self, amount: i32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y - amount,
            width: (self.width - 2 * amount).max(0),
            height: (self.height - 2 * amount).max(0),
        }
    }

    /// Shrinks the box by `amount` on the left side only.
    #[must_use]
    pub fn indent(&self, amount: i32) -> Self {
        Self {
            x: self.x + amount,
            width: (self.width - amount).max(0),
            ..*self
        }
    }

    /// Returns `true` if the box has no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// The rectangle a card is laid out in, plus its spacing constants.
///
/// # Examples
///
/// ```
/// use cardex_layout::Orientation;
///
/// let orientation = Orientation::new(200, 300).with_padding(2, 10);
///
/// // Three groups leave room for four paddings.
/// assert_eq!(orientation.available_height(3), 260);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    /// Horizontal position of the card on its page.
    pub x_offset: i32,
    /// Vertical position of the card's top edge on its page.
    pub y_offset: i32,
    pub width: i32,
    pub height: i32,
    /// Inset between a column's bounds and its text.
    pub text_padding: i32,
    /// Gap above, between, and below groups.
    pub group_padding: i32,
}

impl Orientation {
    /// Creates an orientation at the origin with no padding.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            x_offset: 0,
            y_offset: 0,
            width,
            height,
            text_padding: 0,
            group_padding: 0,
        }
    }

    /// Places the card on its page.
    #[must_use]
    pub const fn at(mut self, x_offset: i32, y_offset: i32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Sets the text and group padding.
    #[must_use]
    pub const fn with_padding(mut self, text_padding: i32, group_padding: i32) -> Self {
        self.text_padding = text_padding;
        self.group_padding = group_padding;
        self
    }

    /// Height left for rows once `group_count + 1` group paddings are taken.
    ///
    /// May be zero or negative when the card is too small.
    #[must_use]
    pub const fn available_height(&self, group_count: usize) -> i32 {
        self.height - self.group_padding * (group_count as i32 + 1)
    }

    /// The card's own bounds in card coordinates.
    #[must_use]
    pub const fn card_bounds(&self) -> Bounds {
        Bounds::new(0, self.height, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_never_goes_negative() {
        let bounds = Bounds::new(5, 5, 3, 1).inset(2);
        assert_eq!(bounds, Bounds::new(7, 3, 0, 0));
        assert!(bounds.is_empty());
    }

    #[test]
    fn indent_keeps_vertical_extent() {
        let bounds = Bounds::new(0, 10, 8, 4).indent(3);
        assert_eq!(bounds, Bounds::new(3, 10, 5, 4));
    }

    #[test]
    fn available_height_can_go_negative() {
        let orientation = Orientation::new(10, 10).with_padding(0, 4);
        assert_eq!(orientation.available_height(2), -2);
        assert_eq!(orientation.available_height(0), 6);
    }

    #[test]
    fn card_bounds_cover_the_card() {
        let orientation = Orientation::new(80, 40).at(3, 7);
        assert_eq!(orientation.card_bounds(), Bounds::new(0, 40, 80, 40));
    }
}

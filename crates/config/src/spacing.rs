//! Card spacing settings.
//!
//! This module provides the [`Spacing`] type which holds the two layout
//! constants a card needs besides its target rectangle:
//!
//! - `text_padding`: inset between a column's bounds and its text
//! - `group_padding`: gap above, between, and below groups
//!
//! Both are expressed in card units, the same units as the card rectangle.

use serde::{Deserialize, Serialize};

/// Default inset between a column's bounds and its text.
pub const DEFAULT_TEXT_PADDING: i32 = 1;

/// Default gap between groups.
pub const DEFAULT_GROUP_PADDING: i32 = 2;

/// Largest accepted padding value.
pub const MAX_PADDING: i32 = 64;

/// Spacing settings for card layout.
///
/// # Examples
///
/// ```
/// use cardex_config::Spacing;
///
/// let spacing = Spacing::default();
/// assert_eq!(spacing.text_padding, 1);
/// assert_eq!(spacing.group_padding, 2);
///
/// let spacing = Spacing::new(0, 10);
/// assert!(spacing.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spacing {
    /// Inset between a column's bounds and its text, on every side.
    #[serde(default = "default_text_padding")]
    pub text_padding: i32,

    /// Gap above the first group, between groups, and below the last group.
    #[serde(default = "default_group_padding")]
    pub group_padding: i32,
}

fn default_text_padding() -> i32 {
    DEFAULT_TEXT_PADDING
}

fn default_group_padding() -> i32 {
    DEFAULT_GROUP_PADDING
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            text_padding: DEFAULT_TEXT_PADDING,
            group_padding: DEFAULT_GROUP_PADDING,
        }
    }
}

impl Spacing {
    /// Creates spacing settings with the given paddings.
    #[must_use]
    pub const fn new(text_padding: i32, group_padding: i32) -> Self {
        Self {
            text_padding,
            group_padding,
        }
    }

    /// Validates the spacing settings.
    ///
    /// # Errors
    ///
    /// Returns an error if either padding is negative or exceeds
    /// [`MAX_PADDING`].
    pub fn validate(&self) -> crate::Result<()> {
        check_padding("text_padding", self.text_padding)?;
        check_padding("group_padding", self.group_padding)
    }
}

fn check_padding(name: &str, value: i32) -> crate::Result<()> {
    if value < 0 {
        return Err(crate::ConfigError::InvalidSpacing {
            reason: format!("{name} {value} is negative"),
        });
    }

    if value > MAX_PADDING {
        return Err(crate::ConfigError::InvalidSpacing {
            reason: format!("{name} {value} exceeds maximum of {MAX_PADDING}"),
        });
    }

    Ok(())
}

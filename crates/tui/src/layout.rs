//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for the preview screen: a one-line
//! header, the card, and a one-line status bar.

/// Height of the header bar in rows.
///
/// The header displays the application title and the card's name.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in rows.
///
/// The status bar displays the item position and the fit check result.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum terminal height for useful rendering.
///
/// Header and status bar plus a card of at least eight rows.
pub const MIN_HEIGHT: u16 = HEADER_HEIGHT + STATUS_BAR_HEIGHT + 8;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 30;

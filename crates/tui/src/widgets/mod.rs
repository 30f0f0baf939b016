//! Widget components for the cardex TUI.
//!
//! Each widget is a plain function that renders into a buffer or a
//! [`RenderSurface`](cardex_layout::RenderSurface), which keeps them easy to
//! test in isolation.
//!
//! # Modules
//!
//! - [`card`]: Draws a laid-out card and formats column text
//! - [`status_bar`]: Renders the footer with the fit check and key hints

pub mod card;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use card::{column_label, column_text, draw_card, humanize};
pub use status_bar::{FitStatus, render_status_bar};

//! Terminal UI for cardex.
//!
//! This crate previews laid-out cards in the terminal. It renders each work
//! item through the same layout engine used for exports, with one card unit
//! mapped to one terminal cell.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`surface`]: A [`RenderSurface`](cardex_layout::RenderSurface) over a ratatui buffer
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Card painter and status bar
//!
//! # Example
//!
//! ```no_run
//! use cardex_config::Config;
//! use cardex_protocol::dummy::sample_work_items;
//! use cardex_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Config::load()?, sample_work_items());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod surface;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use surface::{BufferSurface, TerminalMetrics};

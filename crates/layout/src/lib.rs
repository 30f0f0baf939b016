//! Card layout engine for cardex.
//!
//! Turns a declarative [`CardConfiguration`](cardex_protocol::CardConfiguration)
//! and a work item into concrete geometry for one card.
//!
//! # Overview
//!
//! - [`min_height`]: minimum row heights from font metrics
//! - [`allocator`]: card-wide row height allocation by priority
//! - [`prune`]: dropping empty columns, rows and groups
//! - [`group`]: row and column boxes inside a group
//! - [`engine`]: the full layout pass and fit checks
//! - [`surface`]: font metrics and the drawing contract
//!
//! # Examples
//!
//! ```
//! use cardex_layout::{CardLayoutEngine, Orientation, ProportionalMetrics};
//! use cardex_protocol::{CardConfiguration, Column, Group, Row, WorkItem};
//!
//! let mut group = Group::default();
//! group.rows.insert("title".into(), Row::with_columns([("subject", Column::default())]));
//! let mut config = CardConfiguration::new();
//! config.insert("header".into(), group);
//!
//! let engine = CardLayoutEngine::new(ProportionalMetrics::default());
//! let orientation = Orientation::new(100, 50).with_padding(1, 5);
//! let layout = engine.layout(&config, &orientation, &WorkItem::new("Tidy the backlog"));
//!
//! assert_eq!(layout.groups.len(), 1);
//! assert_eq!(layout.groups[0].row_heights, [40]);
//! ```

pub mod allocator;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod group;
pub mod min_height;
pub mod prune;
pub mod surface;

pub use allocator::{RowDemand, allocate, equal_split};
pub use engine::{CardLayout, CardLayoutEngine};
pub use error::{LayoutError, Result};
pub use geometry::{Bounds, Orientation};
pub use group::{ColumnGeometry, GroupGeometry, RowGeometry, layout_columns, layout_group};
pub use min_height::{column_minimum_height, minimum_height, row_minimum_height};
pub use prune::{CardPlan, PlannedGroup, PlannedRow};
pub use surface::{FontMetrics, ProportionalMetrics, RenderSurface, TextStyle};

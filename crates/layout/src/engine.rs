//! The card layout pass.

use cardex_protocol::{CardConfiguration, WorkItem};
use tracing::{debug, instrument, warn};

use crate::allocator::{RowDemand, allocate};
use crate::error::{LayoutError, Result};
use crate::geometry::Orientation;
use crate::group::{GroupGeometry, RowGeometry, layout_group};
use crate::min_height::minimum_height;
use crate::prune::CardPlan;
use crate::surface::FontMetrics;

/// Lays cards out against a set of font metrics.
///
/// The engine holds no state between passes; the same configuration,
/// orientation and work item always produce the same layout.
///
/// # Examples
///
/// ```
/// use cardex_layout::{CardLayoutEngine, Orientation, ProportionalMetrics};
/// use cardex_protocol::dummy::{sample_card, sample_work_items};
///
/// let engine = CardLayoutEngine::new(ProportionalMetrics::default());
/// let config = sample_card();
/// let items = sample_work_items();
/// let orientation = Orientation::new(300, 200).with_padding(2, 4);
///
/// let layout = engine.layout(&config, &orientation, &items[0]);
/// let total: i32 = layout.row_heights().sum();
/// assert_eq!(total + 4 * (layout.groups.len() as i32 + 1), 200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CardLayoutEngine<M> {
    metrics: M,
}

impl<M: FontMetrics> CardLayoutEngine<M> {
    pub const fn new(metrics: M) -> Self {
        Self { metrics }
    }

    pub const fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Lays out `config` for `item` inside `orientation`.
    ///
    /// Empty groups and rows are pruned, every remaining row gets its
    /// height from a single card-wide allocation, and the groups are then
    /// placed top-down starting one group padding below the card's top edge.
    pub fn layout<'a>(
        &self,
        config: &'a CardConfiguration,
        orientation: &Orientation,
        item: &WorkItem,
    ) -> CardLayout<'a> {
        self.layout_plan(&CardPlan::build(config, item), orientation)
    }

    /// Lays out an already pruned card.
    #[instrument(skip_all, fields(groups = plan.groups.len(), rows = plan.rows.len()))]
    pub fn layout_plan<'a>(&self, plan: &CardPlan<'a>, orientation: &Orientation) -> CardLayout<'a> {
        let available_height = orientation.available_height(plan.groups.len());
        if plan.is_empty() {
            debug!("nothing to lay out");
            return CardLayout {
                orientation: *orientation,
                available_height,
                groups: Vec::new(),
            };
        }
        if available_height <= 0 {
            warn!(available_height, "group padding leaves no height for rows");
        }

        let demands: Vec<RowDemand> = plan
            .rows
            .iter()
            .map(|planned| {
                let columns = planned.columns.iter().map(|&(_, column)| column);
                RowDemand::new(
                    minimum_height(planned.row.height, columns, &self.metrics),
                    planned.row.priority,
                )
            })
            .collect();
        let heights = allocate(&demands, available_height);
        let minimums: Vec<i32> = demands.iter().map(|demand| demand.minimum).collect();

        let mut groups = Vec::with_capacity(plan.groups.len());
        let mut start = 0;
        let mut offset = orientation.group_padding;
        for (group, rows) in plan.grouped_rows() {
            let end = start + group.row_count;
            let geometry = layout_group(
                group.key,
                group.group,
                rows,
                &heights[start..end],
                &minimums[start..end],
                orientation.height - offset,
                orientation,
            );
            offset += geometry.rows_height() + orientation.group_padding;
            start = end;
            groups.push(geometry);
        }

        CardLayout {
            orientation: *orientation,
            available_height,
            groups,
        }
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout<'a> {
    pub orientation: Orientation,
    /// Card height left for rows after all group paddings.
    pub available_height: i32,
    pub groups: Vec<GroupGeometry<'a>>,
}

impl<'a> CardLayout<'a> {
    /// Returns `true` if the card pruned down to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All rows in group-then-row order.
    pub fn rows(&self) -> impl Iterator<Item = (&GroupGeometry<'a>, &RowGeometry<'a>)> {
        self.groups
            .iter()
            .flat_map(|group| group.rows.iter().map(move |row| (group, row)))
    }

    /// All allocated row heights in group-then-row order.
    pub fn row_heights(&self) -> impl Iterator<Item = i32> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.row_heights.iter().copied())
    }

    /// Rows that were allocated less than their minimum height.
    pub fn under_allocated_rows(&self) -> impl Iterator<Item = (&GroupGeometry<'a>, &RowGeometry<'a>)> {
        self.rows().filter(|(_, row)| row.is_under_allocated())
    }

    /// Checks that every row got at least its minimum height.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::NonPositiveBudget`] if group padding leaves no room
    ///   for a non-empty card
    /// - [`LayoutError::InsufficientBudget`] for the first row below its
    ///   minimum
    ///
    /// # Examples
    ///
    /// ```
    /// use cardex_layout::{CardLayoutEngine, LayoutError, Orientation, ProportionalMetrics};
    /// use cardex_protocol::dummy::{sample_card, sample_work_items};
    ///
    /// let engine = CardLayoutEngine::new(ProportionalMetrics::default());
    /// let config = sample_card();
    /// let item = &sample_work_items()[0];
    ///
    /// let roomy = engine.layout(&config, &Orientation::new(400, 400).with_padding(2, 4), item);
    /// assert!(roomy.ensure_fits().is_ok());
    ///
    /// let cramped = engine.layout(&config, &Orientation::new(400, 40).with_padding(2, 4), item);
    /// assert!(matches!(cramped.ensure_fits(), Err(LayoutError::InsufficientBudget { .. })));
    /// ```
    pub fn ensure_fits(&self) -> Result<()> {
        if !self.is_empty() && self.available_height <= 0 {
            return Err(LayoutError::NonPositiveBudget {
                available: self.available_height,
            });
        }

        match self.under_allocated_rows().next() {
            Some((group, row)) => Err(LayoutError::InsufficientBudget {
                group: group.key.to_string(),
                row: row.key.to_string(),
                allocated: row.bounds.height,
                minimum: row.minimum,
            }),
            None => Ok(()),
        }
    }
}

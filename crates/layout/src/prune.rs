//! Pruning and flattening of a card configuration.
//!
//! A card is pruned once per layout pass, against one work item:
//!
//! 1. Columns whose field is missing or empty are dropped, unless the
//!    column asks to be rendered anyway.
//! 2. Rows left without columns are dropped, unless they carry a fixed
//!    height and act as spacers.
//! 3. Groups left without rows are dropped.
//!
//! The surviving rows are flattened into one sequence in group-then-row
//! order. Each planned group records how many of those rows it owns, so the
//! allocator's output can be sliced back into groups without re-walking the
//! nested configuration.

use cardex_protocol::{CardConfiguration, Column, Group, Row, WorkItem};

/// A row that survived pruning, with its visible columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRow<'a> {
    pub key: &'a str,
    pub row: &'a Row,
    pub columns: Vec<(&'a str, &'a Column)>,
}

/// A group that survived pruning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedGroup<'a> {
    pub key: &'a str,
    pub group: &'a Group,
    /// Number of consecutive entries of [`CardPlan::rows`] owned by this group.
    pub row_count: usize,
}

/// The pruned, flattened shape of a card for one work item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPlan<'a> {
    pub groups: Vec<PlannedGroup<'a>>,
    pub rows: Vec<PlannedRow<'a>>,
}

impl<'a> CardPlan<'a> {
    /// Prunes `config` against `item` and flattens what remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardex_layout::CardPlan;
    /// use cardex_protocol::{CardConfiguration, Column, Group, Row, WorkItem};
    ///
    /// let mut config = CardConfiguration::new();
    /// config.insert("header".into(), Group {
    ///     rows: [
    ///         ("title".to_string(), Row::with_columns([("subject", Column::default())])),
    ///         ("meta".to_string(), Row::with_columns([("status", Column::default())])),
    ///     ]
    ///     .into_iter()
    ///     .collect(),
    ///     ..Group::default()
    /// });
    ///
    /// // The item has no status, so the meta row disappears.
    /// let plan = CardPlan::build(&config, &WorkItem::new("Fix login"));
    /// assert_eq!(plan.groups.len(), 1);
    /// assert_eq!(plan.groups[0].row_count, 1);
    /// assert_eq!(plan.rows[0].key, "title");
    /// ```
    #[must_use]
    pub fn build(config: &'a CardConfiguration, item: &WorkItem) -> Self {
        // Pass one: visible rows per group.
        let mut candidates: Vec<(&'a str, &'a Group, Vec<PlannedRow<'a>>)> = Vec::new();
        for (group_key, group) in config {
            let rows: Vec<PlannedRow<'a>> = group
                .rows
                .iter()
                .filter_map(|(row_key, row)| plan_row(row_key, row, item))
                .collect();
            candidates.push((group_key.as_str(), group, rows));
        }

        // Pass two: drop empty groups and flatten.
        let mut plan = CardPlan::default();
        for (key, group, rows) in candidates {
            if rows.is_empty() {
                continue;
            }
            plan.groups.push(PlannedGroup {
                key,
                group,
                row_count: rows.len(),
            });
            plan.rows.extend(rows);
        }

        plan
    }

    /// Returns `true` if nothing survived pruning.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates the groups alongside the slice of rows each one owns.
    pub fn grouped_rows(&self) -> impl Iterator<Item = (&PlannedGroup<'a>, &[PlannedRow<'a>])> {
        let mut start = 0;
        self.groups.iter().map(move |group| {
            let rows = &self.rows[start..start + group.row_count];
            start += group.row_count;
            (group, rows)
        })
    }
}

fn plan_row<'a>(key: &'a str, row: &'a Row, item: &WorkItem) -> Option<PlannedRow<'a>> {
    let columns: Vec<(&'a str, &'a Column)> = row
        .columns
        .iter()
        .filter(|(field, column)| column.render_if_empty || item.has_value(field))
        .map(|(field, column)| (field.as_str(), column))
        .collect();

    if columns.is_empty() && row.height.is_none() {
        return None;
    }

    Some(PlannedRow { key, row, columns })
}

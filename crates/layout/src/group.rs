//! Geometry of a single group.
//!
//! A group receives a slice of the card-wide row heights and turns it into
//! boxes: the group box itself, one box per row stacked top-down with no
//! gaps, and one box per column placed left to right inside each row.

use cardex_protocol::{Column, Group, Row};

use crate::geometry::{Bounds, Orientation};
use crate::prune::PlannedRow;

/// Laid-out column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGeometry<'a> {
    /// Work-item field shown by the column.
    pub key: &'a str,
    pub column: &'a Column,
    pub bounds: Bounds,
    /// `bounds` inset by the text padding.
    pub text_bounds: Bounds,
}

/// Laid-out row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGeometry<'a> {
    pub key: &'a str,
    pub row: &'a Row,
    pub bounds: Bounds,
    /// Height the row needs; compare with `bounds.height` to detect a shortfall.
    pub minimum: i32,
    pub columns: Vec<ColumnGeometry<'a>>,
}

impl RowGeometry<'_> {
    /// Returns `true` if the row got less than its minimum height.
    #[must_use]
    pub fn is_under_allocated(&self) -> bool {
        self.bounds.height < self.minimum
    }
}

/// Laid-out group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupGeometry<'a> {
    pub key: &'a str,
    pub group: &'a Group,
    /// Group box. Its height is the row sum less half a group padding.
    pub bounds: Bounds,
    /// Allocated heights of this group's rows, in row order.
    pub row_heights: Vec<i32>,
    pub rows: Vec<RowGeometry<'a>>,
}

impl GroupGeometry<'_> {
    /// Sum of the allocated row heights, before the half-padding trim.
    #[must_use]
    pub fn rows_height(&self) -> i32 {
        self.row_heights.iter().sum()
    }
}

/// Lays out one group whose top edge sits at `top`.
///
/// `rows`, `row_heights` and `minimums` are parallel slices.
///
/// # Examples
///
/// ```
/// use cardex_layout::{Bounds, Orientation, layout_group};
/// use cardex_protocol::Group;
///
/// let group = Group::default();
/// let orientation = Orientation::new(100, 200).with_padding(1, 10);
///
/// let geometry = layout_group("empty", &group, &[], &[], &[], 190, &orientation);
/// assert_eq!(geometry.bounds, Bounds::new(0, 190, 100, -5));
/// ```
#[must_use]
pub fn layout_group<'a>(
    key: &'a str,
    group: &'a Group,
    rows: &[PlannedRow<'a>],
    row_heights: &[i32],
    minimums: &[i32],
    top: i32,
    orientation: &Orientation,
) -> GroupGeometry<'a> {
    let rows_height: i32 = row_heights.iter().sum();
    let bounds = Bounds::new(
        0,
        top,
        orientation.width,
        rows_height - orientation.group_padding / 2,
    );

    let mut row_top = top;
    let rows = rows
        .iter()
        .zip(row_heights)
        .zip(minimums)
        .map(|((planned, &height), &minimum)| {
            let row_bounds = Bounds::new(0, row_top, orientation.width, height);
            row_top -= height;
            RowGeometry {
                key: planned.key,
                row: planned.row,
                bounds: row_bounds,
                minimum,
                columns: layout_columns(&planned.columns, row_bounds, orientation.text_padding),
            }
        })
        .collect();

    GroupGeometry {
        key,
        group,
        bounds,
        row_heights: row_heights.to_vec(),
        rows,
    }
}

/// Places columns left to right inside `row`.
///
/// Columns with an explicit width keep it. The remaining width is split
/// equally across the other columns, leftmost ones taking the remainder.
///
/// # Examples
///
/// ```
/// use cardex_layout::{Bounds, layout_columns};
/// use cardex_protocol::Column;
///
/// let narrow = Column { width: Some(20), ..Column::default() };
/// let flexible = Column::default();
/// let columns = [("type", &narrow), ("status", &flexible), ("due", &flexible)];
///
/// let geometry = layout_columns(&columns, Bounds::new(0, 50, 101, 10), 1);
/// let widths: Vec<i32> = geometry.iter().map(|c| c.bounds.width).collect();
/// assert_eq!(widths, [20, 41, 40]);
/// assert_eq!(geometry[1].bounds.x, 20);
/// assert_eq!(geometry[1].text_bounds, Bounds::new(21, 49, 39, 8));
/// ```
#[must_use]
pub fn layout_columns<'a>(
    columns: &[(&'a str, &'a Column)],
    row: Bounds,
    text_padding: i32,
) -> Vec<ColumnGeometry<'a>> {
    let fixed: i32 = columns.iter().filter_map(|(_, column)| column.width).sum();
    let flexible = columns.iter().filter(|(_, column)| column.width.is_none()).count();
    let mut shares = equal_widths((row.width - fixed).max(0), flexible).into_iter();

    let mut x = row.x;
    columns
        .iter()
        .map(|&(key, column)| {
            let width = column
                .width
                .unwrap_or_else(|| shares.next().unwrap_or_default());
            let bounds = Bounds::new(x, row.y, width, row.height);
            x += width;
            ColumnGeometry {
                key,
                column,
                bounds,
                text_bounds: bounds.inset(text_padding),
            }
        })
        .collect()
}

fn equal_widths(total: i32, count: usize) -> Vec<i32> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as i32;
    (0..n)
        .map(|index| total / n + i32::from(index < total % n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planned<'a>(key: &'a str, row: &'a Row) -> PlannedRow<'a> {
        PlannedRow {
            key,
            row,
            columns: row.columns.iter().map(|(k, c)| (k.as_str(), c)).collect(),
        }
    }

    #[test]
    fn rows_stack_top_down_without_gaps() {
        let group = Group::default();
        let title = Row::with_columns([("subject", Column::default())]);
        let meta = Row::with_columns([("status", Column::default())]);
        let rows = [planned("title", &title), planned("meta", &meta)];
        let orientation = Orientation::new(80, 100).with_padding(1, 4);

        let geometry = layout_group("g", &group, &rows, &[30, 20], &[10, 10], 96, &orientation);

        assert_eq!(geometry.bounds, Bounds::new(0, 96, 80, 48));
        assert_eq!(geometry.rows_height(), 50);
        assert_eq!(geometry.rows[0].bounds, Bounds::new(0, 96, 80, 30));
        assert_eq!(geometry.rows[1].bounds, Bounds::new(0, 66, 80, 20));
        assert_eq!(geometry.rows[1].bounds.bottom(), 46);
    }

    #[test]
    fn half_padding_trim_uses_integer_division() {
        let group = Group::default();
        let row = Row::with_columns([("subject", Column::default())]);
        let rows = [planned("r", &row)];
        let orientation = Orientation::new(10, 100).with_padding(0, 5);

        let geometry = layout_group("g", &group, &rows, &[40], &[10], 95, &orientation);
        assert_eq!(geometry.bounds.height, 38);
    }

    #[test]
    fn rows_report_shortfall() {
        let group = Group::default();
        let row = Row::with_columns([("subject", Column::default())]);
        let rows = [planned("r", &row)];
        let orientation = Orientation::new(10, 100);

        let geometry = layout_group("g", &group, &rows, &[8], &[10], 100, &orientation);
        assert!(geometry.rows[0].is_under_allocated());
        assert_eq!(geometry.rows[0].minimum, 10);
    }

    #[test]
    fn flexible_columns_share_the_width() {
        let column = Column::default();
        let columns = [("a", &column), ("b", &column), ("c", &column)];

        let geometry = layout_columns(&columns, Bounds::new(5, 40, 20, 10), 0);
        let xs: Vec<i32> = geometry.iter().map(|c| c.bounds.x).collect();
        let widths: Vec<i32> = geometry.iter().map(|c| c.bounds.width).collect();

        assert_eq!(xs, [5, 12, 19]);
        assert_eq!(widths, [7, 7, 6]);
    }

    #[test]
    fn fixed_widths_wider_than_the_row_leave_nothing_for_the_rest() {
        let wide = Column {
            width: Some(50),
            ..Column::default()
        };
        let flexible = Column::default();
        let columns = [("a", &wide), ("b", &flexible)];

        let geometry = layout_columns(&columns, Bounds::new(0, 10, 30, 10), 0);
        assert_eq!(geometry[0].bounds.width, 50);
        assert_eq!(geometry[1].bounds.width, 0);
    }

    #[test]
    fn text_bounds_never_go_negative() {
        let column = Column::default();
        let geometry = layout_columns(&[("a", &column)], Bounds::new(0, 3, 4, 3), 2);
        assert_eq!(geometry[0].text_bounds, Bounds::new(2, 1, 0, 0));
    }

    #[test]
    fn no_columns_no_geometry() {
        assert!(layout_columns(&[], Bounds::new(0, 10, 10, 10), 1).is_empty());
    }
}

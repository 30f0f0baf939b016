//! Minimum row heights.
//!
//! A row must be tall enough for its most demanding column. A column needs
//! `minimum_lines` lines at its sizing font size; a row with a fixed height
//! needs exactly that height and its columns are not consulted.

use cardex_protocol::{Column, Row};

use crate::surface::FontMetrics;

/// Minimum height of a single column, floored to whole units.
///
/// # Examples
///
/// ```
/// use cardex_layout::{ProportionalMetrics, column_minimum_height};
/// use cardex_protocol::Column;
///
/// let metrics = ProportionalMetrics::new(1.25);
/// let column = Column { font_size: Some(9.0), minimum_lines: 2, ..Column::default() };
///
/// // 9 * 1.25 * 2 = 22.5
/// assert_eq!(column_minimum_height(&column, &metrics), 22);
/// ```
#[must_use]
pub fn column_minimum_height<M: FontMetrics + ?Sized>(column: &Column, metrics: &M) -> i32 {
    let line = metrics.font_height_at(column.sizing_font_size());
    (line * column.minimum_lines as f32).floor() as i32
}

/// Minimum height of a row given its fixed height and visible columns.
///
/// A fixed height is returned verbatim. Otherwise the tallest column
/// minimum wins, and a row without columns needs nothing.
#[must_use]
pub fn minimum_height<'c, M, I>(fixed_height: Option<i32>, columns: I, metrics: &M) -> i32
where
    M: FontMetrics + ?Sized,
    I: IntoIterator<Item = &'c Column>,
{
    if let Some(height) = fixed_height {
        return height;
    }

    columns
        .into_iter()
        .map(|column| column_minimum_height(column, metrics))
        .fold(0, i32::max)
}

/// Minimum height of a row over all of its configured columns.
///
/// # Examples
///
/// ```
/// use cardex_layout::{ProportionalMetrics, row_minimum_height};
/// use cardex_protocol::{Column, Row};
///
/// let metrics = ProportionalMetrics::new(1.5);
/// let row = Row::with_columns([
///     ("subject", Column { minimum_lines: 2, ..Column::default() }),
///     ("status", Column { font_size: Some(14.0), ..Column::default() }),
/// ]);
///
/// assert_eq!(row_minimum_height(&row, &metrics), 30);
/// assert_eq!(row_minimum_height(&row.fixed_height(12), &metrics), 12);
/// ```
#[must_use]
pub fn row_minimum_height<M: FontMetrics + ?Sized>(row: &Row, metrics: &M) -> i32 {
    minimum_height(row.height, row.columns.values(), metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ProportionalMetrics;

    fn column(font_size: Option<f32>, min_font_size: Option<f32>, lines: u32) -> Column {
        Column {
            font_size,
            min_font_size,
            minimum_lines: lines,
            ..Column::default()
        }
    }

    #[test]
    fn default_font_size_is_ten() {
        let metrics = ProportionalMetrics::default();
        assert_eq!(column_minimum_height(&Column::default(), &metrics), 10);
    }

    #[test]
    fn min_font_size_wins_over_font_size() {
        let metrics = ProportionalMetrics::default();
        let column = column(Some(20.0), Some(6.0), 1);
        assert_eq!(column_minimum_height(&column, &metrics), 6);
    }

    #[test]
    fn lines_multiply_before_flooring() {
        // 7 * 1.25 = 8.75 per line; three lines = 26.25
        let metrics = ProportionalMetrics::new(1.25);
        let column = column(Some(7.0), None, 3);
        assert_eq!(column_minimum_height(&column, &metrics), 26);
    }

    #[test]
    fn zero_lines_need_no_height() {
        let metrics = ProportionalMetrics::default();
        assert_eq!(column_minimum_height(&column(None, None, 0), &metrics), 0);
    }

    #[test]
    fn tallest_column_wins() {
        let metrics = ProportionalMetrics::default();
        let columns = [
            column(Some(8.0), None, 2),
            column(Some(12.0), None, 1),
            column(None, None, 1),
        ];
        assert_eq!(minimum_height(None, &columns, &metrics), 16);
    }

    #[test]
    fn fixed_height_is_authoritative() {
        let metrics = ProportionalMetrics::default();
        let columns = [column(Some(30.0), None, 4)];
        assert_eq!(minimum_height(Some(5), &columns, &metrics), 5);
    }

    #[test]
    fn empty_row_needs_nothing() {
        let metrics = ProportionalMetrics::default();
        assert_eq!(minimum_height(None, &[], &metrics), 0);
        assert_eq!(row_minimum_height(&Row::default(), &metrics), 0);
    }
}

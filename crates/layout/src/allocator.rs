//! Height allocation across rows.
//!
//! Every row starts with an equal share of the available height. Rows that
//! end up below their minimum then pull from rows with surplus, lowest
//! `priority` value first, ties going to the earlier row. The result always
//! sums to the available height, whether or not every minimum is met.

use tracing::{debug, warn};

/// What a row asks of the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDemand {
    /// Height the row needs to show its content.
    pub minimum: i32,
    /// Donor ordering key. Lower values are drained first.
    pub priority: i32,
}

impl RowDemand {
    #[must_use]
    pub const fn new(minimum: i32, priority: i32) -> Self {
        Self { minimum, priority }
    }
}

/// Splits `available` into `count` shares that sum to `available` exactly.
///
/// The remainder goes one unit at a time to the first shares.
///
/// # Examples
///
/// ```
/// use cardex_layout::equal_split;
///
/// assert_eq!(equal_split(280, 3), [94, 93, 93]);
/// assert_eq!(equal_split(-5, 2), [-2, -3]);
/// assert!(equal_split(10, 0).is_empty());
/// ```
#[must_use]
pub fn equal_split(available: i32, count: usize) -> Vec<i32> {
    if count == 0 {
        return Vec::new();
    }

    let n = count as i32;
    let share = available.div_euclid(n);
    let remainder = available.rem_euclid(n) as usize;

    (0..count)
        .map(|index| if index < remainder { share + 1 } else { share })
        .collect()
}

/// Allocates `available` height across `rows`.
///
/// Recipients are visited once, left to right. Each takes what it is short
/// of its minimum from the donors that have surplus at that moment, in
/// ascending priority order with ties broken by row index. A recipient
/// that cannot be made whole stays short; the shortfall is left for the
/// caller to detect.
///
/// # Examples
///
/// ```
/// use cardex_layout::{RowDemand, allocate};
///
/// let rows = [
///     RowDemand::new(150, 10),
///     RowDemand::new(10, 5),
///     RowDemand::new(10, 20),
/// ];
///
/// // Both donors are drained to their minimum; the first row is still short.
/// assert_eq!(allocate(&rows, 150), [130, 10, 10]);
/// ```
#[must_use]
pub fn allocate(rows: &[RowDemand], available: i32) -> Vec<i32> {
    let mut heights = equal_split(available, rows.len());
    if rows.len() < 2 {
        return heights;
    }

    let mut deficits: Vec<i32> = heights
        .iter()
        .zip(rows)
        .map(|(height, row)| height - row.minimum)
        .collect();

    let mut donors: Vec<usize> = (0..rows.len()).collect();
    donors.sort_by_key(|&index| rows[index].priority);

    for recipient in 0..rows.len() {
        if deficits[recipient] >= 0 {
            continue;
        }

        for &donor in &donors {
            let need = -deficits[recipient];
            if need == 0 {
                break;
            }

            let surplus = deficits[donor];
            if donor == recipient || surplus <= 0 {
                continue;
            }

            let amount = surplus.min(need);
            heights[donor] -= amount;
            deficits[donor] -= amount;
            heights[recipient] += amount;
            deficits[recipient] += amount;
            debug!(donor, recipient, amount, "transferred row height");
        }

        if deficits[recipient] < 0 {
            warn!(
                row = recipient,
                shortfall = -deficits[recipient],
                "row left below its minimum height"
            );
        }
    }

    heights
}

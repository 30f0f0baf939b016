//! Helpers shared by rendering tests.

use ratatui::buffer::Buffer;

/// Renders the symbols of `buf` as text, one line per row.
///
/// Trailing spaces are dropped so snapshots stay readable; every row,
/// including the last, ends with a newline.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let width = usize::from(buf.area.width).max(1);
    buf.content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            format!("{}\n", line.trim_end_matches(' '))
        })
        .collect()
}

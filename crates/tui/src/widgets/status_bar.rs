//! Status bar widget.
//!
//! One line at the bottom of the screen: the item position and key hints on
//! the left, the fit check result on the right.

use cardex_layout::LayoutError;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// What the status bar reports on its right-hand side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitStatus {
    /// Every row got at least its minimum height.
    Fits,
    /// The card does not fit its rectangle.
    DoesNotFit(LayoutError),
    /// Something else the user should know, such as a failed reload.
    Notice(String),
}

impl From<Result<(), LayoutError>> for FitStatus {
    fn from(result: Result<(), LayoutError>) -> Self {
        match result {
            Ok(()) => Self::Fits,
            Err(err) => Self::DoesNotFit(err),
        }
    }
}

/// Renders the status bar.
///
/// `position` is the zero-based index of the shown item and the item count.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use cardex_tui::widgets::{FitStatus, render_status_bar};
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar((0, 4), &FitStatus::Fits, area, &mut buf);
/// ```
pub fn render_status_bar(position: (usize, usize), status: &FitStatus, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let (index, count) = position;
    let shown = if count == 0 { 0 } else { index + 1 };

    let hints = Line::from(vec![
        Span::styled(format!(" {shown}/{count} "), Style::default().fg(Color::White)),
        Span::styled("←/→", key_style),
        Span::styled(" item  ", text_style),
        Span::styled("r", key_style),
        Span::styled(" reload  ", text_style),
        Span::styled("q", key_style),
        Span::styled(" quit", text_style),
    ]);

    let (message, color) = match status {
        FitStatus::Fits => ("fits".to_string(), Color::Green),
        FitStatus::DoesNotFit(err) => (err.to_string(), Color::Red),
        FitStatus::Notice(text) => (text.clone(), Color::Yellow),
    };
    let message_width = u16::try_from(message.chars().count() + 1).unwrap_or(u16::MAX);

    let [hints_area, message_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(message_width)]).areas(area);

    Paragraph::new(hints).render(hints_area, buf);
    Paragraph::new(Span::styled(message, Style::default().fg(color)))
        .alignment(Alignment::Right)
        .render(message_area, buf);
}

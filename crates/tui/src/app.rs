//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the card preview
//! lifecycle: event handling, state updates, layout and rendering.

use std::path::PathBuf;

use cardex_config::Config;
use cardex_layout::{CardLayoutEngine, Orientation};
use cardex_protocol::{Message, WorkItem};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::{debug, warn};

use crate::{
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT},
    surface::{BufferSurface, TerminalMetrics},
    terminal::AppTerminal,
    widgets::{FitStatus, draw_card, render_status_bar},
};

/// The card preview application.
///
/// Shows one work item at a time, laid out with the loaded card
/// configuration against the terminal's size.
#[derive(Debug)]
pub struct App {
    config: Config,
    /// File the configuration was loaded from; `None` for the default search.
    config_path: Option<PathBuf>,
    items: Vec<WorkItem>,
    selected: usize,
    engine: CardLayoutEngine<TerminalMetrics>,
    /// Message from the last failed reload, shown until the next success.
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardex_config::Config;
    /// use cardex_protocol::dummy::sample_work_items;
    /// use cardex_tui::App;
    ///
    /// let app = App::new(Config::sample(), sample_work_items());
    /// assert_eq!(app.selected(), 0);
    /// ```
    #[must_use]
    pub fn new(config: Config, items: Vec<WorkItem>) -> Self {
        Self {
            config,
            config_path: None,
            items,
            selected: 0,
            engine: CardLayoutEngine::new(TerminalMetrics),
            notice: None,
            should_quit: false,
        }
    }

    /// Sets the file that [`Message::Reload`] reads the configuration from.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Returns the card configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the index of the shown work item.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the shown work item, if there is one.
    #[must_use]
    pub fn selected_item(&self) -> Option<&WorkItem> {
        self.items.get(self.selected)
    }

    /// Returns whether the application should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    pub fn update(&mut self, msg: Message) {
        let last = self.items.len().saturating_sub(1);
        match msg {
            Message::PreviousItem => self.selected = self.selected.saturating_sub(1),
            Message::NextItem => self.selected = (self.selected + 1).min(last),
            Message::FirstItem => self.selected = 0,
            Message::LastItem => self.selected = last,
            Message::Reload => self.reload(),
            Message::Quit => self.should_quit = true,
        }
    }

    fn reload(&mut self) {
        let loaded = match &self.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };

        match loaded {
            Ok(config) => {
                debug!(name = config.display_name(), "reloaded card configuration");
                self.config = config;
                self.notice = None;
            }
            Err(err) => {
                warn!(error = %err, "failed to reload card configuration");
                self.notice = Some(format!("reload failed: {err}"));
            }
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Below [`MIN_WIDTH`] by [`MIN_HEIGHT`] only a "terminal too small"
    /// message is shown.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let [header_area, card_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        self.render_header(frame, header_area);
        let status = self.render_card(frame, card_area);
        render_status_bar(
            (self.selected, self.items.len()),
            &status,
            status_area,
            frame.buffer_mut(),
        );
    }

    /// Orientation of a card filling `area`.
    #[must_use]
    pub fn orientation(&self, area: Rect) -> Orientation {
        let spacing = self.config.spacing;
        Orientation::new(i32::from(area.width), i32::from(area.height))
            .at(i32::from(area.x), i32::from(area.y))
            .with_padding(spacing.text_padding, spacing.group_padding)
    }

    fn render_card(&self, frame: &mut Frame, area: Rect) -> FitStatus {
        let Some(item) = self.selected_item() else {
            return FitStatus::Notice("no work items".to_string());
        };

        let orientation = self.orientation(area);
        let layout = self.engine.layout(&self.config.groups, &orientation, item);
        draw_card(
            &mut BufferSurface::new(frame.buffer_mut(), &orientation),
            &layout,
            item,
        );

        match &self.notice {
            Some(notice) => FitStatus::Notice(notice.clone()),
            None => layout.ensure_fits().into(),
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header line with the title and the card's name.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                " cardex",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(
                self.config.display_name().to_string(),
                Style::default().fg(Color::White),
            ),
        ]));
        frame.render_widget(title, area);
    }

    /// Runs the main application loop.
    ///
    /// Redraws after every event and returns once a [`Message::Quit`] has
    /// been handled.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cardex_config::Config;
    /// use cardex_protocol::dummy::sample_work_items;
    /// use cardex_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Config::sample(), sample_work_items());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }

            tokio::task::yield_now().await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardex_protocol::dummy::sample_work_items;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn app() -> App {
        App::new(Config::sample(), sample_work_items())
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        crate::test_utils::buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = app();

        assert!(!app.should_quit());
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_navigation_is_clamped() {
        let mut app = app();

        app.update(Message::PreviousItem);
        assert_eq!(app.selected(), 0);

        app.update(Message::NextItem);
        app.update(Message::NextItem);
        assert_eq!(app.selected(), 2);

        app.update(Message::LastItem);
        assert_eq!(app.selected(), 3);
        app.update(Message::NextItem);
        assert_eq!(app.selected(), 3);

        app.update(Message::FirstItem);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn app_navigation_without_items() {
        let mut app = App::new(Config::sample(), Vec::new());

        app.update(Message::NextItem);
        app.update(Message::LastItem);
        assert_eq!(app.selected(), 0);
        assert!(app.selected_item().is_none());
    }

    #[test]
    fn app_orientation_follows_area_and_spacing() {
        let app = app();
        let orientation = app.orientation(Rect::new(0, 1, 80, 22));

        assert_eq!(
            orientation,
            Orientation::new(80, 22).at(0, 1).with_padding(1, 2)
        );
    }

    #[test]
    fn app_view_shows_too_small_message() {
        let content = render(&app(), 20, 8);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn app_view_renders_card_and_status() {
        let content = render(&app(), 70, 32);

        assert!(content.contains("cardex - Sample"));
        assert!(content.contains("Export cards as PDF"));
        assert!(content.contains("1/4"));
        assert!(content.contains("fits"));
    }

    #[test]
    fn app_view_reports_cramped_card() {
        let content = render(&app(), 70, 12);

        assert!(content.contains("needs"));
        assert!(!content.contains("fits"));
    }

    #[test]
    fn app_view_without_items() {
        let app = App::new(Config::sample(), Vec::new());
        let content = render(&app, 70, 20);

        assert!(content.contains("no work items"));
    }

    #[test]
    fn app_reload_replaces_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("card.json5");
        std::fs::write(
            &path,
            "{ name: 'Minimal', groups: { g: { rows: { r: { columns: { subject: {} } } } } } }",
        )
        .unwrap();

        let mut app = app().with_config_path(&path);
        app.update(Message::Reload);

        assert_eq!(app.config().display_name(), "Minimal");
        assert!(render(&app, 70, 20).contains("cardex - Minimal"));
    }

    #[test]
    fn app_failed_reload_keeps_config_and_shows_notice() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("card.json5");
        std::fs::write(&path, "{ groups: { g: {} } }").unwrap();

        let mut app = app().with_config_path(&path);
        app.update(Message::Reload);

        assert_eq!(app.config().display_name(), "Sample");
        assert!(render(&app, 90, 20).contains("reload failed"));
    }
}

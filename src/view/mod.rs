//! TUI rendering and terminal management (impure shell).
//!
//! The shell is the "external driver" of the refresh cycle: it polls for
//! terminal events with the configured tick interval and runs one
//! [`RefreshCycle::refresh`] per tick. Everything it draws comes out of the
//! [`StyledBuffer`] the cycle renders into.

pub mod highlight;
pub mod presenter;
pub mod styles;
pub mod surface;

pub use highlight::{ColorTag, HighlightRule, default_rules};
pub use presenter::LogPresenter;
pub use styles::{ColorConfig, HighlightStyles};
pub use surface::{StyledBuffer, TextSurface};

use crate::model::LogViewConfig;
use crate::viewer::RefreshCycle;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    cycle: RefreshCycle,
    view_config: LogViewConfig,
    surface: StyledBuffer,
    styles: HighlightStyles,
    tick: Duration,
    /// Height of the log pane at the last draw, for paging and scrolling.
    last_pane_height: u16,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a TUI application on the real terminal.
    ///
    /// Sets up raw mode and the alternate screen; [`restore_terminal`] must
    /// run before the process exits.
    pub fn new(
        cycle: RefreshCycle,
        view_config: LogViewConfig,
        styles: HighlightStyles,
        tick: Duration,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, cycle, view_config, styles, tick))
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits (q, Esc or Ctrl+C). Each tick with no
    /// pending terminal event runs one refresh cycle; key events redraw
    /// immediately without re-reading the file.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.cycle.refresh(&mut self.surface, &self.view_config);
        self.draw()?;

        loop {
            if event::poll(self.tick)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            } else {
                self.cycle.refresh(&mut self.surface, &self.view_config);
                self.draw()?;
            }
        }
    }
}

/// Leave the alternate screen and disable raw mode.
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an application over an existing terminal (used by tests with
    /// `TestBackend`).
    pub fn with_terminal(
        terminal: Terminal<B>,
        cycle: RefreshCycle,
        view_config: LogViewConfig,
        styles: HighlightStyles,
        tick: Duration,
    ) -> Self {
        Self {
            terminal,
            cycle,
            view_config,
            surface: StyledBuffer::new(),
            styles,
            tick,
            last_pane_height: 24,
        }
    }

    /// Handle a key event. Returns true when the user quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => return true,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return true,
            (KeyCode::Up, _) => self.move_caret(-1),
            (KeyCode::Down, _) => self.move_caret(1),
            (KeyCode::PageUp, _) => self.move_caret(-(self.last_pane_height as isize)),
            (KeyCode::PageDown, _) => self.move_caret(self.last_pane_height as isize),
            (KeyCode::Home, _) | (KeyCode::Char('g'), _) => {
                self.view_config.auto_scroll = false;
                self.surface.set_selection(0, 0);
                self.surface.scroll_to_selection();
            }
            (KeyCode::End, _) | (KeyCode::Char('G'), _) => {
                debug!("follow re-enabled");
                self.view_config.auto_scroll = true;
                let end = self.surface.text_len();
                self.surface.set_selection(end, 0);
                self.surface.scroll_to_selection();
            }
            _ => {}
        }
        false
    }

    /// Move the caret by whole lines; any manual movement leaves follow
    /// mode so the next refresh keeps the user's place.
    fn move_caret(&mut self, delta: isize) {
        self.view_config.auto_scroll = false;
        let starts = line_starts(self.surface.text());
        let (sel_start, _) = self.surface.selection();
        let current = starts.partition_point(|&s| s <= sel_start).saturating_sub(1);
        let target = current.saturating_add_signed(delta).min(starts.len() - 1);
        self.surface.set_selection(starts[target], 0);
        self.surface.scroll_to_selection();
    }

    /// Follow-mode flag, as toggled by key handling.
    pub fn following(&self) -> bool {
        self.view_config.auto_scroll
    }

    /// Draw the log pane and the status line.
    fn draw(&mut self) -> Result<(), TuiError> {
        let text = self.surface.to_text(&self.styles);
        let scroll_line = self.surface.scroll_line();
        let path = self.cycle.path().display().to_string();
        let status = format!(
            " {} | {} | {}",
            path,
            if self.view_config.full_view {
                "full"
            } else {
                "tail"
            },
            if self.view_config.auto_scroll {
                "following"
            } else {
                "paused"
            },
        );

        let mut pane_height = self.last_pane_height;
        self.terminal.draw(|frame| {
            let [log_area, status_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
            pane_height = log_area.height.max(1);

            // Keep the caret line inside the pane.
            let caret_line = scroll_line.min(u16::MAX as usize) as u16;
            let top = caret_line.saturating_sub(pane_height - 1);
            frame.render_widget(Paragraph::new(text).scroll((top, 0)), log_area);
            frame.render_widget(
                Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
                status_area,
            );
        })?;
        self.last_pane_height = pane_height;
        Ok(())
    }
}

/// Char offsets of each line start in `text`.
fn line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let mut offset = 0;
    for ch in text.chars() {
        offset += 1;
        if ch == '\n' {
            starts.push(offset);
        }
    }
    starts
}

//! Main application logic and TUI event loop.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{info, warn};

use crate::cli::AppConfig;
use crate::dashboard::{Command, Dashboard, Mounts, Outcome};
use crate::data::Period;
use crate::ui::{
    category_chart::CategoryChart,
    layout::DashboardLayout,
    trend_chart::TrendChart,
    widgets::{Header, KpiCard, StatusBar},
    HelpContext, HelpOverlay, Theme,
};

/// Longest the loop sleeps waiting for input while nothing animates
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    theme: Theme,
    dashboard: Dashboard,
    mounts: Mounts,
    tick_interval: Duration,

    show_help: bool,
    should_quit: bool,

    // Last informational message (e.g. where an export went)
    status_message: Option<String>,
    // Error message to display (non-fatal)
    error_message: Option<String>,
}

impl App {
    /// Create a new App for a terminal of the given size
    pub fn new(config: AppConfig, area: Rect, now: Instant) -> Self {
        let mut dashboard = Dashboard::new(config.period, config.export_dir, config.tick_interval);
        let mounts = DashboardLayout::compute(area).mounts();
        dashboard.init(&mounts, now);

        App {
            theme: Theme::default(),
            dashboard,
            mounts,
            tick_interval: config.tick_interval,
            show_help: false,
            should_quit: false,
            status_message: None,
            error_message: None,
        }
    }

    /// Set an error message to display (non-fatal)
    pub fn set_error(&mut self, message: String) {
        warn!(%message, "non-fatal error");
        self.error_message = Some(message);
    }

    /// Follow a terminal resize
    fn resize(&mut self, area: Rect, now: Instant) {
        let mounts = DashboardLayout::compute(area).mounts();
        if mounts != self.mounts {
            self.dashboard.remount(&mounts, now);
            self.mounts = mounts;
        }
    }

    fn dispatch(&mut self, command: Command, now: Instant) -> Result<()> {
        self.error_message = None;
        let outcome = self
            .dashboard
            .dispatch(command, &self.mounts, now)
            .with_context(|| format!("{command:?} failed"))?;

        self.status_message = match outcome {
            Outcome::PeriodChanged(period) => Some(format!("Showing {period} trend")),
            Outcome::RefreshStarted => Some("Refreshing...".to_string()),
            Outcome::Exported(path) => Some(format!("Exported to {}", path.display())),
        };
        Ok(())
    }

    /// Handle keyboard input
    fn handle_input(&mut self, key: KeyCode, modifiers: KeyModifiers, now: Instant) -> Result<()> {
        // Global shortcuts
        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::F(1) => {
                self.show_help = !self.show_help;
                return Ok(());
            }
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
                return Ok(());
            }
            _ => {}
        }

        // If help is shown, don't process other keys
        if self.show_help {
            return Ok(());
        }

        // Period selection with number keys
        if let KeyCode::Char(c) = key {
            if let Some(n) = c.to_digit(10) {
                if n > 0 && (n as usize) <= Period::ALL.len() {
                    return self.dispatch(Command::SetPeriod(Period::ALL[n as usize - 1]), now);
                }
            }
        }

        match key {
            KeyCode::Left => {
                let period = self.dashboard.period().prev();
                self.dispatch(Command::SetPeriod(period), now)
            }
            KeyCode::Right => {
                let period = self.dashboard.period().next();
                self.dispatch(Command::SetPeriod(period), now)
            }
            KeyCode::Char('r') => self.dispatch(Command::Refresh, now),
            KeyCode::Char('e') => self.dispatch(Command::Export, now),
            _ => Ok(()),
        }
    }

    fn tick(&mut self, now: Instant) {
        let was_spinning = self.dashboard.refresh_state().is_spinning();
        self.dashboard.tick(now);
        if was_spinning && !self.dashboard.refresh_state().is_spinning() {
            self.status_message = Some("Data refreshed".to_string());
        }
    }

    /// How long to wait for input before the next tick
    fn poll_timeout(&self) -> Duration {
        if self.dashboard.is_animating() {
            self.tick_interval
        } else {
            IDLE_POLL
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let size = frame.area();
        let layout = DashboardLayout::compute(size);

        let header = Header::new(
            self.dashboard.selector().controls(),
            self.dashboard.refresh_state().frame(Instant::now()),
            &self.theme,
        );
        header.render(frame, layout.header);

        for &(card, area) in &layout.cards {
            KpiCard::new(card, self.dashboard.board(), &self.theme).render(frame, area);
        }

        if let Some(area) = layout.trend {
            TrendChart::new(self.dashboard.charts().trend(), &self.theme).render(frame, area);
        }
        if let Some(area) = layout.category {
            CategoryChart::new(self.dashboard.charts().category(), &self.theme).render(frame, area);
        }

        let status_bar = StatusBar::new(
            self.status_message.as_deref(),
            self.error_message.as_deref(),
            &self.theme,
        );
        status_bar.render(frame, layout.status);

        // Render help overlay if active
        if self.show_help {
            let context = HelpContext {
                period: self.dashboard.period(),
                export_dir: self.dashboard.export_dir(),
                animating: self.dashboard.is_animating(),
            };
            HelpOverlay::new(context, &self.theme).render(frame, size);
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() {
    // Best effort cleanup - ignore errors since we may be in a panic
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        restore_terminal();
        return Err(e).context("Failed to setup terminal");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            restore_terminal();
            return Err(e).context("Failed to create terminal");
        }
    };

    let size = match terminal.size() {
        Ok(s) => s,
        Err(e) => {
            restore_terminal();
            return Err(e).context("Failed to read terminal size");
        }
    };
    let mut app = App::new(config, Rect::new(0, 0, size.width, size.height), Instant::now());
    info!(width = size.width, height = size.height, "dashboard started");

    // Main loop - wrap in a closure to ensure cleanup
    let result = run_main_loop(&mut terminal, &mut app);

    // Always restore terminal, regardless of result
    restore_terminal();
    terminal.show_cursor().ok();

    result
}

/// Main application loop
fn run_main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick(Instant::now());

        // Render - if this fails, we should exit
        terminal.draw(|f| app.render(f))?;

        if event::poll(app.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Err(e) = app.handle_input(key.code, key.modifiers, Instant::now()) {
                        // Show the error but keep running
                        app.set_error(format!("{e:#}"));
                    }
                }
                Event::Resize(width, height) => {
                    app.resize(Rect::new(0, 0, width, height), Instant::now())
                }
                _ => {}
            }
        }

        if app.should_quit {
            info!("dashboard closed");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CounterId;
    use ratatui::backend::TestBackend;

    fn config(export_dir: std::path::PathBuf) -> AppConfig {
        AppConfig::from_show_command(Period::ThirtyDays, Some(export_dir), 20, None)
    }

    fn wide() -> Rect {
        Rect::new(0, 0, 140, 40)
    }

    fn press(app: &mut App, key: KeyCode, now: Instant) {
        app.handle_input(key, KeyModifiers::NONE, now).unwrap();
    }

    #[test]
    fn test_number_keys_select_period() {
        let now = Instant::now();
        let mut app = App::new(config(".".into()), wide(), now);

        press(&mut app, KeyCode::Char('1'), now);
        assert_eq!(app.dashboard.period(), Period::SevenDays);
        press(&mut app, KeyCode::Char('3'), now);
        assert_eq!(app.dashboard.period(), Period::NinetyDays);

        // Out of range digits are ignored
        press(&mut app, KeyCode::Char('7'), now);
        assert_eq!(app.dashboard.period(), Period::NinetyDays);
    }

    #[test]
    fn test_arrow_keys_cycle_period() {
        let now = Instant::now();
        let mut app = App::new(config(".".into()), wide(), now);

        press(&mut app, KeyCode::Right, now);
        assert_eq!(app.dashboard.period(), Period::NinetyDays);
        press(&mut app, KeyCode::Right, now);
        assert_eq!(app.dashboard.period(), Period::SevenDays);
        press(&mut app, KeyCode::Left, now);
        assert_eq!(app.dashboard.period(), Period::NinetyDays);
    }

    #[test]
    fn test_help_blocks_commands() {
        let now = Instant::now();
        let mut app = App::new(config(".".into()), wide(), now);

        press(&mut app, KeyCode::Char('?'), now);
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('1'), now);
        assert_eq!(app.dashboard.period(), Period::ThirtyDays);
        press(&mut app, KeyCode::Esc, now);
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit() {
        let now = Instant::now();
        let mut app = App::new(config(".".into()), wide(), now);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_export_key_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let now = Instant::now();
        let mut app = App::new(config(tmp.path().to_path_buf()), wide(), now);

        press(&mut app, KeyCode::Char('e'), now);
        let message = app.status_message.clone().unwrap();
        assert!(message.starts_with("Exported to "));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_export_failure_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let now = Instant::now();
        let mut app = App::new(config(file.path().to_path_buf()), wide(), now);

        let result = app.handle_input(KeyCode::Char('e'), KeyModifiers::NONE, now);
        assert!(result.is_err());
    }

    #[test]
    fn test_refresh_then_tick_updates_status() {
        let now = Instant::now();
        let mut app = App::new(config(".".into()), wide(), now);

        press(&mut app, KeyCode::Char('r'), now);
        assert_eq!(app.status_message.as_deref(), Some("Refreshing..."));
        app.tick(now + Duration::from_millis(1000));
        assert_eq!(app.status_message.as_deref(), Some("Data refreshed"));
        assert_eq!(app.dashboard.board().text(CounterId::Orders), Some("0"));
    }

    #[test]
    fn test_resize_remounts_category() {
        let now = Instant::now();
        let mut app = App::new(config(".".into()), Rect::new(0, 0, 90, 40), now);
        assert!(app.dashboard.charts().category().is_none());

        app.resize(wide(), now);
        assert!(app.dashboard.charts().category().is_some());
    }

    #[test]
    fn test_widening_fills_new_cards() {
        let now = Instant::now();
        let mut app = App::new(config(".".into()), Rect::new(0, 0, 40, 30), now);
        app.tick(now + Duration::from_secs(3));
        assert!(app.dashboard.board().text(CounterId::Customers).is_none());

        let widened_at = now + Duration::from_secs(4);
        app.resize(wide(), widened_at);
        app.tick(widened_at + Duration::from_secs(3));
        assert_eq!(app.dashboard.board().text(CounterId::Orders), Some("1,247"));
        assert_eq!(app.dashboard.board().text(CounterId::Customers), Some("856"));
    }

    #[test]
    fn test_render_shows_final_counters() {
        let now = Instant::now();
        let mut app = App::new(config(".".into()), wide(), now);
        app.tick(now + Duration::from_secs(3));

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("$284,562.45"));
        assert!(text.contains("1,247"));
        assert!(text.contains("Sales Trend (30D)"));
        assert!(text.contains("Sales by Category"));
    }

    #[test]
    fn test_help_overlay_shows_dashboard_state() {
        let now = Instant::now();
        let mut app = App::new(config("/srv/reports".into()), wide(), now);
        press(&mut app, KeyCode::Char('3'), now);
        app.tick(now + Duration::from_secs(3));
        press(&mut app, KeyCode::Char('h'), now + Duration::from_secs(3));

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Help"));
        assert!(text.contains("90D"));
        assert!(text.contains("/srv/reports"));
        assert!(text.contains("settled"));
    }
}

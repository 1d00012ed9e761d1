use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::models::{ProgressSummary, User};
use crate::progress::ProgressTracker;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{achievements, activity, header, history, stat_cards, statusbar};
use crate::utils::format::plural;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Month,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub tracker: ProgressTracker,
    pub should_quit: bool,
    pub status: Option<String>,
    pub today: NaiveDate,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            view: View::Dashboard,
            config,
            tracker: ProgressTracker::new(),
            should_quit: false,
            status: None,
            today: Local::now().date_naive(),
        }
    }

    pub fn load(&mut self, conn: &Connection, user: User) -> Result<()> {
        self.tracker.sign_in(conn, user)?;
        Ok(())
    }

    fn refresh(&mut self, conn: &Connection) {
        self.today = Local::now().date_naive();
        self.status = match self.tracker.refresh(conn) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("Dashboard refresh failed: {}", e);
                Some(format!("Refresh failed: {}", e))
            }
        };
    }

    /// Picks up a new calendar day when the dashboard is left open overnight.
    pub fn tick(&mut self) {
        self.today = Local::now().date_naive();
    }

    pub fn handle_key(&mut self, key: KeyEvent, conn: &Connection) {
        match self.view {
            View::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                    self.view = View::Dashboard;
                }
            }
            View::Dashboard | View::Month => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') => self.view = View::Help,
                KeyCode::Char('m') => {
                    self.view = if self.view == View::Month {
                        View::Dashboard
                    } else {
                        View::Month
                    };
                }
                KeyCode::Char('r') => self.refresh(conn),
                _ => {}
            },
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let summary = self.tracker.summary(self.today);
        let info = header::HeaderInfo {
            username: self
                .tracker
                .user()
                .map(|u| u.username.as_str())
                .unwrap_or("signed out"),
            view_title: match self.view {
                View::Month => "Monthly activity",
                _ => "Progress dashboard",
            },
            today: self.today,
            week_total: summary.week_total(),
            loaded_at: self.tracker.loaded_at(),
        };
        header::render(frame, outer[0], &info);
        statusbar::render(
            frame,
            outer[2],
            self.view == View::Month,
            self.status.as_deref(),
        );

        match self.view {
            View::Dashboard => self.draw_dashboard(frame, outer[1], &summary),
            View::Month => self.draw_month(frame, outer[1]),
            View::Help => {
                self.draw_dashboard(frame, outer[1], &summary);
                self.draw_help_overlay(frame);
            }
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame, body: Rect, summary: &ProgressSummary) {
        let calories = self
            .tracker
            .estimated_calories(self.config.progress.calories_per_minute);

        let history_rows = u16::try_from(self.config.progress.history_limit)
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // stat cards
                Constraint::Min(9),    // graph + achievements
                Constraint::Length(history_rows),
            ])
            .split(body);

        stat_cards::render(frame, rows[0], &summary.stats, calories);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        activity::render_week(frame, middle[0], &summary.mini_graph);
        achievements::render(frame, middle[1], self.tracker.achievements());
        history::render(
            frame,
            rows[2],
            self.tracker.recent(self.config.progress.history_limit),
        );
    }

    fn draw_month(&self, frame: &mut Frame, body: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)])
            .split(body);

        let buckets = self.tracker.month_chart(self.today);
        let label = self.today.format("%B %Y").to_string();
        activity::render_month(frame, rows[0], &buckets, &label);

        let active_days = buckets.iter().filter(|b| b.exercise_count > 0).count();
        let longest = self.tracker.max_consecutive_days();
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("  Active days: ", theme::dim()),
            Span::styled(plural(active_days, "day"), theme::green()),
            Span::styled("    Longest streak: ", theme::dim()),
            Span::styled(plural(longest as usize, "day"), theme::accent()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme::border(false))
                .style(theme::surface()),
        );
        frame.render_widget(footer, rows[1]);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).max(9),
        }
        .intersection(area);

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [m]    ", "Toggle week / month view"),
            ("  [r]    ", "Reload from the database"),
            ("  [?]    ", "Toggle help"),
            ("  [Esc]  ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(key, theme::accent()),
                Span::styled(label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(true))
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }
}

/// Run the dashboard event loop for `user`.
pub fn run(conn: Connection, config: AppConfig, user: User) -> Result<()> {
    let mut app = App::new(config);
    app.load(&conn, user)?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(1000);

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key, &conn);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                Event::Resize => {}
                Event::Tick => app.tick(),
            }
        }
    })();

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_test_db;
    use crate::db::repository::UserRepo;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app(conn: &Connection) -> App {
        let user = UserRepo::create(conn, "dana").unwrap();
        let mut app = App::new(AppConfig::default());
        app.load(conn, user).unwrap();
        app
    }

    #[test]
    fn view_toggles() {
        let conn = open_test_db();
        let mut app = loaded_app(&conn);

        app.handle_key(key(KeyCode::Char('m')), &conn);
        assert_eq!(app.view, View::Month);
        app.handle_key(key(KeyCode::Char('m')), &conn);
        assert_eq!(app.view, View::Dashboard);

        app.handle_key(key(KeyCode::Char('?')), &conn);
        assert_eq!(app.view, View::Help);
        // Esc closes help rather than quitting
        app.handle_key(key(KeyCode::Esc), &conn);
        assert_eq!(app.view, View::Dashboard);
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Esc), &conn);
        assert!(app.should_quit);
    }

    #[test]
    fn refresh_keeps_user_loaded() {
        let conn = open_test_db();
        let mut app = loaded_app(&conn);
        app.handle_key(key(KeyCode::Char('r')), &conn);
        assert!(app.status.is_none());
        assert!(app.tracker.is_loaded());
    }

    #[test]
    fn draws_every_view_on_a_small_terminal() {
        let conn = open_test_db();
        let mut app = loaded_app(&conn);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        for view in [View::Dashboard, View::Month, View::Help] {
            app.view = view;
            terminal.draw(|frame| app.draw(frame)).unwrap();
        }
    }

    #[test]
    fn huge_history_limit_still_draws() {
        let conn = open_test_db();
        let mut app = loaded_app(&conn);
        app.config.progress.history_limit = usize::MAX;
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        app.config.progress.history_limit = 65_534;
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }
}

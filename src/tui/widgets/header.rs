use chrono::{DateTime, Local, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

pub struct HeaderInfo<'a> {
    pub username: &'a str,
    pub view_title: &'a str,
    pub today: NaiveDate,
    pub week_total: u32,
    pub loaded_at: Option<DateTime<Local>>,
}

pub fn render(frame: &mut Frame, area: Rect, info: &HeaderInfo) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(true))
        .style(theme::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = vec![
        Line::from(vec![
            Span::styled(" ♥ fitpulse", theme::accent().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", info.view_title), theme::dim()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" ", theme::dim()),
            Span::styled(info.username, theme::bold()),
            Span::styled(
                format!("  ·  {} exercises this week", info.week_total),
                theme::amber(),
            ),
        ]),
    ];

    let refreshed = match info.loaded_at {
        Some(at) => format!("refreshed {} ", at.format("%H:%M")),
        None => "not loaded ".to_string(),
    };
    let right = vec![
        Line::from(Span::styled(
            format!("{} ", info.today.format("%A, %b %-d, %Y")),
            theme::bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(refreshed, theme::dim())),
    ];

    frame.render_widget(Paragraph::new(left), halves[0]);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        halves[1],
    );
}

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Achievement;
use crate::progress::achievements::catalog;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, unlocked: &[Achievement]) {
    let rules = catalog();
    let block = Block::default()
        .title(Span::styled(
            format!(" Achievements {}/{} ", unlocked.len(), rules.len()),
            theme::accent(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let lines: Vec<Line> = rules
        .iter()
        .map(|rule| {
            let badge = &rule.achievement;
            let earned = unlocked.iter().any(|a| a.id == badge.id);
            if earned {
                Line::from(vec![
                    Span::styled("  ★ ", theme::amber()),
                    Span::styled(badge.name, theme::bold().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", badge.description), theme::dim()),
                ])
            } else {
                Line::from(vec![
                    Span::styled("  ☆ ", theme::dim()),
                    Span::styled(badge.name, theme::dim()),
                    Span::styled(format!("  {}", badge.description), theme::dim()),
                ])
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

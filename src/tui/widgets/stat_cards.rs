use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::ProgressStats;
use crate::tui::theme;
use crate::utils::format::{format_count, plural};

struct Card<'a> {
    title: &'a str,
    value: String,
    caption: String,
    style: Style,
}

/// Four cards in a row: streak, best day, total workouts, calories.
pub fn render(frame: &mut Frame, area: Rect, stats: &ProgressStats, calories: u32) {
    let best_value = if stats.best_day.count > 0 {
        stats.best_day.date.clone()
    } else {
        "—".to_string()
    };

    let cards = [
        Card {
            title: " Current Streak ",
            value: plural(stats.current_streak as usize, "day"),
            caption: "consecutive days".to_string(),
            style: theme::accent(),
        },
        Card {
            title: " Best Day ",
            value: best_value,
            caption: plural(stats.best_day.count as usize, "exercise"),
            style: theme::amber(),
        },
        Card {
            title: " Workouts ",
            value: stats.total_workouts.to_string(),
            caption: "completed".to_string(),
            style: theme::green(),
        },
        Card {
            title: " Calories ",
            value: format_count(calories),
            caption: "estimated kcal".to_string(),
            style: theme::blue(),
        },
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, col) in cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(Span::styled(card.title, card.style))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(false))
            .style(theme::surface());

        let text = vec![
            Line::from(Span::styled(
                card.value.as_str(),
                card.style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.caption.as_str(), theme::dim())),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *col);
    }
}

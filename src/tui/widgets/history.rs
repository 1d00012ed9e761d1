use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Completion;
use crate::tui::theme;
use crate::utils::format::{format_minutes, pad_to_width, plural};

const NAME_WIDTH: usize = 22;

pub fn render(frame: &mut Frame, area: Rect, recent: &[Completion]) {
    let block = Block::default()
        .title(Span::styled(" Recent Workouts ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    if recent.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Nothing logged yet. Try `fitpulse workout complete <id> --duration 30`",
                theme::dim(),
            )),
        ];
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let lines: Vec<Line> = recent
        .iter()
        .map(|c| {
            let difficulty = "●".repeat(c.difficulty_rating as usize);
            Line::from(vec![
                Span::styled(format!("  {:<14}", c.local_date_label()), theme::dim()),
                Span::styled(pad_to_width(&c.workout_name, NAME_WIDTH), theme::bold()),
                Span::styled(format!("{:>8}  ", format_minutes(c.duration_minutes)), theme::green()),
                Span::styled(format!("{:<12}", plural(c.exercises.len(), "exercise")), theme::dim()),
                Span::styled(difficulty, theme::amber()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

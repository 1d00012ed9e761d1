use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, month_view: bool, status: Option<&str>) {
    if let Some(message) = status {
        let paragraph = Paragraph::new(Span::styled(message, theme::amber()))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let view_label = if month_view { " week  " } else { " month  " };
    let hints = [
        ("[m]", view_label),
        ("[r]", " refresh  "),
        ("[?]", " help  "),
        ("[Esc]", " quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, theme::accent()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

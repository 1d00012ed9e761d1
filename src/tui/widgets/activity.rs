use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{DayBucket, MiniGraphPoint};
use crate::tui::theme;

fn chart_block(title: String) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface())
}

/// Exercises completed on each of the last seven days.
pub fn render_week(frame: &mut Frame, area: Rect, points: &[MiniGraphPoint]) {
    let total: u32 = points.iter().map(|p| p.count).sum();
    let block = chart_block(format!(" This Week · {} exercises ", total));

    if total == 0 {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No exercises logged in the last 7 days",
                theme::dim(),
            )),
        ];
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.count as u64)
                .label(Line::from(p.day.clone()))
                .style(if p.count > 0 { theme::bar() } else { theme::bar_empty() })
                .value_style(theme::bold().add_modifier(Modifier::REVERSED))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / 7).saturating_sub(1).clamp(1, 9);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .label_style(theme::dim());
    frame.render_widget(chart, area);
}

/// One thin bar per day of the current month.
pub fn render_month(frame: &mut Frame, area: Rect, buckets: &[DayBucket], month_label: &str) {
    let total: u32 = buckets.iter().map(|b| b.exercise_count).sum();
    let block = chart_block(format!(" {} · {} exercises ", month_label, total));

    let bars: Vec<Bar> = buckets
        .iter()
        .map(|b| {
            let day = b.date.day();
            // Label every fifth day so the axis stays readable.
            let label = if day % 5 == 1 { day.to_string() } else { String::new() };
            Bar::default()
                .value(b.exercise_count as u64)
                .label(Line::from(label))
                .text_value(String::new())
                .style(theme::bar())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1)
        .label_style(theme::dim());
    frame.render_widget(chart, area);
}

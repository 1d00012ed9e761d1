use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(14, 16, 20);
pub const SURFACE: Color = Color::Rgb(22, 26, 32);
pub const BORDER: Color = Color::Rgb(44, 52, 62);
pub const BORDER_FOCUS: Color = Color::Rgb(255, 112, 67);
pub const TEXT: Color = Color::Rgb(220, 226, 232);
pub const TEXT_DIM: Color = Color::Rgb(110, 122, 136);
pub const ACCENT: Color = Color::Rgb(255, 112, 67);
pub const GREEN: Color = Color::Rgb(76, 175, 80);
pub const AMBER: Color = Color::Rgb(255, 183, 77);
pub const RED: Color = Color::Rgb(229, 83, 75);
pub const BLUE: Color = Color::Rgb(79, 156, 229);
pub const BAR: Color = Color::Rgb(255, 138, 101);
pub const EMPTY: Color = Color::Rgb(34, 40, 48);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn blue() -> Style {
    Style::default().fg(BLUE)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn bar() -> Style {
    Style::default().fg(BAR).bg(SURFACE)
}

pub fn bar_empty() -> Style {
    Style::default().fg(EMPTY).bg(SURFACE)
}

use unicode_width::UnicodeWidthStr;

/// Format a duration in minutes to "Xh Ym" or "Ym"
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Thousands separated: 12500 -> "12,500"
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// "3 x 12", with the load appended when one was logged
pub fn format_prescription(sets: i32, reps: i32, weight: Option<f64>) -> String {
    match weight {
        Some(w) if w == w.floor() => format!("{} x {} @ {}kg", sets, reps, w as i64),
        Some(w) => format!("{} x {} @ {:.1}kg", sets, reps, w),
        None => format!("{} x {}", sets, reps),
    }
}

/// Pad to a display width, truncating with an ellipsis when too long.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current <= width {
        return format!("{}{}", s, " ".repeat(width - current));
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(95), "1h 35m");
    }

    #[test]
    fn counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12500), "12,500");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn prescriptions() {
        assert_eq!(format_prescription(3, 12, None), "3 x 12");
        assert_eq!(format_prescription(4, 8, Some(60.0)), "4 x 8 @ 60kg");
        assert_eq!(format_prescription(4, 8, Some(22.5)), "4 x 8 @ 22.5kg");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
        assert_eq!(UnicodeWidthStr::width(pad_to_width("日本語", 8).as_str()), 8);
        let cut = pad_to_width("Romanian Deadlifts", 10);
        assert_eq!(UnicodeWidthStr::width(cut.as_str()), 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn bars() {
        assert_eq!(progress_bar(0, 0, 4), "░░░░");
        assert_eq!(progress_bar(2, 4, 4), "██░░");
        assert_eq!(progress_bar(9, 4, 4), "████");
    }

    #[test]
    fn plurals() {
        assert_eq!(plural(1, "workout"), "1 workout");
        assert_eq!(plural(3, "workout"), "3 workouts");
    }
}

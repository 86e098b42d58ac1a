/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Days-remaining color:
/// \<0 → grey (already passed)
/// 0 → green (today)
/// 1..=7 → yellow (this week)
/// later → reset
pub fn color_for_days(days: i64) -> &'static str {
    match days {
        d if d < 0 => GREY,
        0 => GREEN,
        1..=7 => YELLOW,
        _ => RESET,
    }
}

/// Grey placeholder for empty optional fields.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_colors() {
        assert_eq!(color_for_days(-1), GREY);
        assert_eq!(color_for_days(0), GREEN);
        assert_eq!(color_for_days(7), YELLOW);
        assert_eq!(color_for_days(8), RESET);
    }

    #[test]
    fn optional_placeholder() {
        assert_eq!(colorize_optional(Some("cake.png")), "cake.png");
        assert_eq!(colorize_optional(None), format!("{GREY}--{RESET}"));
    }
}

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// GREY for an all-zero `HH:MM` total, RESET otherwise.
pub fn color_for_total(value: &str) -> &'static str {
    if value.trim() == "00:00" { GREY } else { RESET }
}

pub fn colorize_total(value: &str) -> String {
    format!("{}{value}{RESET}", color_for_total(value))
}

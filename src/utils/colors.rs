/// ANSI color helper utilities for terminal output.
use crate::models::Category;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Closest terminal colour to the category's legend colour.
pub fn color_for_category(c: Category) -> &'static str {
    match c {
        Category::Calendar => BLUE,
        Category::Ops => RED,
        Category::Sprint => GREEN,
        Category::Extra => YELLOW,
        Category::Unknown => GREY,
    }
}

pub fn colorize_category(c: Category) -> String {
    format!("{}{}{}", color_for_category(c), c, RESET)
}

/// Greyed-out text for rows without visible bars.
pub fn colorize_muted(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}

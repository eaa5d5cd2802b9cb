// src/ui.rs

use crate::{constants::FALLBACK_TERM_WIDTH, models::AppInfo};
use dialoguer::console::Term;

/// Detected terminal width in columns, or [`FALLBACK_TERM_WIDTH`] when the
/// output is not attached to a terminal.
fn term_width() -> usize {
    Term::stdout()
        .size_checked()
        .map_or(FALLBACK_TERM_WIDTH, |(_rows, cols)| cols as usize)
}

/// Centers ` text ` in `width` columns, padding with `fill`. Odd leftover
/// padding goes to the right.
fn center(text: &str, fill: char, width: usize) -> String {
    let padded = if text.is_empty() {
        String::new()
    } else {
        format!(" {text} ")
    };
    let len = padded.chars().count();
    if len >= width {
        return padded;
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut line = String::with_capacity(width + padded.len());
    line.extend(std::iter::repeat_n(fill, left));
    line.push_str(&padded);
    line.extend(std::iter::repeat_n(fill, right));
    line
}

/// Prints `text` centered in a full-width separator line of `fill` chars.
/// An empty `text` yields a plain rule; a `' '` fill yields centered text
/// with no rule.
pub fn separator(text: &str, fill: char) {
    println!("{}", center(text, fill, term_width()));
}

/// Full-width rule of dashes.
pub fn rule() {
    separator("", '-');
}

pub fn start_banner(info: &AppInfo) {
    separator("", '*');
    separator(
        &format!("{} {} | Author: {}", info.name, info.version, info.author),
        '=',
    );
    separator(info.description, ' ');
    rule();
}

pub fn end_banner(info: &AppInfo) {
    separator("Program completed", '-');
    separator(info.donate, '-');
    separator(info.paypal, '-');
    separator(info.copyright, '=');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_plain_rule() {
        assert_eq!(center("", '-', 10), "----------");
    }

    #[test]
    fn test_center_text_extra_padding_goes_right() {
        // " ab " is 4 wide; 5 columns remain: 2 left, 3 right.
        assert_eq!(center("ab", '*', 9), "** ab ***");
    }

    #[test]
    fn test_center_text_wider_than_terminal_is_not_truncated() {
        assert_eq!(center("abcdef", '-', 4), " abcdef ");
    }

    #[test]
    fn test_center_space_fill() {
        assert_eq!(center("hi", ' ', 8), "   hi   ");
    }
}

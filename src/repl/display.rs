//! # Display
//!
//! Color selection for the three kinds of console messages. A `Display` is a
//! small value: reconfiguring it returns a new one instead of mutating state
//! that other parts of the program may be holding.

use anyhow::{anyhow, Result};
use crossterm::style::{Color, Stylize};
use std::str::FromStr;

/// Colors an operator can choose for a message kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayColor {
    Red,
    Green,
    Blue,
}

impl DisplayColor {
    fn terminal_color(self) -> Color {
        // Bright variants, matching the classic 91/92/96 escape codes
        match self {
            DisplayColor::Red => Color::Red,
            DisplayColor::Green => Color::Green,
            DisplayColor::Blue => Color::Cyan,
        }
    }
}

impl FromStr for DisplayColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(DisplayColor::Red),
            "green" => Ok(DisplayColor::Green),
            "blue" => Ok(DisplayColor::Blue),
            other => Err(anyhow!("Unknown color '{other}' (expected red, green or blue)")),
        }
    }
}

/// The semantic kind of a console message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    General,
}

/// Per-instance color configuration for success, error and general output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display {
    success: DisplayColor,
    error: DisplayColor,
    general: DisplayColor,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            success: DisplayColor::Green,
            error: DisplayColor::Red,
            general: DisplayColor::Blue,
        }
    }
}

impl Display {
    /// Return a copy with the given colors replaced; `None` keeps the current one
    pub fn configure(
        self,
        success: Option<DisplayColor>,
        error: Option<DisplayColor>,
        general: Option<DisplayColor>,
    ) -> Self {
        Self {
            success: success.unwrap_or(self.success),
            error: error.unwrap_or(self.error),
            general: general.unwrap_or(self.general),
        }
    }

    pub fn success(&self) -> DisplayColor {
        self.success
    }

    pub fn error(&self) -> DisplayColor {
        self.error
    }

    pub fn general(&self) -> DisplayColor {
        self.general
    }

    pub fn color_for(&self, kind: MessageKind) -> DisplayColor {
        match kind {
            MessageKind::Success => self.success,
            MessageKind::Error => self.error,
            MessageKind::General => self.general,
        }
    }

    /// Wrap `text` in the escape sequences for the color of `kind`
    pub fn paint(&self, kind: MessageKind, text: &str) -> String {
        text.with(self.color_for(kind).terminal_color()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_display_should_use_green_red_blue() {
        let display = Display::default();
        assert_eq!(display.success(), DisplayColor::Green);
        assert_eq!(display.error(), DisplayColor::Red);
        assert_eq!(display.general(), DisplayColor::Blue);
    }

    #[test]
    fn configure_should_return_new_value_and_leave_original_untouched() {
        let original = Display::default();
        let configured =
            original.configure(Some(DisplayColor::Blue), None, Some(DisplayColor::Red));

        assert_eq!(configured.success(), DisplayColor::Blue);
        assert_eq!(configured.error(), DisplayColor::Red);
        assert_eq!(configured.general(), DisplayColor::Red);
        assert_eq!(original, Display::default());
    }

    #[test]
    fn paint_should_keep_text_and_add_escape_codes() {
        let painted = Display::default().paint(MessageKind::Error, "boom");
        assert!(painted.contains("boom"));
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(painted.starts_with('\u{1b}'));
            assert_ne!(painted, "boom");
        }
    }

    #[test]
    fn paint_should_differ_between_kinds_with_different_colors() {
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let display = Display::default();
        assert_ne!(
            display.paint(MessageKind::Success, "x"),
            display.paint(MessageKind::Error, "x")
        );
    }

    #[test]
    fn color_should_parse_case_insensitively() {
        assert_eq!("GREEN".parse::<DisplayColor>().unwrap(), DisplayColor::Green);
        assert_eq!(" blue ".parse::<DisplayColor>().unwrap(), DisplayColor::Blue);
        assert!("magenta".parse::<DisplayColor>().is_err());
    }
}

//! Text styling for human-readable output

use super::log_level::LogLevel;

/// Renders level labels and timestamps for terminal display
pub trait Styler: Send + Sync {
    /// Style a level label (bold plus the level's color)
    fn level(&self, level: LogLevel, text: &str) -> String;

    /// Style secondary text such as the timestamp
    fn dim(&self, text: &str) -> String;
}

/// Leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn level(&self, _level: LogLevel, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI styling via the `colored` crate
///
/// `colored` honors `NO_COLOR` and `CLICOLOR`/`CLICOLOR_FORCE`, so output
/// degrades to plain text when the environment asks for it.
#[cfg(feature = "console")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ColoredStyler;

#[cfg(feature = "console")]
impl Styler for ColoredStyler {
    fn level(&self, level: LogLevel, text: &str) -> String {
        use colored::Colorize;
        text.color(level.color()).bold().to_string()
    }

    fn dim(&self, text: &str) -> String {
        use colored::Colorize;
        text.dimmed().to_string()
    }
}

/// Styler used when none is configured explicitly
#[cfg(feature = "console")]
pub fn default_styler(use_colors: bool) -> Box<dyn Styler> {
    if use_colors {
        Box::new(ColoredStyler)
    } else {
        Box::new(PlainStyler)
    }
}

/// Styler used when none is configured explicitly
#[cfg(not(feature = "console"))]
pub fn default_styler(_use_colors: bool) -> Box<dyn Styler> {
    Box::new(PlainStyler)
}

use console::style;
use std::fmt;

/// Colour palette shared by both binaries.
pub struct Theme;

impl Theme {
    pub fn primary(text: impl fmt::Display) -> String {
        style(text).cyan().bold().to_string()
    }

    pub fn error(text: impl fmt::Display) -> String {
        style(text).red().bold().to_string()
    }

    /// Paths, commands and other metadata.
    pub fn muted(text: impl fmt::Display) -> String {
        style(text).dim().to_string()
    }
}

pub enum Icon {
    Check,
    Cross,
    Warn,
    Skip,
    Rocket,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Check => "✔",
            Icon::Cross => "✖",
            Icon::Warn => "▲",
            Icon::Skip => "○",
            Icon::Rocket => "🚀",
        };
        write!(f, "{}", icon)
    }
}

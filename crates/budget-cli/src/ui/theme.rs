//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

use budget_core::{Kind, Standing};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
            Self::Info => "[INFO]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",   // [✓]
            Self::Warn => "[\u{26A0}]", // [⚠]
            Self::Err => "[\u{2717}]",  // [✗]
            Self::Info => "[\u{2139}]", // [ℹ]
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::ok(),
            Self::Warn => styles::warn(),
            Self::Err => styles::err(),
            Self::Info => styles::info(),
        }
    }
}

/// Named styles used across the UI.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn ok() -> Style {
        Style::new().green()
    }

    pub fn warn() -> Style {
        Style::new().yellow()
    }

    pub fn err() -> Style {
        Style::new().red()
    }

    pub fn info() -> Style {
        Style::new().cyan()
    }

    pub fn income() -> Style {
        Style::new().green().bold()
    }

    pub fn expense() -> Style {
        Style::new().red().bold()
    }

    pub fn balance() -> Style {
        Style::new().blue().bold()
    }
}

/// Style for an entry kind (green income, red expense).
pub fn kind_style(kind: Kind) -> Style {
    match kind {
        Kind::Income => styles::income(),
        Kind::Expense => styles::expense(),
    }
}

/// Style for the balance card: blue in surplus, red in deficit.
pub fn standing_style(standing: Standing) -> Style {
    match standing {
        Standing::Surplus => styles::balance(),
        Standing::Deficit => styles::expense(),
    }
}

/// Arrow shown next to an entry kind.
pub fn kind_symbol(kind: Kind, unicode: bool) -> &'static str {
    match (kind, unicode) {
        (Kind::Income, true) => "\u{2191}",  // ↑
        (Kind::Expense, true) => "\u{2193}", // ↓
        (Kind::Income, false) => "+",
        (Kind::Expense, false) => "-",
    }
}

/// Apply a style when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

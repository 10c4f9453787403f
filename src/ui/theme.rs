//! Visual tokens for the rocdeploy CLI.
//!
//! Views never hard-code colors, icons or rule characters; they come from here.

use crossterm::style::Color;

/// A symbol and the plain-ASCII text used when the locale cannot show it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
}

impl Glyph {
    pub const fn new(unicode: &'static str, ascii: &'static str) -> Self {
        Self { unicode, ascii }
    }

    pub fn pick(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Semantic color of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Cyan,
            Tone::Dim => Color::DarkGrey,
        }
    }
}

pub mod glyphs {
    use super::Glyph;

    pub const SUCCESS: Glyph = Glyph::new("✓", "[OK]");
    pub const FAILURE: Glyph = Glyph::new("✗", "[FAIL]");
    pub const WARNING: Glyph = Glyph::new("⚠", "[WARN]");
    pub const SKIPPED: Glyph = Glyph::new("↳", "[>]");
    pub const DEPLOY: Glyph = Glyph::new("📦", "[DEPLOY]");
    pub const REMOTE: Glyph = Glyph::new("📡", "[REMOTE]");

    /// Repeated to open each controller's section
    pub const RULE: Glyph = Glyph::new("─", "-");
}

/// Rule characters before the controller name, e.g. `------------- ROC6`
pub const RULE_WIDTH: usize = 13;

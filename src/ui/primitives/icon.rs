use crossterm::style::Stylize;

use crate::ui::theme::{glyphs, Glyph, Tone};

/// Status markers printed at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skipped,
    Deploy,
    Remote,
}

impl Icon {
    fn glyph(self) -> Glyph {
        match self {
            Icon::Success => glyphs::SUCCESS,
            Icon::Error => glyphs::FAILURE,
            Icon::Warning => glyphs::WARNING,
            Icon::Skipped => glyphs::SKIPPED,
            Icon::Deploy => glyphs::DEPLOY,
            Icon::Remote => glyphs::REMOTE,
        }
    }

    fn tone(self) -> Tone {
        match self {
            Icon::Success => Tone::Success,
            Icon::Error => Tone::Error,
            Icon::Warning => Tone::Warning,
            Icon::Skipped => Tone::Dim,
            Icon::Deploy | Icon::Remote => Tone::Info,
        }
    }

    pub fn render(self, supports_unicode: bool) -> &'static str {
        self.glyph().pick(supports_unicode)
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        let symbol = self.render(supports_unicode);
        if supports_color {
            symbol.with(self.tone().color()).to_string()
        } else {
            symbol.to_string()
        }
    }
}

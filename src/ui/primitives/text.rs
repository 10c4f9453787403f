use crossterm::style::Stylize;

use crate::ui::theme::Tone;

/// Text tagged with a tone, styled only when the terminal allows color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Painted {
    text: String,
    tone: Tone,
    bold: bool,
}

impl Tone {
    pub fn paint(self, text: impl Into<String>) -> Painted {
        Painted {
            text: text.into(),
            tone: self,
            bold: false,
        }
    }
}

impl Painted {
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let styled = self.text.as_str().with(self.tone.color());
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

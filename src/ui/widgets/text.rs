use crate::ui::core::style::Color;
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{TextSpan, View};

/// Static, non-focusable text.
pub struct Text {
    text: String,
    fg: Color,
    bg: Color,
    id: Option<String>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: Color::White,
            bg: Color::Black,
            id: None,
        }
    }

    pub fn colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Control for Text {
    fn render(&self, _cx: &mut RenderCx<'_>) -> View {
        TextSpan::new(self.text.as_str())
            .fg(self.fg)
            .bg(self.bg)
            .into()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/text.rs"]
mod tests;

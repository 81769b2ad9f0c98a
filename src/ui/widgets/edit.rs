use crate::ui::core::input::{Event, Key};
use crate::ui::core::runtime::EventCx;
use crate::ui::core::style::Mod;
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{Horizontal, TextSpan, View};

/// Single-line text input.
///
/// The cursor is a character index in `0..=len`. Enter is turned into Tab
/// and left to bubble, so it advances to the next field.
pub struct Edit {
    value: String,
    cursor: usize,
    id: Option<String>,
}

impl Edit {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

impl Control for Edit {
    fn render(&self, cx: &mut RenderCx<'_>) -> View {
        if !cx.contains_focus() {
            return TextSpan::new(self.value.as_str()).into();
        }

        let at = self.byte_offset(self.cursor);
        let (before, rest) = self.value.split_at(at);
        let mut rest = rest.chars();
        let under = rest.next().unwrap_or(' ');
        Horizontal::new(vec![
            TextSpan::new(before).mods(Mod::UNDERLINE).into(),
            TextSpan::new(under.to_string()).mods(Mod::REVERSE).into(),
            TextSpan::new(rest.as_str()).mods(Mod::UNDERLINE).into(),
        ])
        .into()
    }

    fn on_event(&mut self, ev: &mut Event, _cx: &mut EventCx<'_>) {
        let Some(key) = ev.key_code() else {
            return;
        };

        match key {
            Key::LineStart => {
                self.cursor = 0;
                ev.stop();
            }
            Key::LineEnd => {
                self.cursor = self.len();
                ev.stop();
            }
            k if k.is_backspace() => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
                ev.stop();
            }
            Key::Delete => {
                if self.cursor < self.len() {
                    let at = self.byte_offset(self.cursor);
                    self.value.remove(at);
                }
                ev.stop();
            }
            Key::Left if self.cursor > 0 => {
                self.cursor -= 1;
                ev.stop();
            }
            Key::Right if self.cursor < self.len() => {
                self.cursor += 1;
                ev.stop();
            }
            k if k.is_enter() => {
                ev.key = Some(Key::Tab);
            }
            k => {
                if let Some(ch) = k.printable() {
                    let at = self.byte_offset(self.cursor);
                    self.value.insert(at, ch);
                    self.cursor += 1;
                    ev.stop();
                }
            }
        }
    }

    fn can_focus(&self) -> bool {
        true
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/edit.rs"]
mod tests;

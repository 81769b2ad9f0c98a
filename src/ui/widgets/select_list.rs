use std::rc::Rc;

use crate::ui::core::input::{Event, Key};
use crate::ui::core::runtime::EventCx;
use crate::ui::core::style::Mod;
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{TextSpan, Vertical, View};

pub const DEFAULT_WIDTH: u16 = 30;
pub const DEFAULT_HEIGHT: u16 = 10;

/// A scrolling single-selection list.
///
/// `height` rows are visible starting at `scroll_offset`; the selected row is
/// always inside that window.
pub struct SelectList {
    choices: Rc<[String]>,
    index: usize,
    width: u16,
    height: u16,
    scroll_offset: usize,
    id: Option<String>,
}

impl SelectList {
    pub fn new<I, S>(choices: I, index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        Self::from_shared(choices.into(), index)
    }

    /// Builds a list over choices shared with another control (a Combo).
    pub fn from_shared(choices: Rc<[String]>, index: usize) -> Self {
        assert!(
            choices.is_empty() || index < choices.len(),
            "SelectList index {index} out of range for {} choices",
            choices.len()
        );
        let mut list = Self {
            choices,
            index,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scroll_offset: 0,
            id: None,
        };
        list.reset_scroll();
        list
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        assert!(height > 0, "SelectList height must be at least 1");
        self.width = width;
        self.height = height;
        self.reset_scroll();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> Option<&str> {
        self.choices.get(self.index).map(String::as_str)
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn reset_scroll(&mut self) {
        let height = usize::from(self.height);
        self.scroll_offset = self.index.min(self.choices.len().saturating_sub(height));
    }
}

impl Control for SelectList {
    fn render(&self, _cx: &mut RenderCx<'_>) -> View {
        let height = usize::from(self.height);
        let rows: Vec<View> = (self.scroll_offset..self.scroll_offset + height)
            .map(|i| {
                let text = self.choices.get(i).map(String::as_str).unwrap_or("");
                let mods = if i == self.index {
                    Mod::STANDOUT
                } else {
                    Mod::NONE
                };
                TextSpan::new(text).min_width(self.width).mods(mods).into()
            })
            .collect();
        Vertical::new(rows).into()
    }

    fn on_event(&mut self, ev: &mut Event, _cx: &mut EventCx<'_>) {
        match ev.key_code() {
            Some(Key::Up) if self.index > 0 => {
                self.index -= 1;
                self.scroll_offset = self.scroll_offset.min(self.index);
                ev.stop();
            }
            Some(Key::Down) if self.index + 1 < self.choices.len() => {
                self.index += 1;
                let first_visible = (self.index + 1).saturating_sub(usize::from(self.height));
                self.scroll_offset = self.scroll_offset.max(first_visible);
                ev.stop();
            }
            _ => {}
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
#[path = "../../../tests/unit/ui/widgets/select_list.rs"]
mod tests;

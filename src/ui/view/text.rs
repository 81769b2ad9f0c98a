use std::cell::Cell;
use std::rc::Rc;

use unicode_width::UnicodeWidthStr;

use super::{clamp_u16, Layout};
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::{Rect, Size};
use crate::ui::core::style::{Color, Mod};

/// Shared slot a view writes its paint rectangle into.
///
/// Controls keep a clone to learn where they were last drawn (popups anchor
/// to it). Empty until the first paint.
#[derive(Clone, Debug, Default)]
pub struct PaintedRect(Rc<Cell<Option<Rect>>>);

impl PaintedRect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Rect> {
        self.0.get()
    }

    fn set(&self, rect: Rect) {
        self.0.set(Some(rect));
    }
}

/// One line of text, padded with spaces up to `min_width`.
#[derive(Debug, Clone)]
pub struct TextSpan {
    text: String,
    min_width: u16,
    fg: Color,
    bg: Color,
    mods: Mod,
    painted: Option<PaintedRect>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            min_width: 0,
            fg: Color::White,
            bg: Color::Black,
            mods: Mod::NONE,
            painted: None,
        }
    }

    pub fn min_width(mut self, w: u16) -> Self {
        self.min_width = w;
        self
    }

    pub fn fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    pub fn bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub fn mods(mut self, mods: Mod) -> Self {
        self.mods = mods;
        self
    }

    pub fn record_rect(mut self, slot: PaintedRect) -> Self {
        self.painted = Some(slot);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn width(&self) -> u16 {
        clamp_u16(self.text.width() as u32).max(self.min_width)
    }
}

impl Layout for TextSpan {
    fn measure(&self, _rect: Rect) -> Size {
        Size::new(self.width(), 1)
    }

    fn paint(&self, rect: Rect, canvas: &mut Canvas<'_>) {
        if let Some(slot) = &self.painted {
            slot.set(rect);
        }
        if rect.is_empty() {
            return;
        }

        let pad = usize::from(self.min_width).saturating_sub(self.text.width());
        let mut line = String::with_capacity(self.text.len() + pad);
        line.push_str(&self.text);
        line.extend(std::iter::repeat(' ').take(pad));
        canvas.text(rect, &line, self.fg, self.bg, self.mods);
    }
}

/// Repeats a character across the full width it is given.
#[derive(Debug, Clone)]
pub struct Fill {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Fill {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            fg: Color::White,
            bg: Color::Black,
        }
    }

    pub fn colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }
}

impl Layout for Fill {
    fn measure(&self, rect: Rect) -> Size {
        Size::new(rect.w, 1)
    }

    fn paint(&self, rect: Rect, canvas: &mut Canvas<'_>) {
        canvas.fill(rect, self.ch, self.fg, self.bg);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/view/text.rs"]
mod tests;

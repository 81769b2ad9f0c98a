//! Paint target handed to views.
//!
//! A `Canvas` is the "surface handle" geometry is drawn against: it knows the
//! full screen rectangle, resolves palette colors into pair slots and records
//! paint commands. Nothing here talks to a terminal.

use super::color::ColorCache;
use super::geom::{Pos, Rect};
use super::painter::Painter;
use super::style::{Color, ColorPair, Mod, Style};

pub struct Canvas<'a> {
    painter: &'a mut Painter,
    colors: &'a mut ColorCache,
    screen: Rect,
}

impl<'a> Canvas<'a> {
    pub fn new(painter: &'a mut Painter, colors: &'a mut ColorCache, screen: Rect) -> Self {
        Self {
            painter,
            colors,
            screen,
        }
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn color(&mut self, fg: Color, bg: Color) -> ColorPair {
        self.colors.get(fg, bg)
    }

    /// Writes one line of text at the origin of `rect`, clipped to `rect` and the screen.
    pub fn text(&mut self, rect: Rect, text: &str, fg: Color, bg: Color, mods: Mod) {
        let clip = Rect::new(rect.x, rect.y, rect.w, rect.h.min(1)).intersect(self.screen);
        if clip.is_empty() {
            return;
        }
        let style = Style::new(self.color(fg, bg), mods);
        self.painter
            .text_clipped(Pos::new(rect.x, rect.y), text, style, clip);
    }

    /// Repeats `ch` across the first row of `rect`.
    pub fn fill(&mut self, rect: Rect, ch: char, fg: Color, bg: Color) {
        let row = Rect::new(rect.x, rect.y, rect.w, rect.h.min(1)).intersect(self.screen);
        if row.is_empty() {
            return;
        }
        let style = Style::new(self.color(fg, bg), Mod::NONE);
        self.painter.hline(row.pos(), row.w, ch, style);
    }

    /// Erases a region back to blank default-colored cells.
    pub fn clear(&mut self, rect: Rect) {
        let rect = rect.intersect(self.screen);
        if rect.is_empty() {
            return;
        }
        self.painter.fill_rect(rect, Style::default());
    }

    pub fn border(&mut self, rect: Rect) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        self.painter.border(rect, Style::default());
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/canvas.rs"]
mod tests;

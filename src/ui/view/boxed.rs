use super::{Layout, View};
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::{Rect, Size};
use crate::ui::core::layout::Insets;

/// Columns between the left border and the caption.
pub const CAPTION_INSET: u16 = 3;

/// A one-cell border around an inner view, with an optional caption in the
/// top edge.
///
/// On each axis the box either claims the whole rectangle it is given
/// (`x_fill`/`y_fill`) or shrinks to the inner view plus border and margin.
pub struct Boxed {
    inner: Box<View>,
    caption: Option<Box<View>>,
    x_margin: u16,
    y_margin: u16,
    x_fill: bool,
    y_fill: bool,
}

impl Boxed {
    pub fn new(inner: impl Into<View>) -> Self {
        Self {
            inner: Box::new(inner.into()),
            caption: None,
            x_margin: 1,
            y_margin: 0,
            x_fill: true,
            y_fill: false,
        }
    }

    pub fn caption(mut self, caption: impl Into<View>) -> Self {
        self.caption = Some(Box::new(caption.into()));
        self
    }

    pub fn margins(mut self, x: u16, y: u16) -> Self {
        self.x_margin = x;
        self.y_margin = y;
        self
    }

    pub fn x_fill(mut self, fill: bool) -> Self {
        self.x_fill = fill;
        self
    }

    pub fn y_fill(mut self, fill: bool) -> Self {
        self.y_fill = fill;
        self
    }

    fn insets(&self) -> Insets {
        Insets::xy(self.x_margin.saturating_add(1), self.y_margin.saturating_add(1))
    }
}

impl Layout for Boxed {
    fn measure(&self, rect: Rect) -> Size {
        let insets = self.insets();
        let inner = if self.x_fill && self.y_fill {
            Size::default()
        } else {
            self.inner.measure(rect.inset(insets))
        };
        let w = if self.x_fill {
            rect.w
        } else {
            inner.w.saturating_add(insets.horizontal())
        };
        let h = if self.y_fill {
            rect.h
        } else {
            inner.h.saturating_add(insets.vertical())
        };
        Size::new(w, h)
    }

    fn paint(&self, rect: Rect, canvas: &mut Canvas<'_>) {
        let size = self.measure(rect);
        let frame = rect.clamp_size(size);
        if frame.is_empty() {
            return;
        }

        // Keep the bottom edge off the last screen row.
        let screen = canvas.screen();
        let last_row = screen.bottom().saturating_sub(2);
        let bottom = (frame.bottom() - 1).min(last_row);
        if bottom < frame.y {
            return;
        }
        let frame = Rect::new(frame.x, frame.y, frame.w, bottom - frame.y + 1);

        canvas.border(frame);
        if let Some(caption) = &self.caption {
            let area = Rect::new(
                frame.x.saturating_add(CAPTION_INSET),
                frame.y,
                frame.w.saturating_sub(CAPTION_INSET + 1),
                1,
            );
            caption.paint(area, canvas);
        }
        self.inner.paint(frame.inset(self.insets()), canvas);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/view/boxed.rs"]
mod tests;

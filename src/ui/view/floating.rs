use super::{Layout, View};
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::{Pos, Rect, Size};

/// Paints its inner view at an absolute screen position, erasing whatever
/// lies underneath first.
pub struct Floating {
    inner: Box<View>,
    pos: Option<Pos>,
}

impl Floating {
    pub fn new(inner: impl Into<View>) -> Self {
        Self {
            inner: Box::new(inner.into()),
            pos: None,
        }
    }

    pub fn at(mut self, pos: Pos) -> Self {
        self.pos = Some(pos);
        self
    }
}

impl Layout for Floating {
    fn measure(&self, rect: Rect) -> Size {
        self.inner.measure(rect)
    }

    fn paint(&self, rect: Rect, canvas: &mut Canvas<'_>) {
        let screen = canvas.screen();
        let origin = self.pos.unwrap_or_else(|| screen.pos());
        let avail = Rect::new(
            origin.x,
            origin.y,
            screen.right().saturating_sub(origin.x),
            screen.bottom().saturating_sub(origin.y),
        );
        let area = avail.clamp_size(self.measure(rect));
        canvas.clear(area);
        self.inner.paint(area, canvas);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/view/floating.rs"]
mod tests;

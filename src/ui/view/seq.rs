use super::{clamp_u16, Layout, View};
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::{Rect, Size};

/// Children laid out left to right with `margin` blank columns between them.
pub struct Horizontal {
    views: Vec<View>,
    margin: u16,
}

impl Horizontal {
    pub fn new(views: Vec<View>) -> Self {
        Self { views, margin: 0 }
    }

    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }
}

impl Layout for Horizontal {
    fn measure(&self, rect: Rect) -> Size {
        let mut w = 0u32;
        let mut h = 0u16;
        let mut r = rect;
        for (i, view) in self.views.iter().enumerate() {
            if i > 0 {
                w += u32::from(self.margin);
                r = r.offset(self.margin, 0);
            }
            let size = view.measure(r);
            w += u32::from(size.w);
            h = h.max(size.h);
            r = r.offset(size.w, 0);
        }
        Size::new(clamp_u16(w), h)
    }

    fn paint(&self, rect: Rect, canvas: &mut Canvas<'_>) {
        let mut r = rect;
        for (i, view) in self.views.iter().enumerate() {
            if i > 0 {
                r = r.offset(self.margin, 0);
            }
            let size = view.measure(r);
            view.paint(r, canvas);
            r = r.offset(size.w, 0);
        }
    }
}

/// Children stacked top to bottom with `margin` blank rows between them.
pub struct Vertical {
    views: Vec<View>,
    margin: u16,
}

impl Vertical {
    pub fn new(views: Vec<View>) -> Self {
        Self { views, margin: 0 }
    }

    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }
}

impl Layout for Vertical {
    fn measure(&self, rect: Rect) -> Size {
        let mut w = 0u16;
        let mut h = 0u32;
        let mut r = rect;
        for (i, view) in self.views.iter().enumerate() {
            if i > 0 {
                h += u32::from(self.margin);
                r = r.offset(0, self.margin);
            }
            let size = view.measure(r);
            w = w.max(size.w);
            h += u32::from(size.h);
            r = r.offset(0, size.h);
        }
        Size::new(w, clamp_u16(h))
    }

    fn paint(&self, rect: Rect, canvas: &mut Canvas<'_>) {
        let mut r = rect;
        for (i, view) in self.views.iter().enumerate() {
            if i > 0 {
                r = r.offset(0, self.margin);
            }
            let size = view.measure(r);
            view.paint(r, canvas);
            r = r.offset(0, size.h);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/view/seq.rs"]
mod tests;

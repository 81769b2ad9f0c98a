use super::geom::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Insets {
    pub const fn xy(x: u16, y: u16) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }

    pub const fn horizontal(&self) -> u16 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> u16 {
        self.top + self.bottom
    }
}

impl Rect {
    pub fn inset(self, insets: Insets) -> Self {
        self.adj(insets.left, insets.top, insets.right, insets.bottom)
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;

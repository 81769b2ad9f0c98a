#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Desired footprint of a view, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub w: u16,
    pub h: u16,
}

impl Size {
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Moves the origin by `(dx, dy)` and gives up the same amount of width/height.
    pub fn offset(self, dx: u16, dy: u16) -> Self {
        self.adj(dx, dy, 0, 0)
    }

    /// Moves the origin by `(dx, dy)` and additionally trims `dw`/`dh` from the far edges.
    pub fn adj(self, dx: u16, dy: u16, dw: u16, dh: u16) -> Self {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.w.saturating_sub(dx.saturating_add(dw)),
            self.h.saturating_sub(dy.saturating_add(dh)),
        )
    }

    /// Same origin, size capped to `size`.
    pub fn clamp_size(self, size: Size) -> Self {
        Rect::new(self.x, self.y, self.w.min(size.w), self.h.min(size.h))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;

//! Disposable layout trees produced by `Control::render`.
//!
//! A view answers two questions: how much room it wants inside a rectangle
//! (`measure`) and how to draw itself there (`paint`). Views are rebuilt every
//! frame and dropped after painting.

mod boxed;
mod floating;
mod grid;
mod seq;
mod text;

pub use boxed::Boxed;
pub use floating::Floating;
pub use grid::Grid;
pub use seq::{Horizontal, Vertical};
pub use text::{Fill, PaintedRect, TextSpan};

use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::{Rect, Size};

pub trait Layout {
    fn measure(&self, rect: Rect) -> Size;
    fn paint(&self, rect: Rect, canvas: &mut Canvas<'_>);
}

pub enum View {
    Text(TextSpan),
    Fill(Fill),
    Horizontal(Horizontal),
    Vertical(Vertical),
    Grid(Grid),
    Boxed(Boxed),
    Floating(Floating),
}

impl View {
    pub fn text(text: impl Into<String>) -> Self {
        View::Text(TextSpan::new(text))
    }

    fn as_layout(&self) -> &dyn Layout {
        match self {
            View::Text(v) => v,
            View::Fill(v) => v,
            View::Horizontal(v) => v,
            View::Vertical(v) => v,
            View::Grid(v) => v,
            View::Boxed(v) => v,
            View::Floating(v) => v,
        }
    }
}

impl Layout for View {
    fn measure(&self, rect: Rect) -> Size {
        self.as_layout().measure(rect)
    }

    fn paint(&self, rect: Rect, canvas: &mut Canvas<'_>) {
        self.as_layout().paint(rect, canvas)
    }
}

macro_rules! impl_into_view {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for View {
            fn from(v: $ty) -> Self {
                View::$variant(v)
            }
        })*
    };
}

impl_into_view! {
    TextSpan => Text,
    Fill => Fill,
    Horizontal => Horizontal,
    Vertical => Vertical,
    Grid => Grid,
    Boxed => Boxed,
    Floating => Floating,
}

fn clamp_u16(v: u32) -> u16 {
    v.min(u16::MAX as u32) as u16
}

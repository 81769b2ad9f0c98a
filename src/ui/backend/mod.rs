//! Rendering backends.
//!
//! The App only talks to the [`Backend`] trait, which keeps `ratatui` and
//! `crossterm` types out of the rest of the crate and lets tests run headless.

use std::io;

use crate::ui::core::geom::Rect;
use crate::ui::core::input::Input;
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, ColorPair};

pub trait Backend {
    /// Current surface size. Queried before every frame.
    fn size(&self) -> io::Result<Rect>;

    /// Binds palette slot `pair` to `(fg, bg)`. Slot 0 is never passed.
    fn init_pair(&mut self, pair: ColorPair, fg: Color, bg: Color);

    /// Replaces the surface contents with `cmds`, executed in order.
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) -> io::Result<()>;

    /// Blocks until one keystroke or a resize arrives.
    fn read_input(&mut self) -> io::Result<Input>;

    fn hide_cursor(&mut self) -> io::Result<()>;
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;

//! TUI integration layer (crossterm + ratatui).
//!
//! Everything that touches the real terminal lives here so the rest of the
//! crate builds and tests without one.

mod bootstrap;
pub mod crossterm;
pub mod session;

pub use bootstrap::{reduce_esc_delay, walk, walk_with_config};

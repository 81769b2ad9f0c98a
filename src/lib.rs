//! sailor - keyboard-driven form widgets for character-cell terminals
//!
//! Module layout:
//! - ui::core: geometry, styles, color cache, paint commands, input, control tree
//! - ui::view: measure-then-paint layout views
//! - ui::widgets: the stock controls (Edit, SelectList, Combo, ...)
//! - ui::layer / ui::app: modal layers, event bubbling and the run loop
//! - ui::backend: terminal (ratatui) and headless backends
//! - tui: terminal setup/teardown and the `walk` entry point

pub mod config;
pub mod error;
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;

pub use config::Config;
pub use error::{Result, UiError};
pub use ui::app::App;
pub use ui::core::widget::{Control, IntoControl};

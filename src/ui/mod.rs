//! UI layer.
//!
//! Controls render into disposable views, views emit paint commands, and a
//! backend executes them. Only the backend module knows about `ratatui`.

pub mod app;
pub mod backend;
pub mod core;
pub mod layer;
pub mod view;
pub mod widgets;

pub mod canvas;
pub mod color;
pub mod geom;
pub mod input;
pub mod layout;
pub mod painter;
pub mod runtime;
pub mod style;
pub mod tree;
pub mod widget;

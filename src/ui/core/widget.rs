use std::any::Any;

use super::input::Event;
use super::runtime::EventCx;
use super::tree::ControlPath;
use crate::config::Config;
use crate::ui::view::View;

pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// An interactive element of a layer tree.
///
/// A control renders itself into a fresh [`View`] every frame and reacts to
/// events bubbling up from the focused descendant. Container controls expose
/// their children by index; the index sequence from the layer root is the
/// control's [`ControlPath`].
pub trait Control: AsAny {
    fn render(&self, cx: &mut RenderCx<'_>) -> View;

    fn children(&self) -> Vec<&dyn Control> {
        Vec::new()
    }

    fn child_mut(&mut self, _index: usize) -> Option<&mut dyn Control> {
        None
    }

    /// Leaves the event propagating unless the control consumed it.
    fn on_event(&mut self, _ev: &mut Event, _cx: &mut EventCx<'_>) {}

    fn can_focus(&self) -> bool {
        false
    }

    fn id(&self) -> Option<&str> {
        None
    }
}

pub trait IntoControl {
    fn boxed(self) -> Box<dyn Control>;
}

impl<T: Control + 'static> IntoControl for T {
    fn boxed(self) -> Box<dyn Control> {
        Box::new(self)
    }
}

/// Render-time view of the App: where the control sits and where focus is.
pub struct RenderCx<'a> {
    path: ControlPath,
    focused: Option<&'a ControlPath>,
    config: &'a Config,
}

impl<'a> RenderCx<'a> {
    /// `focused` is `None` for layers below the active one; nothing there
    /// renders as focused.
    pub fn new(focused: Option<&'a ControlPath>, config: &'a Config) -> Self {
        Self {
            path: ControlPath::root(),
            focused,
            config,
        }
    }

    pub fn path(&self) -> &ControlPath {
        &self.path
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn has_focus(&self) -> bool {
        self.focused == Some(&self.path)
    }

    /// True when the focused control is this control or one of its descendants.
    pub fn contains_focus(&self) -> bool {
        self.focused.is_some_and(|f| f.starts_with(&self.path))
    }

    pub fn render_child(&mut self, index: usize, child: &dyn Control) -> View {
        self.path.push(index);
        let view = child.render(self);
        self.path.pop();
        view
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/widget.rs"]
mod tests;

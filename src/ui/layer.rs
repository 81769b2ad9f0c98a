use crate::config::Config;
use crate::ui::core::tree::{self, ControlPath};
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::View;

/// One modal frame: a root control and the path of its focused control.
///
/// The focus path always resolves to a focusable control, or is the root
/// when nothing in the tree can take focus.
pub struct Layer {
    root: Box<dyn Control>,
    focused: ControlPath,
}

impl Layer {
    /// Focuses the first focusable control. No focus events are sent.
    pub fn new(root: Box<dyn Control>) -> Self {
        let focused = tree::first_focusable(root.as_ref()).unwrap_or_default();
        Self { root, focused }
    }

    pub fn root(&self) -> &dyn Control {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> &mut dyn Control {
        self.root.as_mut()
    }

    pub fn root_as<T: Control + 'static>(&self) -> Option<&T> {
        self.root().as_any().downcast_ref::<T>()
    }

    pub fn focused(&self) -> &ControlPath {
        &self.focused
    }

    pub fn focused_control(&self) -> Option<&dyn Control> {
        tree::resolve(self.root(), self.focused.indices())
    }

    /// Focuses the control at `path`, or its first focusable descendant.
    /// Returns false (focus unchanged) when there is nothing to focus there.
    pub fn focus(&mut self, path: &ControlPath) -> bool {
        let Some(node) = tree::resolve(self.root(), path.indices()) else {
            return false;
        };
        let Some(rel) = tree::first_focusable(node) else {
            return false;
        };
        self.focused = path.join(&rel);
        true
    }

    /// Re-anchors focus after the tree changed shape underneath it.
    pub(crate) fn revalidate(&mut self) {
        if !self.focused_control().is_some_and(|c| c.can_focus()) {
            self.focused = tree::first_focusable(self.root()).unwrap_or_default();
        }
    }

    /// Only the active layer renders focus; pass `active = false` for the rest.
    pub fn render(&self, active: bool, config: &Config) -> View {
        let mut cx = RenderCx::new(active.then_some(&self.focused), config);
        self.root.render(&mut cx)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/layer.rs"]
mod tests;

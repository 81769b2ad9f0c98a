use super::{child_of, children_of, cycle_focus};
use crate::ui::core::input::{Event, Key};
use crate::ui::core::runtime::EventCx;
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{Horizontal, View};

/// Controls side by side; Left/Right and Tab/Shift-Tab move between them.
pub struct Composite {
    controls: Vec<Box<dyn Control>>,
    margin: u16,
    id: Option<String>,
}

impl Composite {
    pub fn new(controls: Vec<Box<dyn Control>>) -> Self {
        assert!(!controls.is_empty(), "Composite needs at least one control");
        Self {
            controls,
            margin: 0,
            id: None,
        }
    }

    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Control for Composite {
    fn render(&self, cx: &mut RenderCx<'_>) -> View {
        let cells = self
            .controls
            .iter()
            .enumerate()
            .map(|(i, c)| cx.render_child(i, c.as_ref()))
            .collect();
        Horizontal::new(cells).margin(self.margin).into()
    }

    fn children(&self) -> Vec<&dyn Control> {
        children_of(&self.controls)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Control> {
        child_of(&mut self.controls, index)
    }

    fn on_event(&mut self, ev: &mut Event, cx: &mut EventCx<'_>) {
        match ev.key_code() {
            Some(Key::Left | Key::BackTab) => cycle_focus(&self.controls, true, ev, cx),
            Some(Key::Right | Key::Tab) => cycle_focus(&self.controls, false, ev, cx),
            _ => {}
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/composite.rs"]
mod tests;

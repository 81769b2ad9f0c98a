use super::{child_of, children_of, cycle_focus};
use crate::ui::core::input::{Event, Key};
use crate::ui::core::runtime::EventCx;
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{Boxed, TextSpan, Vertical, View};

/// A bordered column of controls.
///
/// Up/Down and Tab/Shift-Tab move focus between the direct children. When the
/// edge is reached the key keeps bubbling, so an enclosing panel (or the App)
/// gets to handle it.
pub struct Panel {
    controls: Vec<Box<dyn Control>>,
    caption: Option<String>,
    id: Option<String>,
}

impl Panel {
    pub fn new(controls: Vec<Box<dyn Control>>) -> Self {
        assert!(!controls.is_empty(), "Panel needs at least one control");
        Self {
            controls,
            caption: None,
            id: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Control for Panel {
    fn render(&self, cx: &mut RenderCx<'_>) -> View {
        let rows = self
            .controls
            .iter()
            .enumerate()
            .map(|(i, c)| cx.render_child(i, c.as_ref()))
            .collect();
        let mut frame = Boxed::new(Vertical::new(rows));
        if let Some(caption) = &self.caption {
            frame = frame.caption(TextSpan::new(caption.as_str()));
        }
        frame.into()
    }

    fn children(&self) -> Vec<&dyn Control> {
        children_of(&self.controls)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Control> {
        child_of(&mut self.controls, index)
    }

    fn on_event(&mut self, ev: &mut Event, cx: &mut EventCx<'_>) {
        match ev.key_code() {
            Some(Key::Up | Key::BackTab) => cycle_focus(&self.controls, true, ev, cx),
            Some(Key::Down | Key::Tab) => cycle_focus(&self.controls, false, ev, cx),
            _ => {}
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/panel.rs"]
mod tests;

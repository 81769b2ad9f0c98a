use crate::ui::core::style::{Color, Mod};
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{Horizontal, TextSpan, View};

/// A fixed-width label in front of a single control.
pub struct Labeled {
    label: String,
    control: Box<dyn Control>,
    id: Option<String>,
}

impl Labeled {
    pub fn new(label: impl Into<String>, control: impl Control + 'static) -> Self {
        Self {
            label: label.into(),
            control: Box::new(control),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Control for Labeled {
    fn render(&self, cx: &mut RenderCx<'_>) -> View {
        let mut label = TextSpan::new(self.label.as_str()).min_width(cx.config().label_width);
        label = if cx.contains_focus() {
            label.fg(Color::White).mods(Mod::BOLD)
        } else {
            label.fg(Color::Green)
        };
        let control = cx.render_child(0, self.control.as_ref());
        Horizontal::new(vec![label.into(), control]).into()
    }

    fn children(&self) -> Vec<&dyn Control> {
        vec![self.control.as_ref()]
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Control> {
        if index == 0 {
            Some(self.control.as_mut())
        } else {
            None
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/labeled.rs"]
mod tests;

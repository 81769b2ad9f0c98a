use crate::ui::core::geom::Pos;
use crate::ui::core::input::{Event, Key};
use crate::ui::core::runtime::EventCx;
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{Boxed, Floating, TextSpan, View};

type OnClose<C> = Box<dyn FnMut(bool, &C)>;

/// A boxed control floating at a fixed screen position, shown on its own
/// layer.
///
/// Enter accepts and Esc cancels; either way `on_close` runs with the outcome
/// and the inner control, then the layer is popped.
pub struct Popup<C: Control> {
    pos: Pos,
    inner: C,
    on_close: OnClose<C>,
    caption: Option<String>,
    id: Option<String>,
}

impl<C: Control + 'static> Popup<C> {
    pub fn new(pos: Pos, inner: C, on_close: impl FnMut(bool, &C) + 'static) -> Self {
        Self {
            pos,
            inner,
            on_close: Box::new(on_close),
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

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Pushes the popup as a new layer once the current event has been handled.
    pub fn show(self, cx: &mut EventCx<'_>) {
        cx.push_layer(Box::new(self));
    }

    fn close(&mut self, accepted: bool, cx: &mut EventCx<'_>) {
        tracing::debug!(accepted, "popup closed");
        (self.on_close)(accepted, &self.inner);
        cx.pop_layer();
    }
}

impl<C: Control + 'static> Control for Popup<C> {
    fn render(&self, cx: &mut RenderCx<'_>) -> View {
        let inner = cx.render_child(0, &self.inner);
        let mut frame = Boxed::new(inner).x_fill(false);
        if let Some(caption) = &self.caption {
            frame = frame.caption(TextSpan::new(caption.as_str()));
        }
        Floating::new(frame).at(self.pos).into()
    }

    fn children(&self) -> Vec<&dyn Control> {
        vec![&self.inner]
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Control> {
        if index == 0 {
            Some(&mut self.inner)
        } else {
            None
        }
    }

    fn on_event(&mut self, ev: &mut Event, cx: &mut EventCx<'_>) {
        match ev.key_code() {
            Some(Key::Esc) => {
                self.close(false, cx);
                ev.stop();
            }
            Some(key) if key.is_enter() => {
                self.close(true, cx);
                ev.stop();
            }
            _ => {}
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/popup.rs"]
mod tests;

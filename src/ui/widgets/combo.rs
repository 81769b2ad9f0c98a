use std::cell::Cell;
use std::rc::Rc;

use super::{Popup, SelectList};
use crate::ui::core::geom::Pos;
use crate::ui::core::input::Event;
use crate::ui::core::runtime::EventCx;
use crate::ui::core::style::Mod;
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{PaintedRect, TextSpan, View};

/// Where a combo's popup opens: two columns left of and one row above the
/// spot the combo text was last drawn.
pub(super) fn popup_origin(anchor: &PaintedRect) -> Pos {
    anchor
        .get()
        .map(|r| Pos::new(r.x.saturating_sub(2), r.y.saturating_sub(1)))
        .unwrap_or_default()
}

/// Shows the current choice; Enter opens a SelectList popup over it.
pub struct Combo {
    choices: Rc<[String]>,
    index: Rc<Cell<usize>>,
    anchor: PaintedRect,
    id: Option<String>,
}

impl Combo {
    pub fn new<I, S>(choices: I, index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Rc<[String]> = choices.into_iter().map(Into::into).collect();
        assert!(
            choices.is_empty() || index < choices.len(),
            "Combo index {index} out of range for {} choices",
            choices.len()
        );
        Self {
            choices,
            index: Rc::new(Cell::new(index)),
            anchor: PaintedRect::new(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn index(&self) -> usize {
        self.index.get()
    }

    pub fn value(&self) -> Option<&str> {
        self.choices.get(self.index.get()).map(String::as_str)
    }
}

impl Control for Combo {
    fn render(&self, cx: &mut RenderCx<'_>) -> View {
        let mods = if cx.contains_focus() {
            Mod::STANDOUT
        } else {
            Mod::NONE
        };
        TextSpan::new(self.value().unwrap_or(""))
            .mods(mods)
            .record_rect(self.anchor.clone())
            .into()
    }

    fn on_event(&mut self, ev: &mut Event, cx: &mut EventCx<'_>) {
        if !ev.key_code().is_some_and(|k| k.is_enter()) {
            return;
        }

        // A hand-built Config can skip validation; a list needs one row.
        let (width, height) = (cx.config().list_width, cx.config().list_height.max(1));
        let list = SelectList::from_shared(Rc::clone(&self.choices), self.index.get())
            .with_size(width, height);
        let index = Rc::clone(&self.index);
        Popup::new(popup_origin(&self.anchor), list, move |accepted, list: &SelectList| {
            if accepted {
                index.set(list.index());
            }
        })
        .show(cx);
        ev.stop();
    }

    fn can_focus(&self) -> bool {
        true
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/combo.rs"]
mod tests;

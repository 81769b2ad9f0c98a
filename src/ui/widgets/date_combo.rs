use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, NaiveDate};

use super::combo::popup_origin;
use super::{Popup, SelectDate};
use crate::ui::core::input::Event;
use crate::ui::core::runtime::EventCx;
use crate::ui::core::style::Mod;
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{PaintedRect, TextSpan, View};

/// Shows a date; Enter opens a SelectDate popup over it.
pub struct DateCombo {
    value: Rc<Cell<NaiveDate>>,
    anchor: PaintedRect,
    id: Option<String>,
}

impl DateCombo {
    pub fn new(value: NaiveDate) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
            anchor: PaintedRect::new(),
            id: None,
        }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn value(&self) -> NaiveDate {
        self.value.get()
    }
}

impl Control for DateCombo {
    fn render(&self, cx: &mut RenderCx<'_>) -> View {
        let mods = if cx.contains_focus() {
            Mod::STANDOUT
        } else {
            Mod::NONE
        };
        TextSpan::new(self.value.get().format("%B %d, %Y").to_string())
            .mods(mods)
            .record_rect(self.anchor.clone())
            .into()
    }

    fn on_event(&mut self, ev: &mut Event, cx: &mut EventCx<'_>) {
        if !ev.key_code().is_some_and(|k| k.is_enter()) {
            return;
        }

        let value = Rc::clone(&self.value);
        let calendar = SelectDate::new(value.get());
        Popup::new(popup_origin(&self.anchor), calendar, move |accepted, cal: &SelectDate| {
            if accepted {
                value.set(cal.value());
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
#[path = "../../../tests/unit/ui/widgets/date_combo.rs"]
mod tests;

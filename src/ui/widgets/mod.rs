//! The stock control set.

mod combo;
mod composite;
mod date_combo;
mod edit;
mod labeled;
mod panel;
mod popup;
mod select_date;
mod select_list;
mod text;

pub use combo::Combo;
pub use composite::Composite;
pub use date_combo::DateCombo;
pub use edit::Edit;
pub use labeled::Labeled;
pub use panel::Panel;
pub use popup::Popup;
pub use select_date::{month_weeks, SelectDate};
pub use select_list::SelectList;
pub use text::Text;

use crate::ui::core::input::Event;
use crate::ui::core::runtime::EventCx;
use crate::ui::core::widget::Control;

/// Moves focus from the child the event came up through to the next child
/// (or previous, when `backwards`) that holds something focusable.
/// Stops the event only when focus actually moved.
fn cycle_focus(
    controls: &[Box<dyn Control>],
    backwards: bool,
    ev: &mut Event,
    cx: &mut EventCx<'_>,
) {
    let Some(current) = cx.child_toward(ev.last.as_ref()) else {
        return;
    };

    let candidates: Box<dyn Iterator<Item = usize>> = if backwards {
        Box::new((0..current).rev())
    } else {
        Box::new(current + 1..controls.len())
    };
    for i in candidates {
        if cx.focus_into(i, controls[i].as_ref()) {
            ev.stop();
            return;
        }
    }
}

fn children_of(controls: &[Box<dyn Control>]) -> Vec<&dyn Control> {
    controls.iter().map(|c| c.as_ref()).collect()
}

fn child_of(controls: &mut [Box<dyn Control>], index: usize) -> Option<&mut dyn Control> {
    let child = controls.get_mut(index)?;
    Some(child.as_mut())
}

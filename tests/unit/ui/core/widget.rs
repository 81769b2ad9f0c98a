use super::*;
use crate::ui::widgets::{Panel, Text};

#[test]
fn focus_queries_are_relative_to_current_path() {
    let config = Config::default();
    let focused = ControlPath::from(vec![1, 0]);
    let mut cx = RenderCx::new(Some(&focused), &config);

    assert!(cx.contains_focus());
    assert!(!cx.has_focus());

    let child = Text::new("x");
    cx.path.push(1);
    assert!(cx.contains_focus());
    cx.path.push(0);
    assert!(cx.has_focus());
    cx.path.pop();
    cx.path.pop();

    cx.render_child(0, &child);
    assert_eq!(cx.path(), &ControlPath::root());
}

#[test]
fn inactive_layers_never_contain_focus() {
    let config = Config::default();
    let cx = RenderCx::new(None, &config);
    assert!(!cx.contains_focus());
    assert!(!cx.has_focus());
}

#[test]
fn boxed_controls_downcast_to_their_type() {
    let control = Panel::new(vec![Text::new("a").boxed()]).boxed();
    assert!(control.as_ref().as_any().downcast_ref::<Panel>().is_some());
    assert!(control.as_ref().as_any().downcast_ref::<Text>().is_none());
}

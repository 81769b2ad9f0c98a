use super::*;
use crate::ui::core::widget::IntoControl;
use crate::ui::widgets::{Composite, Edit, Text};

#[test]
fn focus_into_targets_first_focusable_descendant() {
    let config = Config::default();
    let path = ControlPath::from(vec![3]);
    let mut commands = Vec::new();
    let mut cx = EventCx::new(1, &path, &config, &mut commands);

    let child = Composite::new(vec![Text::new("t").boxed(), Edit::new("").boxed()]);
    assert!(cx.focus_into(2, &child));
    assert!(!cx.focus_into(0, &Text::new("static")));

    match commands.as_slice() {
        [Command::Focus { layer, path }] => {
            assert_eq!(*layer, 1);
            assert_eq!(path, &ControlPath::from(vec![3, 2, 1]));
        }
        other => panic!("unexpected commands: {other:?}"),
    }
}

#[test]
fn child_toward_reads_the_next_index_below() {
    let config = Config::default();
    let path = ControlPath::from(vec![1]);
    let mut commands = Vec::new();
    let cx = EventCx::new(0, &path, &config, &mut commands);

    assert_eq!(cx.child_toward(Some(&ControlPath::from(vec![1, 4, 2]))), Some(4));
    assert_eq!(cx.child_toward(Some(&ControlPath::from(vec![0, 4]))), None);
    assert_eq!(cx.child_toward(None), None);
}

#[test]
fn layer_commands_are_queued_in_order() {
    let config = Config::default();
    let path = ControlPath::root();
    let mut commands = Vec::new();
    let mut cx = EventCx::new(0, &path, &config, &mut commands);
    cx.push_layer(Text::new("popup").boxed());
    cx.pop_layer();
    cx.exit();

    assert!(matches!(
        commands.as_slice(),
        [Command::PushLayer(_), Command::PopLayer, Command::Exit]
    ));
}

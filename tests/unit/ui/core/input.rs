use super::*;

#[test]
fn enter_and_backspace_accept_both_codes() {
    assert!(Key::Enter.is_enter());
    assert!(Key::LineFeed.is_enter());
    assert!(!Key::Tab.is_enter());

    assert!(Key::Backspace.is_backspace());
    assert!(Key::Rubout.is_backspace());
    assert!(!Key::Delete.is_backspace());
}

#[test]
fn printable_rejects_control_characters() {
    assert_eq!(Key::Char('a').printable(), Some('a'));
    assert_eq!(Key::Char(' ').printable(), Some(' '));
    assert_eq!(Key::Char('\u{7f}').printable(), None);
    assert_eq!(Key::Char('\t').printable(), None);
    assert_eq!(Key::Up.printable(), None);
}

#[test]
fn stop_latches_propagation() {
    let mut ev = Event::key(Key::Tab, ControlPath::root());
    assert!(ev.is_propagating());
    ev.stop();
    assert!(!ev.is_propagating());
    ev.stop();
    assert!(!ev.is_propagating());
}

#[test]
fn focus_events_carry_no_key() {
    let ev = Event::focus(ControlPath::from(vec![0, 1]));
    assert_eq!(ev.kind, EventKind::Focus);
    assert_eq!(ev.key_code(), None);
    assert_eq!(Event::key(Key::Up, ControlPath::root()).key_code(), Some(Key::Up));
}

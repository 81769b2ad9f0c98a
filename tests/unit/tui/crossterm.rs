use super::*;

fn key(code: KeyCode, modifiers: KeyModifiers) -> Key {
    into_key(KeyEvent::new(code, modifiers))
}

#[test]
fn control_chords_map_to_editing_keys() {
    assert_eq!(key(KeyCode::Char('a'), KeyModifiers::CONTROL), Key::LineStart);
    assert_eq!(key(KeyCode::Char('e'), KeyModifiers::CONTROL), Key::LineEnd);
    assert_eq!(key(KeyCode::Char('j'), KeyModifiers::CONTROL), Key::LineFeed);
    assert_eq!(key(KeyCode::Char('h'), KeyModifiers::CONTROL), Key::Rubout);
    assert_eq!(key(KeyCode::Char('x'), KeyModifiers::CONTROL), Key::Unknown);
}

#[test]
fn shift_tab_is_backtab() {
    assert_eq!(key(KeyCode::Tab, KeyModifiers::SHIFT), Key::BackTab);
    assert_eq!(key(KeyCode::BackTab, KeyModifiers::SHIFT), Key::BackTab);
    assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Key::Tab);
}

#[test]
fn plain_keys_pass_through() {
    assert_eq!(key(KeyCode::Char('Q'), KeyModifiers::SHIFT), Key::Char('Q'));
    assert_eq!(key(KeyCode::Home, KeyModifiers::NONE), Key::LineStart);
    assert_eq!(key(KeyCode::End, KeyModifiers::NONE), Key::LineEnd);
    assert_eq!(key(KeyCode::F(5), KeyModifiers::NONE), Key::Unknown);
}

#[test]
fn releases_and_mouse_are_ignored() {
    let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(into_input(crossterm::event::Event::Key(release)), None);
    assert_eq!(
        into_input(crossterm::event::Event::Resize(80, 24)),
        Some(Input::Resize)
    );
    assert_eq!(
        into_input(crossterm::event::Event::FocusGained),
        None
    );
}

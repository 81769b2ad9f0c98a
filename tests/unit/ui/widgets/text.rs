use super::*;
use crate::ui::app::App;
use crate::ui::backend::test::TestBackend;

#[test]
fn renders_in_its_colors() {
    let mut app = App::new(Text::new("hello").colors(Color::Yellow, Color::Blue));
    let mut backend = TestBackend::new(10, 1);
    app.update(&mut backend).unwrap();

    assert_eq!(backend.buffer().row_text(0), "hello");
    assert_eq!(backend.colors_at(0, 0), Some((Color::Yellow, Color::Blue)));
}

#[test]
fn is_never_focused() {
    let app = App::new(Text::new("static"));
    assert!(app.active_layer().focused().is_root());
    assert!(!Text::new("x").can_focus());
}

#[test]
fn text_can_be_replaced() {
    let mut text = Text::new("before").with_id("status");
    text.set_text("after");
    assert_eq!(text.text(), "after");
    assert_eq!(text.id(), Some("status"));
}

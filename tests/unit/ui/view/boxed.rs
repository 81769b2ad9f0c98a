use super::*;
use crate::ui::core::color::ColorCache;
use crate::ui::core::geom::Pos;
use crate::ui::core::painter::{PaintCmd, Painter};

fn paint(view: &dyn Layout, rect: Rect, screen: Rect) -> Vec<PaintCmd> {
    let mut painter = Painter::new();
    let mut colors = ColorCache::new();
    let mut canvas = Canvas::new(&mut painter, &mut colors, screen);
    view.paint(rect, &mut canvas);
    painter.cmds().to_vec()
}

fn border_of(cmds: &[PaintCmd]) -> Option<Rect> {
    cmds.iter().find_map(|cmd| match cmd {
        PaintCmd::Border { rect, .. } => Some(*rect),
        _ => None,
    })
}

fn text_pos(cmds: &[PaintCmd], needle: &str) -> Option<Pos> {
    cmds.iter().find_map(|cmd| match cmd {
        PaintCmd::Text { pos, text, .. } if text == needle => Some(*pos),
        _ => None,
    })
}

#[test]
fn fill_box_claims_parent_width() {
    let b = Boxed::new(View::text("hi"));
    assert_eq!(b.measure(Rect::new(0, 0, 20, 10)), Size::new(20, 3));
}

#[test]
fn shrink_box_wraps_content_and_margin() {
    let b = Boxed::new(View::text("hi")).x_fill(false);
    assert_eq!(b.measure(Rect::new(0, 0, 20, 10)), Size::new(6, 3));

    let b = Boxed::new(View::text("hi")).x_fill(false).margins(0, 1);
    assert_eq!(b.measure(Rect::new(0, 0, 20, 10)), Size::new(4, 5));
}

#[test]
fn paints_border_caption_and_inset_content() {
    let screen = Rect::new(0, 0, 80, 24);
    let b = Boxed::new(View::text("body"))
        .x_fill(false)
        .caption(View::text("Title"));
    let cmds = paint(&b, Rect::new(5, 2, 40, 10), screen);

    assert_eq!(border_of(&cmds), Some(Rect::new(5, 2, 8, 3)));
    assert_eq!(text_pos(&cmds, "Title"), Some(Pos::new(8, 2)));
    assert_eq!(text_pos(&cmds, "body"), Some(Pos::new(7, 3)));
}

#[test]
fn bottom_edge_stays_off_last_screen_row() {
    let screen = Rect::new(0, 0, 30, 10);
    let b = Boxed::new(View::text("x")).y_fill(true);
    let cmds = paint(&b, screen, screen);
    assert_eq!(border_of(&cmds), Some(Rect::new(0, 0, 30, 9)));
}

#[test]
fn box_is_clamped_to_its_rect() {
    let screen = Rect::new(0, 0, 80, 24);
    let b = Boxed::new(View::text("a long piece of content")).x_fill(false);
    let cmds = paint(&b, Rect::new(0, 0, 10, 10), screen);
    assert_eq!(border_of(&cmds), Some(Rect::new(0, 0, 10, 3)));
}

use super::*;
use crate::ui::core::color::ColorCache;
use crate::ui::core::geom::Pos;
use crate::ui::core::painter::{PaintCmd, Painter};

fn paint(view: &dyn Layout, rect: Rect) -> Vec<PaintCmd> {
    let mut painter = Painter::new();
    let mut colors = ColorCache::new();
    let mut canvas = Canvas::new(&mut painter, &mut colors, Rect::new(0, 0, 80, 24));
    view.paint(rect, &mut canvas);
    painter.cmds().to_vec()
}

#[test]
fn text_width_is_display_width_or_min_width() {
    let r = Rect::new(0, 0, 80, 24);
    assert_eq!(TextSpan::new("abc").measure(r), Size::new(3, 1));
    assert_eq!(TextSpan::new("你好").measure(r), Size::new(4, 1));
    assert_eq!(TextSpan::new("abc").min_width(16).measure(r), Size::new(16, 1));
    assert_eq!(TextSpan::new("").measure(r), Size::new(0, 1));
}

#[test]
fn text_is_padded_to_min_width() {
    let span = TextSpan::new("ab").min_width(5).mods(Mod::BOLD);
    let cmds = paint(&span, Rect::new(2, 3, 20, 1));
    match &cmds[..] {
        [PaintCmd::Text {
            pos, text, style, ..
        }] => {
            assert_eq!(*pos, Pos::new(2, 3));
            assert_eq!(text, "ab   ");
            assert!(style.mods.contains(Mod::BOLD));
        }
        other => panic!("unexpected cmds: {other:?}"),
    }
}

#[test]
fn span_records_last_paint_rect() {
    let slot = PaintedRect::new();
    assert_eq!(slot.get(), None);

    let span = TextSpan::new("x").record_rect(slot.clone());
    paint(&span, Rect::new(4, 7, 10, 1));
    assert_eq!(slot.get(), Some(Rect::new(4, 7, 10, 1)));
}

#[test]
fn fill_claims_full_width() {
    let fill = Fill::new('-');
    assert_eq!(fill.measure(Rect::new(0, 0, 12, 4)), Size::new(12, 1));
    let cmds = paint(&fill, Rect::new(1, 1, 6, 1));
    assert!(matches!(
        &cmds[..],
        [PaintCmd::HLine { len: 6, ch: '-', .. }]
    ));
}

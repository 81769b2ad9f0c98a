use super::*;
use crate::ui::core::painter::PaintCmd;

#[test]
fn text_is_clipped_to_rect_row_and_screen() {
    let mut painter = Painter::new();
    let mut colors = ColorCache::new();
    let mut canvas = Canvas::new(&mut painter, &mut colors, Rect::new(0, 0, 10, 5));

    canvas.text(
        Rect::new(8, 1, 6, 3),
        "abcdef",
        Color::White,
        Color::Black,
        Mod::BOLD,
    );

    match &painter.cmds()[0] {
        PaintCmd::Text {
            pos, clip, style, ..
        } => {
            assert_eq!(*pos, Pos::new(8, 1));
            assert_eq!(*clip, Some(Rect::new(8, 1, 2, 1)));
            assert_eq!(style.pair, ColorPair(1));
            assert!(style.mods.contains(Mod::BOLD));
        }
        other => panic!("unexpected cmd: {other:?}"),
    }
}

#[test]
fn offscreen_text_emits_nothing() {
    let mut painter = Painter::new();
    let mut colors = ColorCache::new();
    let mut canvas = Canvas::new(&mut painter, &mut colors, Rect::new(0, 0, 10, 5));
    canvas.text(Rect::new(0, 7, 5, 1), "x", Color::White, Color::Black, Mod::NONE);
    canvas.text(Rect::new(0, 0, 0, 1), "x", Color::White, Color::Black, Mod::NONE);
    assert!(painter.cmds().is_empty());
}

#[test]
fn clear_uses_default_pair_and_clips() {
    let mut painter = Painter::new();
    let mut colors = ColorCache::new();
    let mut canvas = Canvas::new(&mut painter, &mut colors, Rect::new(0, 0, 4, 4));
    canvas.clear(Rect::new(2, 2, 10, 10));
    assert_eq!(
        painter.cmds(),
        &[PaintCmd::FillRect {
            rect: Rect::new(2, 2, 2, 2),
            style: Style::default(),
        }]
    );
    assert!(colors.is_empty());
}

#[test]
fn degenerate_border_is_skipped() {
    let mut painter = Painter::new();
    let mut colors = ColorCache::new();
    let mut canvas = Canvas::new(&mut painter, &mut colors, Rect::new(0, 0, 10, 10));
    canvas.border(Rect::new(0, 0, 1, 5));
    canvas.border(Rect::new(0, 0, 3, 3));
    assert_eq!(painter.cmds().len(), 1);
}

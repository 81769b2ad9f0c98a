use super::*;

#[test]
fn painter_collects_commands_in_order() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.hline(Pos::new(0, 0), 3, '-', Style::default());
    p.text_clipped(Pos::new(0, 0), "hi", Style::default(), Rect::new(0, 0, 2, 1));
    p.border(Rect::new(0, 0, 3, 3), Style::default());
    assert_eq!(p.cmds().len(), 4);
    assert!(matches!(p.cmds()[0], PaintCmd::FillRect { .. }));
    assert!(matches!(p.cmds()[3], PaintCmd::Border { .. }));
}

#[test]
fn text_clipped_records_clip_rect() {
    let mut p = Painter::new();
    let clip = Rect::new(0, 0, 2, 1);
    p.text_clipped(Pos::new(0, 0), "hello", Style::default(), clip);
    match &p.cmds()[0] {
        PaintCmd::Text { text, clip: c, .. } => {
            assert_eq!(text, "hello");
            assert_eq!(*c, Some(clip));
        }
        other => panic!("unexpected cmd: {other:?}"),
    }
}

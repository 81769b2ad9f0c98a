use super::*;
use crate::ui::core::color::ColorCache;
use crate::ui::core::geom::Pos;
use crate::ui::core::painter::{PaintCmd, Painter};

fn text_positions(view: &dyn Layout, rect: Rect) -> Vec<(Pos, String)> {
    let mut painter = Painter::new();
    let mut colors = ColorCache::new();
    let mut canvas = Canvas::new(&mut painter, &mut colors, Rect::new(0, 0, 80, 24));
    view.paint(rect, &mut canvas);
    painter
        .cmds()
        .iter()
        .filter_map(|cmd| match cmd {
            PaintCmd::Text { pos, text, .. } => Some((*pos, text.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn horizontal_width_is_sum_plus_margins() {
    let row = Horizontal::new(vec![View::text("ab"), View::text("cde"), View::text("f")]).margin(2);
    assert_eq!(row.measure(Rect::new(0, 0, 80, 24)), Size::new(10, 1));
}

#[test]
fn horizontal_paints_children_left_to_right() {
    let row = Horizontal::new(vec![View::text("ab"), View::text("cde"), View::text("f")]).margin(2);
    assert_eq!(
        text_positions(&row, Rect::new(1, 1, 40, 5)),
        vec![
            (Pos::new(1, 1), "ab".to_string()),
            (Pos::new(5, 1), "cde".to_string()),
            (Pos::new(10, 1), "f".to_string()),
        ]
    );
}

#[test]
fn vertical_stacks_and_takes_widest_child() {
    let inner = Vertical::new(vec![View::text("x"), View::text("y")]);
    let col = Vertical::new(vec![View::text("long line"), inner.into(), View::text("z")]);
    let r = Rect::new(0, 0, 80, 24);
    assert_eq!(col.measure(r), Size::new(9, 4));

    let ys: Vec<u16> = text_positions(&col, r).iter().map(|(p, _)| p.y).collect();
    assert_eq!(ys, vec![0, 1, 2, 3]);
}

#[test]
fn empty_sequences_measure_zero() {
    let r = Rect::new(0, 0, 80, 24);
    assert_eq!(Horizontal::new(Vec::new()).margin(3).measure(r), Size::new(0, 0));
    assert_eq!(Vertical::new(Vec::new()).measure(r), Size::new(0, 0));
}

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

fn grid(cells: &[&[&str]]) -> Grid {
    Grid::new(
        cells
            .iter()
            .map(|row| row.iter().map(|s| View::text(*s)).collect())
            .collect(),
    )
}

#[test]
fn columns_take_widest_cell_plus_margin() {
    let g = grid(&[&["Mon", "1"], &["9", "10"]]);
    assert_eq!(g.measure(Rect::new(0, 0, 80, 24)), Size::new(3 + 1 + 2, 2));
}

#[test]
fn left_aligned_cells_start_at_column_origin() {
    let g = grid(&[&["Mon", "1"], &["9", "10"]]);
    assert_eq!(
        text_positions(&g, Rect::new(0, 0, 80, 24)),
        vec![
            (Pos::new(0, 0), "Mon".to_string()),
            (Pos::new(4, 0), "1".to_string()),
            (Pos::new(0, 1), "9".to_string()),
            (Pos::new(4, 1), "10".to_string()),
        ]
    );
}

#[test]
fn right_aligned_cells_shift_by_slack() {
    let g = grid(&[&["Mon", "1"], &["9", "10"]]).align_right(true);
    assert_eq!(
        text_positions(&g, Rect::new(2, 0, 80, 24)),
        vec![
            (Pos::new(2, 0), "Mon".to_string()),
            (Pos::new(7, 0), "1".to_string()),
            (Pos::new(4, 1), "9".to_string()),
            (Pos::new(6, 1), "10".to_string()),
        ]
    );
}

#[test]
fn ragged_rows_are_allowed() {
    let g = grid(&[&["a", "b", "c"], &["d"]]).h_margin(0);
    assert_eq!(g.measure(Rect::new(0, 0, 80, 24)), Size::new(3, 2));
}

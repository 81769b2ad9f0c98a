use super::*;

#[test]
fn inset_shrinks_rect() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.inset(Insets::xy(1, 1)), Rect::new(1, 1, 8, 3));
}

#[test]
fn inset_xy_matches_box_margins() {
    let r = Rect::new(4, 2, 20, 6);
    assert_eq!(r.inset(Insets::xy(2, 1)), Rect::new(6, 3, 16, 4));
    assert_eq!(Insets::xy(2, 1).horizontal(), 4);
    assert_eq!(Insets::xy(2, 1).vertical(), 2);
}

#[test]
fn inset_saturates_to_empty() {
    let r = Rect::new(0, 0, 2, 2);
    assert_eq!(r.inset(Insets::xy(3, 3)), Rect::new(3, 3, 0, 0));
}

#[test]
fn intersect_returns_overlap() {
    let a = Rect::new(0, 0, 5, 5);
    let b = Rect::new(3, 3, 5, 5);
    assert_eq!(a.intersect(b), Rect::new(3, 3, 2, 2));
}

#[test]
fn intersect_disjoint_is_empty() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(5, 5, 2, 2);
    assert_eq!(a.intersect(b), Rect::new(5, 5, 0, 0));
    assert!(a.intersect(b).is_empty());
}

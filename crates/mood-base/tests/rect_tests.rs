use mood_base::{Rect, Vec2};

#[test]
fn test_contains_is_half_open() {
    let r = Rect::new(Vec2::new(10usize, 20), Vec2::new(5, 5));
    assert!(r.contains(Vec2::new(10, 20)));
    assert!(r.contains(Vec2::new(14, 24)));
    assert!(!r.contains(Vec2::new(15, 20)));
    assert!(!r.contains(Vec2::new(10, 25)));
    assert!(!r.contains(Vec2::new(9, 20)));
}

#[test]
fn test_intersect() {
    let a = Rect::new(Vec2::new(0usize, 0), Vec2::new(10, 10));
    let b = Rect::new(Vec2::new(5usize, 8), Vec2::new(10, 10));
    assert_eq!(a.intersect(&b), Some(Rect::new(Vec2::new(5, 8), Vec2::new(5, 2))));

    let c = Rect::new(Vec2::new(10usize, 0), Vec2::new(3, 3));
    assert_eq!(a.intersect(&c), None);
}

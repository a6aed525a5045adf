use mood_base::Vec2;
use mood_image::{Frame, draw, font, yuyv_to_rgb};

const BLACK: [u8; 3] = [0, 0, 0];
const RED: [u8; 3] = [255, 0, 0];

fn canvas(w: usize, h: usize) -> Frame {
    Frame::filled(Vec2::new(w, h), BLACK).unwrap()
}

fn count(frame: &Frame, color: [u8; 3]) -> usize {
    frame.data().chunks_exact(3).filter(|p| *p == color).count()
}

#[test]
fn test_set_pixel_ignores_out_of_bounds() {
    let mut f = canvas(4, 4);
    draw::set_pixel(&mut f, -1, 0, RED);
    draw::set_pixel(&mut f, 4, 0, RED);
    draw::set_pixel(&mut f, 0, 4, RED);
    assert_eq!(count(&f, RED), 0);
    draw::set_pixel(&mut f, 3, 3, RED);
    assert_eq!(f.pixel(3, 3), Some(RED));
}

#[test]
fn test_horizontal_line() {
    let mut f = canvas(10, 10);
    draw::draw_line(&mut f, 2, 5, 7, 5, RED);
    assert_eq!(count(&f, RED), 6);
    for x in 2..=7 {
        assert_eq!(f.pixel(x, 5), Some(RED));
    }
}

#[test]
fn test_line_clipped_at_edges() {
    let mut f = canvas(10, 10);
    draw::draw_line(&mut f, -20, 3, 30, 3, RED);
    assert_eq!(count(&f, RED), 10);
}

#[test]
fn test_fill_rect_clips() {
    let mut f = canvas(10, 10);
    draw::fill_rect(&mut f, 8, 8, 5, 5, RED);
    assert_eq!(count(&f, RED), 4);
}

#[test]
fn test_full_sector_equals_disc() {
    let mut a = canvas(21, 21);
    let mut b = canvas(21, 21);
    draw::fill_sector(&mut a, 10, 10, 8, 90.0, 360.0, RED);
    draw::draw_filled_circle(&mut b, 10, 10, 8, RED);
    assert_eq!(a, b);
}

#[test]
fn test_half_sectors_cover_left_and_right() {
    let blue = [0, 0, 255];
    let mut f = canvas(41, 41);
    draw::fill_sector(&mut f, 20, 20, 15, 90.0, 180.0, RED);
    draw::fill_sector(&mut f, 20, 20, 15, 270.0, 180.0, blue);

    // 90..270 counter-clockwise is the left half
    for (x, y) in [(10, 20), (12, 12), (12, 28)] {
        assert_eq!(f.pixel(x, y), Some(RED));
    }
    for (x, y) in [(30, 20), (28, 12), (28, 28)] {
        assert_eq!(f.pixel(x, y), Some(blue));
    }
    // outside the radius
    assert_eq!(f.pixel(2, 2), Some(BLACK));
}

#[test]
fn test_text_stays_inside_bounds() {
    let mut f = canvas(200, 40);
    let origin = Vec2::new(5usize, 6);
    font::draw_text(&mut f, Vec2::new(5, 6), "Emotion: happy", RED, 2);
    let bounds = font::text_bounds(origin, "Emotion: happy", 2);
    assert!(count(&f, RED) > 0);
    for y in 0..f.height() {
        for x in 0..f.width() {
            if f.pixel(x, y) == Some(RED) {
                assert!(bounds.contains(Vec2::new(x, y)), "stray pixel at {x},{y}");
            }
        }
    }
}

#[test]
fn test_text_size() {
    assert_eq!(font::text_size("", 3), Vec2::new(0, 0));
    assert_eq!(font::text_size("ab", 1), Vec2::new(11, 7));
    assert_eq!(font::text_size("ab", 3), Vec2::new(33, 21));
}

#[test]
fn test_unknown_character_renders_question_mark() {
    assert_eq!(font::glyph('\u{1F600}'), font::glyph('?'));
}

#[test]
fn test_yuyv_gray() {
    // Y=128, U=V=128 is mid gray
    let rgb = yuyv_to_rgb(&[128, 128, 128, 128], Vec2::new(2, 1)).unwrap();
    assert_eq!(rgb, vec![128; 6]);
}

#[test]
fn test_yuyv_short_buffer() {
    assert!(yuyv_to_rgb(&[0; 6], Vec2::new(2, 2)).is_none());
}

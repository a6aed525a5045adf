use mood_base::{Rect, Vec2};
use mood_image::{Color, Frame, ImageError, font};
use mood_infer::Emotion;

pub const TEXT_ORIGIN: Vec2<usize> = Vec2::new(10, 20);
pub const TEXT_SCALE: usize = 3;
pub const TEXT_COLOR: Color = [255, 0, 0];

pub fn label_text(emotion: Emotion) -> String {
    format!("Emotion: {}", emotion)
}

/// Area `annotate` may touch for this label. May extend past the frame.
pub fn text_region(emotion: Emotion) -> Rect<usize> {
    font::text_bounds(TEXT_ORIGIN, &label_text(emotion), TEXT_SCALE)
}

/// Copy of `frame` with `Emotion: <label>` drawn in the top-left corner.
///
/// Pixels outside [`text_region`] are unchanged; text past the frame edge is
/// clipped.
pub fn annotate(frame: &Frame, emotion: Emotion) -> Result<Frame, ImageError> {
    let mut out = Frame::new(frame.size(), frame.data().to_vec())?;
    font::draw_text(
        &mut out,
        Vec2::new(TEXT_ORIGIN.x as i32, TEXT_ORIGIN.y as i32),
        &label_text(emotion),
        TEXT_COLOR,
        TEXT_SCALE,
    );
    Ok(out)
}

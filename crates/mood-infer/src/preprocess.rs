//! Input preparation and output decoding for FER+ style emotion models.

use crate::{Emotion, InferError};
use mood_image::Frame;

/// Side length of the square grayscale model input.
pub const INPUT_SIZE: usize = 64;

/// FER+ output order. `None` marks contempt, which has no [`Emotion`].
pub const FERPLUS_LABELS: [Option<Emotion>; 8] = [
    Some(Emotion::Neutral),
    Some(Emotion::Happy),
    Some(Emotion::Surprise),
    Some(Emotion::Sad),
    Some(Emotion::Angry),
    Some(Emotion::Disgust),
    Some(Emotion::Fear),
    None,
];

/// Centered square crop, BT.601 luma, bilinear resize to `INPUT_SIZE`.
///
/// Returns `INPUT_SIZE * INPUT_SIZE` values in `0.0..=255.0`, row-major,
/// ready for a `[1, 1, 64, 64]` tensor.
pub fn face_input(frame: &Frame) -> Vec<f32> {
    let side = frame.width().min(frame.height());
    let x0 = (frame.width() - side) / 2;
    let y0 = (frame.height() - side) / 2;
    let data = frame.data();
    let luma = |x: usize, y: usize| -> f32 {
        let i = ((y0 + y) * frame.width() + x0 + x) * 3;
        0.299 * data[i] as f32 + 0.587 * data[i + 1] as f32 + 0.114 * data[i + 2] as f32
    };

    let scale = side as f32 / INPUT_SIZE as f32;
    let max = (side - 1) as f32;
    let mut out = Vec::with_capacity(INPUT_SIZE * INPUT_SIZE);
    for oy in 0..INPUT_SIZE {
        let sy = ((oy as f32 + 0.5) * scale - 0.5).clamp(0.0, max);
        let (y_lo, fy) = (sy.floor() as usize, sy.fract());
        let y_hi = (y_lo + 1).min(side - 1);
        for ox in 0..INPUT_SIZE {
            let sx = ((ox as f32 + 0.5) * scale - 0.5).clamp(0.0, max);
            let (x_lo, fx) = (sx.floor() as usize, sx.fract());
            let x_hi = (x_lo + 1).min(side - 1);
            let top = luma(x_lo, y_lo) * (1.0 - fx) + luma(x_hi, y_lo) * fx;
            let bottom = luma(x_lo, y_hi) * (1.0 - fx) + luma(x_hi, y_hi) * fx;
            out.push(top * (1.0 - fy) + bottom * fy);
        }
    }
    out
}

/// Pick the highest scoring label, ignoring contempt.
pub fn label_from_scores(scores: &[f32]) -> Result<Emotion, InferError> {
    if scores.len() != FERPLUS_LABELS.len() {
        return Err(InferError::Shape(format!(
            "expected {} scores, got {}",
            FERPLUS_LABELS.len(),
            scores.len()
        )));
    }
    FERPLUS_LABELS
        .iter()
        .zip(scores)
        .filter_map(|(label, &score)| label.map(|l| (l, score)))
        .filter(|(_, score)| score.is_finite())
        .fold(None, |best: Option<(Emotion, f32)>, (label, score)| match best {
            Some((_, s)) if s >= score => best,
            _ => Some((label, score)),
        })
        .map(|(label, _)| label)
        .ok_or_else(|| InferError::Runtime("no finite scores".to_string()))
}

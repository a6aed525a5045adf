use crate::{Emotion, InferError};
use mood_image::Frame;

/// Labels the dominant emotion of the face in a frame.
///
/// Implementations are lenient: frames with no face or several faces still
/// get a best-effort label rather than an error. Calls may block for a long
/// time and are made from the blocking pool.
pub trait EmotionClassifier: Send {
    fn classify(&mut self, frame: &Frame) -> Result<Emotion, InferError>;
}

/// Classifier used when no model is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeutralClassifier;

impl EmotionClassifier for NeutralClassifier {
    fn classify(&mut self, _frame: &Frame) -> Result<Emotion, InferError> {
        Ok(Emotion::Neutral)
    }
}

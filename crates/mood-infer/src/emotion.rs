use crate::InferError;
use std::{fmt, str::FromStr};

/// Closed set of labels the classifier may produce.
///
/// Declaration order is the order used whenever labels are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprise,
    Fear,
    Neutral,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprise,
        Emotion::Fear,
        Emotion::Neutral,
        Emotion::Disgust,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprise => "surprise",
            Emotion::Fear => "fear",
            Emotion::Neutral => "neutral",
            Emotion::Disgust => "disgust",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = InferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InferError::UnknownLabel(s.to_string()))
    }
}

pub mod classifier;
pub mod device;
pub mod emotion;
pub mod error;
pub mod preprocess;

#[cfg(feature = "onnx")]
pub mod ferplus;

pub use classifier::{EmotionClassifier, NeutralClassifier};
pub use device::Device;
pub use emotion::Emotion;
pub use error::InferError;

#[cfg(feature = "onnx")]
pub use ferplus::FerPlusClassifier;

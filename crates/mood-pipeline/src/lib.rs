//! The moodcam frame pipeline.
//!
//! Frames flow camera → classifier → history → annotator → multipart stream.
//! The history is read separately by the chart renderer.

pub mod annotate;
pub mod chart;
pub mod error;
pub mod history;
pub mod icons;
pub mod multipart;
pub mod pipeline;
pub mod stream;

pub use annotate::{annotate, text_region};
pub use chart::{ChartRenderer, Slice, pie_slices};
pub use error::ChartError;
pub use history::{EmotionHistory, Snapshot};
pub use icons::IconTable;
pub use multipart::{BOUNDARY, CONTENT_TYPE, frame_part};
pub use pipeline::{Pipeline, PipelineConfig, PipelineState};
pub use stream::MjpegStream;

//! Frame sources for moodcam.
//!
//! A [`FrameSource`] is a blocking, pull-driven capture device. The pipeline
//! never talks to one directly; it goes through [`SharedCamera`], which owns
//! the device for the lifetime of the process and guarantees it is closed
//! exactly once.

pub mod config;
pub mod error;
pub mod shared;
pub mod synthetic;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::{CameraConfig, CaptureFormat};
pub use error::CameraError;
pub use shared::SharedCamera;
pub use synthetic::SyntheticCamera;
pub use traits::FrameSource;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;

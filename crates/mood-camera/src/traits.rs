use crate::CameraError;
use mood_image::Frame;

/// Blocking frame source.
///
/// Calls happen from tokio's blocking pool, one at a time.
pub trait FrameSource: Send {
    /// Acquire the device. Fails with `CameraError::DeviceUnavailable` if nothing responds.
    fn open(&mut self) -> Result<(), CameraError>;

    /// Block until the next frame is available.
    ///
    /// Returns `CameraError::EndOfStream` once the device stops producing
    /// frames or was closed, and `CameraError::InvalidFrame` for a single bad
    /// capture.
    fn next_frame(&mut self) -> Result<Frame, CameraError>;

    /// Release the device. Must be a no-op when not open.
    fn close(&mut self);
}

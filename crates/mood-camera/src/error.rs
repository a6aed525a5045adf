use mood_image::ImageError;
use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// No device responded when opening. Fatal at startup.
    DeviceUnavailable(String),
    /// The device has no more frames: disconnected, failed or already released.
    EndOfStream,
    /// A single capture could not be turned into a frame. The next read may succeed.
    InvalidFrame(String),
    Device(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::DeviceUnavailable(msg) => write!(f, "camera unavailable: {msg}"),
            CameraError::EndOfStream => write!(f, "end of stream"),
            CameraError::InvalidFrame(msg) => write!(f, "invalid frame: {msg}"),
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<ImageError> for CameraError {
    fn from(err: ImageError) -> Self {
        CameraError::InvalidFrame(err.to_string())
    }
}

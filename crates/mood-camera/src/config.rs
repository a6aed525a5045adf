use crate::CameraError;
use mood_base::Vec2;
use std::fmt;
use std::str::FromStr;

/// Pixel format asked of the driver first. The other one is the fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureFormat {
    #[default]
    Mjpeg,
    Yuyv,
}

impl CaptureFormat {
    pub fn fourcc(self) -> [u8; 4] {
        match self {
            CaptureFormat::Mjpeg => *b"MJPG",
            CaptureFormat::Yuyv => *b"YUYV",
        }
    }

    pub fn from_fourcc(fourcc: &[u8; 4]) -> Option<Self> {
        match fourcc {
            b"MJPG" => Some(CaptureFormat::Mjpeg),
            b"YUYV" => Some(CaptureFormat::Yuyv),
            _ => None,
        }
    }

    pub fn fallback(self) -> Self {
        match self {
            CaptureFormat::Mjpeg => CaptureFormat::Yuyv,
            CaptureFormat::Yuyv => CaptureFormat::Mjpeg,
        }
    }
}

impl fmt::Display for CaptureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureFormat::Mjpeg => write!(f, "mjpeg"),
            CaptureFormat::Yuyv => write!(f, "yuyv"),
        }
    }
}

impl FromStr for CaptureFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mjpeg" | "mjpg" => Ok(CaptureFormat::Mjpeg),
            "yuyv" => Ok(CaptureFormat::Yuyv),
            other => Err(format!("unknown capture format {other:?}, expected mjpeg or yuyv")),
        }
    }
}

/// What to ask the capture device for. Drivers may grant something else;
/// sources report the size they actually deliver.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    device: String,
    size: Vec2<usize>,
    fps: u32,
    buffers: u32,
    format: CaptureFormat,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            size: Vec2::new(640, 480),
            fps: 30,
            buffers: 4,
            format: CaptureFormat::default(),
        }
    }
}

impl CameraConfig {
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    pub fn with_size(mut self, size: Vec2<usize>) -> Self {
        self.size = size;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Number of mmap buffers queued with the driver.
    pub fn with_buffer_count(mut self, buffers: u32) -> Self {
        self.buffers = buffers;
        self
    }

    pub fn with_format(mut self, format: CaptureFormat) -> Self {
        self.format = format;
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffers
    }

    pub fn format(&self) -> CaptureFormat {
        self.format
    }

    /// Reject settings no device can honor, before touching hardware.
    pub fn validate(&self) -> Result<(), CameraError> {
        if self.device.trim().is_empty() {
            return Err(CameraError::DeviceUnavailable("empty device path".to_string()));
        }
        let problem = if self.size.x == 0 || self.size.y == 0 {
            Some(format!("frame size {}x{}", self.size.x, self.size.y))
        } else if self.size.x % 2 != 0 {
            Some(format!("odd width {} cannot carry 4:2:2 pixels", self.size.x))
        } else if self.fps == 0 {
            Some("zero frame rate".to_string())
        } else if self.buffers == 0 {
            Some("zero capture buffers".to_string())
        } else {
            None
        };
        match problem {
            Some(why) => Err(CameraError::DeviceUnavailable(format!("{}: {why}", self.device))),
            None => Ok(()),
        }
    }
}

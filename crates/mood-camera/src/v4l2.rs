use crate::{CameraConfig, CameraError, CaptureFormat, FrameSource};
use mood_base::Vec2;
use mood_image::{Frame, decode_frame, yuyv_to_rgb};
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

/// V4L2 capture device.
///
/// Negotiates the configured format at the configured size and falls back to
/// the other one when the driver refuses it. The actual size granted by the
/// driver is used.
pub struct V4l2Camera {
    config: CameraConfig,
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: CaptureFormat,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("open", &self.stream.is_some())
            .field("size", &self.size)
            .field("format", &self.format)
            .finish()
    }
}

impl V4l2Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            size: config.size(),
            config,
            stream: None,
            format: config.format(),
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Frame size granted by the driver, valid after `open`.
    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    fn negotiate(&mut self, device: &Device) -> Result<(), CameraError> {
        let (w, h) = (self.config.size().x as u32, self.config.size().y as u32);
        let wanted = self.config.format();
        let mut actual = Capture::set_format(device, &Format::new(w, h, FourCC::new(&wanted.fourcc())))?;
        if actual.fourcc != FourCC::new(&wanted.fourcc()) {
            let fallback = wanted.fallback();
            log::debug!("{} refused ({}), trying {}", wanted, actual.fourcc, fallback);
            actual = Capture::set_format(device, &Format::new(w, h, FourCC::new(&fallback.fourcc())))?;
        }
        self.format = CaptureFormat::from_fourcc(&actual.fourcc.repr).ok_or_else(|| {
            CameraError::Device(format!("unsupported pixel format: {}", actual.fourcc))
        })?;
        self.size = Vec2::new(actual.width as usize, actual.height as usize);

        let params = v4l::video::capture::Parameters::with_fps(self.config.fps());
        Capture::set_params(device, &params)?;
        Ok(())
    }
}

impl FrameSource for V4l2Camera {
    fn open(&mut self) -> Result<(), CameraError> {
        self.stream.take();
        self.config.validate()?;
        let device = Device::with_path(self.config.device()).map_err(|e| {
            CameraError::DeviceUnavailable(format!("{}: {}", self.config.device(), e))
        })?;
        self.negotiate(&device)?;
        let stream =
            MmapStream::with_buffers(&device, Type::VideoCapture, self.config.buffer_count())
                .map_err(|e| CameraError::Device(e.to_string()))?;
        self.stream = Some(stream);
        log::info!(
            "opened {} at {}x{} ({})",
            self.config.device(),
            self.size.x,
            self.size.y,
            self.format
        );
        Ok(())
    }

    fn next_frame(&mut self) -> Result<Frame, CameraError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(CameraError::EndOfStream);
        };
        let (data, _meta) = match CaptureStream::next(stream) {
            Ok(captured) => captured,
            Err(e) => {
                log::warn!("capture failed on {}: {}", self.config.device(), e);
                return Err(CameraError::EndOfStream);
            }
        };
        match self.format {
            CaptureFormat::Mjpeg => Ok(decode_frame(data)?),
            CaptureFormat::Yuyv => {
                let rgb = yuyv_to_rgb(data, self.size).ok_or_else(|| {
                    CameraError::InvalidFrame(format!("short YUYV buffer: {} bytes", data.len()))
                })?;
                Ok(Frame::new(self.size, rgb)?)
            }
        }
    }

    fn close(&mut self) {
        if self.stream.take().is_some() {
            log::debug!("closed {}", self.config.device());
        }
    }
}

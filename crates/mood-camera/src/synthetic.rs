use crate::{CameraConfig, CameraError, FrameSource};
use mood_base::Vec2;
use mood_image::{Frame, draw};

/// Test-pattern source: a slowly scrolling gradient with a bouncing block.
///
/// Frames are deterministic in their index. With a limit set, the source
/// reports end of stream after that many frames.
#[derive(Debug)]
pub struct SyntheticCamera {
    size: Vec2<usize>,
    limit: Option<usize>,
    produced: usize,
    opened: bool,
}

impl SyntheticCamera {
    pub fn new(size: Vec2<usize>) -> Self {
        Self {
            size,
            limit: None,
            produced: 0,
            opened: false,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.size())
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn produced(&self) -> usize {
        self.produced
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    fn render(&self, index: usize) -> Result<Frame, CameraError> {
        let (w, h) = (self.size.x, self.size.y);
        let mut data = Vec::with_capacity(w * h * 3);
        for y in 0..h {
            for x in 0..w {
                data.push(((x + index * 4) % 256) as u8);
                data.push(((y * 255) / h.max(1)) as u8);
                data.push(96);
            }
        }
        let mut frame = Frame::new(self.size, data)?;

        let block = (w.min(h) / 4).max(1) as i32;
        let span = (w as i32 - block).max(1);
        let travel = (index as i32 * 8) % (2 * span);
        let x = if travel < span { travel } else { 2 * span - travel };
        draw::fill_rect(&mut frame, x, h as i32 / 2 - block / 2, block, block, [240, 240, 240]);
        Ok(frame)
    }
}

impl FrameSource for SyntheticCamera {
    fn open(&mut self) -> Result<(), CameraError> {
        if self.size.x == 0 || self.size.y == 0 {
            return Err(CameraError::DeviceUnavailable(format!(
                "synthetic source cannot produce {}x{} frames",
                self.size.x, self.size.y
            )));
        }
        self.opened = true;
        Ok(())
    }

    fn next_frame(&mut self) -> Result<Frame, CameraError> {
        if !self.opened {
            return Err(CameraError::EndOfStream);
        }
        if self.limit.is_some_and(|limit| self.produced >= limit) {
            return Err(CameraError::EndOfStream);
        }
        let frame = self.render(self.produced)?;
        self.produced += 1;
        Ok(frame)
    }

    fn close(&mut self) {
        self.opened = false;
    }
}

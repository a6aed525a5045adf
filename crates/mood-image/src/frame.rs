use crate::ImageError;
use mood_base::Vec2;

pub type Color = [u8; 3];

/// 8-bit RGB raster, row-major, 3 bytes per pixel.
///
/// The buffer always holds exactly `width * height * 3` bytes and both
/// dimensions are non-zero.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    size: Vec2<usize>,
    data: Vec<u8>,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("size", &self.size)
            .field("data", &format_args!("<{} bytes>", self.data.len()))
            .finish()
    }
}

impl Frame {
    pub fn new(size: Vec2<usize>, data: Vec<u8>) -> Result<Self, ImageError> {
        if size.x == 0 || size.y == 0 {
            return Err(ImageError::InvalidFrame(format!(
                "zero dimension {}x{}",
                size.x, size.y
            )));
        }
        let expected = size
            .x
            .checked_mul(size.y)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| ImageError::InvalidFrame("dimensions overflow".to_string()))?;
        if data.len() != expected {
            return Err(ImageError::InvalidFrame(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                size.x,
                size.y,
                data.len()
            )));
        }
        Ok(Self { size, data })
    }

    /// Frame of the given size with every pixel set to `color`.
    pub fn filled(size: Vec2<usize>, color: Color) -> Result<Self, ImageError> {
        let pixels = size.x.saturating_mul(size.y);
        let data = color.iter().copied().cycle().take(pixels * 3).collect();
        Self::new(size, data)
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        let i = (y * self.size.x + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

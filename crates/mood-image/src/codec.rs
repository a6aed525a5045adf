use crate::{Frame, ImageError};
use crates_image::ImageEncoder;
use mood_base::Vec2;

/// Decode any supported image (JPEG, PNG) into an RGB frame.
///
/// Grayscale and alpha images are converted to RGB.
pub fn decode_frame(data: &[u8]) -> Result<Frame, ImageError> {
    let rgb = crates_image::load_from_memory(data)?.to_rgb8();
    let (w, h) = rgb.dimensions();
    Frame::new(Vec2::new(w as usize, h as usize), rgb.into_raw())
}

/// Encode a frame as baseline JPEG. `quality` is clamped to 1..=100.
pub fn rgb_to_jpeg(frame: &Frame, quality: u8) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Vec::new();
    let encoder =
        crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    encoder
        .write_image(
            frame.data(),
            frame.width() as u32,
            frame.height() as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encode a frame as PNG. Output is deterministic for identical input.
pub fn rgb_to_png(frame: &Frame) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Vec::new();
    let encoder = crates_image::codecs::png::PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            frame.data(),
            frame.width() as u32,
            frame.height() as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encode a frame as JPEG on tokio's blocking thread pool.
pub async fn encode_jpeg(frame: Frame, quality: u8) -> Result<Vec<u8>, ImageError> {
    tokio::task::spawn_blocking(move || rgb_to_jpeg(&frame, quality))
        .await
        .map_err(|e| ImageError::Encode(e.to_string()))?
}

use mood_base::Vec2;

/// Convert packed YUYV (4:2:2) to RGB with BT.601 coefficients.
///
/// Each 4-byte group `[Y0, U, Y1, V]` yields two RGB pixels. Returns `None`
/// when `data` is shorter than `width * height * 2` or the width is odd.
pub fn yuyv_to_rgb(data: &[u8], size: Vec2<usize>) -> Option<Vec<u8>> {
    if size.x % 2 != 0 {
        return None;
    }
    let pixels = size.x.checked_mul(size.y)?;
    let needed = pixels * 2;
    if data.len() < needed {
        return None;
    }

    let mut rgb = Vec::with_capacity(pixels * 3);
    for quad in data[..needed].chunks_exact(4) {
        let u = quad[1] as f32 - 128.0;
        let v = quad[3] as f32 - 128.0;
        for y in [quad[0] as f32, quad[2] as f32] {
            rgb.push((y + 1.402 * v).clamp(0.0, 255.0) as u8);
            rgb.push((y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8);
            rgb.push((y + 1.772 * u).clamp(0.0, 255.0) as u8);
        }
    }
    Some(rgb)
}

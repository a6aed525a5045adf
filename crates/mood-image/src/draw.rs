//! Clipped raster primitives on [`Frame`]s.
//!
//! Coordinates are signed so shapes may hang off any edge; everything outside
//! the frame is silently dropped.

use crate::{Color, Frame};

pub fn set_pixel(frame: &mut Frame, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x as usize >= frame.width() || y as usize >= frame.height() {
        return;
    }
    let idx = (y as usize * frame.width() + x as usize) * 3;
    frame.data_mut()[idx..idx + 3].copy_from_slice(&color);
}

pub fn fill_rect(frame: &mut Frame, x: i32, y: i32, w: i32, h: i32, color: Color) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(frame.width() as i32);
    let y1 = (y + h).min(frame.height() as i32);
    for py in y0..y1 {
        for px in x0..x1 {
            set_pixel(frame, px, py, color);
        }
    }
}

/// Bresenham line, clipped to the frame with Cohen-Sutherland first.
pub fn draw_line(frame: &mut Frame, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let (w, h) = (frame.width() as i32, frame.height() as i32);
    let Some((mut x0, mut y0, x1, y1)) = clip_line(x0, y0, x1, y1, w, h) else {
        return;
    };

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        set_pixel(frame, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Line of the given thickness, stamped as discs along the path.
pub fn draw_thick_line(
    frame: &mut Frame,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    thickness: i32,
    color: Color,
) {
    if thickness <= 1 {
        draw_line(frame, x0, y0, x1, y1, color);
        return;
    }
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
    let r = thickness / 2;
    for i in 0..=steps {
        let x = x0 + (x1 - x0) * i / steps;
        let y = y0 + (y1 - y0) * i / steps;
        draw_filled_circle(frame, x, y, r, color);
    }
}

pub fn draw_filled_circle(frame: &mut Frame, cx: i32, cy: i32, radius: i32, color: Color) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                set_pixel(frame, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Ring between `radius - thickness` and `radius`.
pub fn draw_ring(frame: &mut Frame, cx: i32, cy: i32, radius: i32, thickness: i32, color: Color) {
    let outer = radius * radius;
    let inner_r = (radius - thickness).max(0);
    let inner = inner_r * inner_r;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d = dx * dx + dy * dy;
            if d <= outer && d >= inner {
                set_pixel(frame, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Arc of a circle, angles in degrees, counter-clockwise from the positive x axis
/// with y pointing up on screen.
pub fn draw_arc(
    frame: &mut Frame,
    cx: i32,
    cy: i32,
    radius: i32,
    start_deg: f32,
    sweep_deg: f32,
    thickness: i32,
    color: Color,
) {
    // one step per pixel of arc length
    let steps = ((sweep_deg.abs().to_radians() * radius as f32).ceil() as i32).max(1);
    for i in 0..=steps {
        let a = (start_deg + sweep_deg * i as f32 / steps as f32).to_radians();
        let x = cx + (radius as f32 * a.cos()).round() as i32;
        let y = cy - (radius as f32 * a.sin()).round() as i32;
        draw_filled_circle(frame, x, y, thickness / 2, color);
    }
}

/// Fill a pie sector of a disc.
///
/// `start_deg` and `sweep_deg` follow the [`draw_arc`] convention. A sweep of
/// 360 degrees or more fills the whole disc.
pub fn fill_sector(
    frame: &mut Frame,
    cx: i32,
    cy: i32,
    radius: i32,
    start_deg: f32,
    sweep_deg: f32,
    color: Color,
) {
    if sweep_deg <= 0.0 {
        return;
    }
    let full = sweep_deg >= 360.0;
    let start = start_deg.rem_euclid(360.0);
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            if !full {
                let angle = (-dy as f32).atan2(dx as f32).to_degrees().rem_euclid(360.0);
                let offset = (angle - start).rem_euclid(360.0);
                if offset >= sweep_deg {
                    continue;
                }
            }
            set_pixel(frame, cx + dx, cy + dy, color);
        }
    }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(x: i32, y: i32, w: i32, h: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= w {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= h {
        code |= BOTTOM;
    }
    code
}

fn clip_line(
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    w: i32,
    h: i32,
) -> Option<(i32, i32, i32, i32)> {
    loop {
        let c0 = outcode(x0, y0, w, h);
        let c1 = outcode(x1, y1, w, h);
        if c0 | c1 == 0 {
            return Some((x0, y0, x1, y1));
        }
        if c0 & c1 != 0 {
            return None;
        }
        let c = if c0 != 0 { c0 } else { c1 };
        let (dx, dy) = (x1 - x0, y1 - y0);
        let (x, y) = if c & TOP != 0 {
            (x0 + dx * (0 - y0) / dy, 0)
        } else if c & BOTTOM != 0 {
            (x0 + dx * (h - 1 - y0) / dy, h - 1)
        } else if c & LEFT != 0 {
            (0, y0 + dy * (0 - x0) / dx)
        } else {
            (w - 1, y0 + dy * (w - 1 - x0) / dx)
        };
        if c == c0 {
            x0 = x;
            y0 = y;
        } else {
            x1 = x;
            y1 = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_line_fully_outside() {
        assert_eq!(clip_line(-10, -10, -1, -5, 20, 20), None);
    }

    #[test]
    fn test_clip_line_crossing_left_edge() {
        let (x0, y0, x1, y1) = clip_line(-10, 5, 10, 5, 20, 20).unwrap();
        assert_eq!((x0, y0, x1, y1), (0, 5, 10, 5));
    }
}

//! Small procedural face icons stamped next to chart slices.

use mood_base::Vec2;
use mood_image::{Color, Frame, draw, font};
use mood_infer::Emotion;
use std::collections::BTreeMap;

/// Draws an icon centered on `(cx, cy)` fitting in a circle of radius `r`.
pub type IconPainter = fn(frame: &mut Frame, cx: i32, cy: i32, r: i32);

const INK: Color = [60, 40, 10];
const SKIN: Color = [255, 204, 77];

/// Emotion → icon lookup. Labels without an entry get a `?` marker.
#[derive(Clone)]
pub struct IconTable {
    icons: BTreeMap<Emotion, IconPainter>,
}

impl Default for IconTable {
    fn default() -> Self {
        Self::faces()
    }
}

impl IconTable {
    pub fn empty() -> Self {
        Self {
            icons: BTreeMap::new(),
        }
    }

    /// A face for every label.
    pub fn faces() -> Self {
        Self::empty()
            .with(Emotion::Happy, happy)
            .with(Emotion::Sad, sad)
            .with(Emotion::Angry, angry)
            .with(Emotion::Surprise, surprise)
            .with(Emotion::Fear, fear)
            .with(Emotion::Neutral, neutral)
            .with(Emotion::Disgust, disgust)
    }

    pub fn with(mut self, emotion: Emotion, painter: IconPainter) -> Self {
        self.icons.insert(emotion, painter);
        self
    }

    pub fn contains(&self, emotion: Emotion) -> bool {
        self.icons.contains_key(&emotion)
    }

    pub fn draw(&self, frame: &mut Frame, emotion: Emotion, cx: i32, cy: i32, r: i32) {
        match self.icons.get(&emotion) {
            Some(paint) => paint(frame, cx, cy, r),
            None => unknown(frame, cx, cy, r),
        }
    }
}

fn head(frame: &mut Frame, cx: i32, cy: i32, r: i32, skin: Color) {
    draw::draw_filled_circle(frame, cx, cy, r, skin);
    draw::draw_ring(frame, cx, cy, r, (r / 10).max(1), INK);
}

fn eyes(frame: &mut Frame, cx: i32, cy: i32, r: i32, size: i32) {
    draw::draw_filled_circle(frame, cx - r / 3, cy - r / 4, size, INK);
    draw::draw_filled_circle(frame, cx + r / 3, cy - r / 4, size, INK);
}

fn stroke(r: i32) -> i32 {
    (r / 8).max(1)
}

fn happy(frame: &mut Frame, cx: i32, cy: i32, r: i32) {
    head(frame, cx, cy, r, SKIN);
    eyes(frame, cx, cy, r, (r / 9).max(1));
    draw::draw_arc(frame, cx, cy, r * 11 / 20, 200.0, 140.0, stroke(r), INK);
}

fn sad(frame: &mut Frame, cx: i32, cy: i32, r: i32) {
    head(frame, cx, cy, r, SKIN);
    eyes(frame, cx, cy, r, (r / 9).max(1));
    draw::draw_arc(frame, cx, cy + r * 3 / 4, r * 9 / 20, 30.0, 120.0, stroke(r), INK);
}

fn angry(frame: &mut Frame, cx: i32, cy: i32, r: i32) {
    head(frame, cx, cy, r, [255, 130, 90]);
    eyes(frame, cx, cy, r, (r / 9).max(1));
    let t = stroke(r);
    draw::draw_thick_line(frame, (cx - r / 2, cy - r / 2), (cx - r / 6, cy - r / 3), t, INK);
    draw::draw_thick_line(frame, (cx + r / 2, cy - r / 2), (cx + r / 6, cy - r / 3), t, INK);
    draw::draw_arc(frame, cx, cy + r * 3 / 4, r * 9 / 20, 50.0, 80.0, t, INK);
}

fn surprise(frame: &mut Frame, cx: i32, cy: i32, r: i32) {
    head(frame, cx, cy, r, SKIN);
    eyes(frame, cx, cy, r, (r / 6).max(1));
    draw::draw_ring(frame, cx, cy + r * 2 / 5, (r / 4).max(2), stroke(r), INK);
}

fn fear(frame: &mut Frame, cx: i32, cy: i32, r: i32) {
    head(frame, cx, cy, r, [175, 205, 255]);
    eyes(frame, cx, cy, r, (r / 7).max(1));
    let t = stroke(r);
    draw::draw_thick_line(frame, (cx - r / 2, cy - r / 2), (cx - r / 6, cy - r * 3 / 5), t, INK);
    draw::draw_thick_line(frame, (cx + r / 2, cy - r / 2), (cx + r / 6, cy - r * 3 / 5), t, INK);
    // wobbly mouth
    let y = cy + r * 2 / 5;
    let step = (r / 5).max(1);
    let mut x = cx - r / 2;
    let mut up = true;
    while x < cx + r / 2 {
        let dy = if up { -step / 2 } else { step / 2 };
        draw::draw_thick_line(frame, (x, y - dy), (x + step, y + dy), t, INK);
        x += step;
        up = !up;
    }
}

fn neutral(frame: &mut Frame, cx: i32, cy: i32, r: i32) {
    head(frame, cx, cy, r, SKIN);
    eyes(frame, cx, cy, r, (r / 9).max(1));
    let y = cy + r * 2 / 5;
    draw::draw_thick_line(frame, (cx - r / 3, y), (cx + r / 3, y), stroke(r), INK);
}

fn disgust(frame: &mut Frame, cx: i32, cy: i32, r: i32) {
    head(frame, cx, cy, r, [165, 215, 120]);
    eyes(frame, cx, cy, r, (r / 9).max(1));
    let t = stroke(r);
    draw::draw_thick_line(frame, (cx - r / 3, cy + r / 2), (cx + r / 3, cy + r / 3), t, INK);
}

fn unknown(frame: &mut Frame, cx: i32, cy: i32, r: i32) {
    head(frame, cx, cy, r, [210, 210, 210]);
    let scale = ((r as usize * 6) / (5 * font::GLYPH_HEIGHT)).max(1);
    font::draw_text_centered(frame, Vec2::new(cx, cy), "?", INK, scale);
}

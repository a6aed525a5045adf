use crate::{ChartError, IconTable, Snapshot};
use mood_base::Vec2;
use mood_image::{Color, Frame, draw, font, rgb_to_png};
use mood_infer::Emotion;

/// One wedge of the pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub emotion: Emotion,
    pub count: usize,
    /// Share of the total, in `0.0..=1.0`.
    pub fraction: f64,
    /// Degrees, counter-clockwise from the positive x axis.
    pub start_deg: f64,
    pub sweep_deg: f64,
}

impl Slice {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }

    pub fn mid_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }
}

/// First wedge starts at 12 o'clock, wedges follow counter-clockwise.
pub const START_ANGLE: f64 = 90.0;

/// Wedge geometry for a snapshot, one slice per recorded label.
pub fn pie_slices(snapshot: &Snapshot) -> Result<Vec<Slice>, ChartError> {
    let total = snapshot.total();
    if total == 0 {
        return Err(ChartError::EmptyAggregate);
    }
    let mut start = START_ANGLE;
    let slices = snapshot
        .iter()
        .map(|(emotion, count)| {
            let fraction = count as f64 / total as f64;
            let slice = Slice {
                emotion,
                count,
                fraction,
                start_deg: start,
                sweep_deg: 360.0 * fraction,
            };
            start += slice.sweep_deg;
            slice
        })
        .collect();
    Ok(slices)
}

// tab10
const PALETTE: [Color; 10] = [
    [31, 119, 180],
    [255, 127, 14],
    [44, 160, 44],
    [214, 39, 40],
    [148, 103, 189],
    [140, 86, 75],
    [227, 119, 194],
    [127, 127, 127],
    [188, 189, 34],
    [23, 190, 207],
];

const BACKGROUND: Color = [255, 255, 255];
const TEXT: Color = [0, 0, 0];
const SEPARATOR: Color = [255, 255, 255];

/// Rasterizes snapshots as PNG pie charts.
#[derive(Clone)]
pub struct ChartRenderer {
    side: usize,
    icons: IconTable,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(IconTable::faces())
    }
}

impl ChartRenderer {
    pub fn new(icons: IconTable) -> Self {
        Self { side: 480, icons }
    }

    /// Canvas side length in pixels. Clamped to at least 64.
    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side.max(64);
        self
    }

    pub fn side(&self) -> usize {
        self.side
    }

    fn canvas(&self) -> Result<Frame, ChartError> {
        Ok(Frame::filled(Vec2::new(self.side, self.side), BACKGROUND)?)
    }

    fn radius(&self) -> i32 {
        (self.side as i32 * 7) / 24
    }

    fn text_scale(&self) -> usize {
        (self.side / 240).max(1)
    }

    /// Pie chart of `snapshot` as an RGB frame.
    pub fn render_frame(&self, snapshot: &Snapshot) -> Result<Frame, ChartError> {
        let slices = pie_slices(snapshot)?;
        let mut frame = self.canvas()?;
        let c = self.side as i32 / 2;
        let r = self.radius();
        let scale = self.text_scale();

        for slice in &slices {
            let color = PALETTE[slice.emotion as usize % PALETTE.len()];
            draw::fill_sector(
                &mut frame,
                c,
                c,
                r,
                slice.start_deg as f32,
                slice.sweep_deg as f32,
                color,
            );
        }
        if slices.len() > 1 {
            for slice in &slices {
                let (x, y) = polar(c, slice.start_deg, r as f64);
                draw::draw_line(&mut frame, c, c, x, y, SEPARATOR);
            }
        }

        let icon_r = (r / 8).max(4);
        for slice in &slices {
            let mid = slice.mid_deg();
            let (px, py) = polar(c, mid, r as f64 * 0.6);
            font::draw_text_centered(&mut frame, Vec2::new(px, py), &slice.percent_label(), TEXT, scale);

            let (ix, iy) = polar(c, mid, r as f64 + icon_r as f64 * 1.6);
            self.icons.draw(&mut frame, slice.emotion, ix, iy, icon_r);
            let label_y = iy + icon_r + (font::GLYPH_HEIGHT * scale) as i32;
            font::draw_text_centered(&mut frame, Vec2::new(ix, label_y), slice.emotion.as_str(), TEXT, scale);
        }
        Ok(frame)
    }

    /// Pie chart of `snapshot` as PNG bytes.
    ///
    /// Fails with `ChartError::EmptyAggregate` when nothing was recorded.
    pub fn render(&self, snapshot: &Snapshot) -> Result<Vec<u8>, ChartError> {
        let frame = self.render_frame(snapshot)?;
        Ok(rgb_to_png(&frame)?)
    }

    /// PNG shown while the history is empty.
    pub fn render_placeholder(&self) -> Result<Vec<u8>, ChartError> {
        let mut frame = self.canvas()?;
        let c = self.side as i32 / 2;
        draw::draw_ring(&mut frame, c, c, self.radius(), 2, PALETTE[7]);
        font::draw_text_centered(
            &mut frame,
            Vec2::new(c, c),
            "No emotions recorded yet",
            TEXT,
            self.text_scale(),
        );
        Ok(rgb_to_png(&frame)?)
    }
}

fn polar(center: i32, deg: f64, radius: f64) -> (i32, i32) {
    let a = deg.to_radians();
    (
        center + (radius * a.cos()).round() as i32,
        center - (radius * a.sin()).round() as i32,
    )
}

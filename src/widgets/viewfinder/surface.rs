//! Built-in surfaces: a recording draw list and a software raster.

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::path::Path;

use super::overlay::{Color, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        color: Color,
    },
    StrokeLine {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        color: Color,
        width: f32,
    },
}

/// Surface that only records what would be drawn.
///
/// Lets a host replay the overlay on any canvas API, and is what `--dump` prints.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DrawList {
    width: i32,
    height: i32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replay recorded calls onto another surface.
    pub fn replay(&self, target: &mut dyn Surface) {
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::FillRect { x0, y0, x1, y1, color } => {
                    target.fill_rect(x0, y0, x1, y1, color)
                }
                DrawCommand::StrokeLine { x0, y0, x1, y1, color, width } => {
                    target.stroke_line(x0, y0, x1, y1, color, width)
                }
            }
        }
    }
}

impl Surface for DrawList {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x0, y0, x1, y1, color });
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeLine { x0, y0, x1, y1, color, width });
    }
}

/// Software raster over an RGBA8 image, source-over blending.
///
/// A pixel is covered when its center falls inside the shape, so integer
/// rectangles cover exactly `[x0, x1) x [y0, y1)`.
pub struct ImageSurface {
    image: RgbaImage,
}

impl ImageSurface {
    /// Transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Surface pre-filled with a background (stand-in for the camera preview).
    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_array())),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from(self.image.get_pixel(x, y).0)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.image
            .save(path)
            .with_context(|| format!("Failed to write image: {}", path.display()))
    }

    /// Pixel index range whose centers lie in `[lo, hi)`, clipped to `[0, limit)`.
    fn span(lo: f32, hi: f32, limit: u32) -> std::ops::Range<u32> {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().clamp(0.0, limit as f32);
        if end <= start {
            return 0..0;
        }
        start as u32..end as u32
    }

    /// Straight-alpha source-over, rounded to nearest. Kept instead of
    /// `image::Pixel::blend` so one translucent layer over a transparent pixel
    /// reproduces the source alpha exactly, which the coverage checks rely on.
    fn blend(&mut self, x: u32, y: u32, color: Color) {
        let dst = self.image.get_pixel_mut(x, y);
        let sa = color.a as f32 / 255.0;
        let da = dst.0[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            dst.0 = [0, 0, 0, 0];
            return;
        }
        let src = [color.r, color.g, color.b];
        for i in 0..3 {
            let c = (src[i] as f32 * sa + dst.0[i] as f32 * da * (1.0 - sa)) / out_a;
            dst.0[i] = c.round().clamp(0.0, 255.0) as u8;
        }
        dst.0[3] = (out_a * 255.0).round() as u8;
    }
}

impl Surface for ImageSurface {
    fn size(&self) -> (i32, i32) {
        (self.image.width() as i32, self.image.height() as i32)
    }

    fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let (w, h) = self.image.dimensions();
        for y in Self::span(y0, y1, h) {
            for x in Self::span(x0, x1, w) {
                self.blend(x, y, color);
            }
        }
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, width: f32) {
        let (dx, dy) = (x1 - x0, y1 - y0);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= 0.0 || width <= 0.0 {
            return;
        }
        let (ux, uy) = (dx / len, dy / len);
        let half = width / 2.0;

        let (w, h) = self.image.dimensions();
        let xs = Self::span(x0.min(x1) - half, x0.max(x1) + half, w);
        let ys = Self::span(y0.min(y1) - half, y0.max(y1) + half, h);

        // butt caps: covered if the center projects onto [0, len) and is within half a width
        for y in ys {
            for x in xs.clone() {
                let px = x as f32 + 0.5 - x0;
                let py = y as f32 + 0.5 - y0;
                let along = px * ux + py * uy;
                let across = (px * uy - py * ux).abs();
                if along >= 0.0 && along < len && across < half {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

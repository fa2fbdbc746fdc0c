//! Overlay renderer - dimmed mask plus corner brackets.
//!
//! Draw order is mask first, border second. Mask strips leave the framing
//! rectangle uncovered *inclusive* of its right/bottom edge, so the clear area is
//! `[left, right] x [top, bottom]`. Bracket corners sit one pixel outside that area.

use log::trace;

use super::framing::FramingRect;

/// RGBA8 color, serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packed `0xAARRGGBB`.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

/// Fill for everything outside the framing rectangle.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MaskStyle {
    pub color: Color,
}

impl Default for MaskStyle {
    fn default() -> Self {
        Self {
            color: Color::from_argb(0x6000_0000),
        }
    }
}

/// Corner bracket stroke.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BorderStyle {
    pub color: Color,
    pub stroke_width: f32,
    pub corner_line_length: i32,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            color: Color::from_argb(0xFFFF_FF00),
            stroke_width: 4.0,
            corner_line_length: 60,
        }
    }
}

/// Output target for the overlay. Coordinates are view pixels, +Y down.
pub trait Surface {
    /// Surface size in pixels (width, height).
    fn size(&self) -> (i32, i32);

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`.
    fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color);

    /// Stroke a segment with butt caps.
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, width: f32);
}

/// Draw the full overlay. `None` means no layout yet: nothing is drawn.
pub fn render(
    surface: &mut dyn Surface,
    framing_rect: Option<&FramingRect>,
    mask: &MaskStyle,
    border: &BorderStyle,
) {
    let Some(rect) = framing_rect else {
        trace!("Viewfinder draw skipped: no framing rect");
        return;
    };

    draw_mask(surface, rect, mask);
    draw_border(surface, rect, border);
}

/// Four strips around the frame: top, left, right, bottom.
pub fn draw_mask(surface: &mut dyn Surface, rect: &FramingRect, mask: &MaskStyle) {
    let (width, height) = surface.size();
    let w = width as f32;
    let h = height as f32;
    let left = rect.left as f32;
    let top = rect.top as f32;
    let right = rect.right.saturating_add(1) as f32;
    let bottom = rect.bottom.saturating_add(1) as f32;

    surface.fill_rect(0.0, 0.0, w, top, mask.color);
    surface.fill_rect(0.0, top, left, bottom, mask.color);
    surface.fill_rect(right, top, w, bottom, mask.color);
    surface.fill_rect(0.0, bottom, w, h, mask.color);
}

/// Bracket corners and the direction each arm points into the frame.
fn bracket_corners(rect: &FramingRect) -> [(f32, f32, f32, f32); 4] {
    let left = rect.left.saturating_sub(1) as f32;
    let top = rect.top.saturating_sub(1) as f32;
    let right = rect.right.saturating_add(1) as f32;
    let bottom = rect.bottom.saturating_add(1) as f32;

    // (corner x, corner y, inward x sign, inward y sign)
    [
        (left, top, 1.0, 1.0),
        (left, bottom, 1.0, -1.0),
        (right, top, -1.0, 1.0),
        (right, bottom, -1.0, -1.0),
    ]
}

/// Eight strokes forming an L at each corner.
///
/// Each arm starts half a stroke width outside the corner so the two arms of a
/// bracket meet instead of leaving a notch, and runs `corner_line_length` inward.
pub fn draw_border(surface: &mut dyn Surface, rect: &FramingRect, border: &BorderStyle) {
    let half = border.stroke_width / 2.0;
    let len = border.corner_line_length as f32;

    for (x, y, sx, sy) in bracket_corners(rect) {
        // vertical arm
        surface.stroke_line(x, y - sy * half, x, y + sy * len, border.color, border.stroke_width);
        // horizontal arm
        surface.stroke_line(x - sx * half, y, x + sx * len, y, border.color, border.stroke_width);
    }
}

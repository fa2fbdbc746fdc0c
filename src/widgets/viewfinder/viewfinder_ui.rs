//! Viewfinder widget - egui rendering

use eframe::egui;

use super::framing::{Orientation, ViewportSize};
use super::overlay::{Color, Surface};
use super::viewfinder::Viewfinder;

impl From<Color> for egui::Color32 {
    fn from(c: Color) -> Self {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

/// Surface backed by an egui painter. Coordinates are offset by the panel origin.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    size: (i32, i32),
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, panel_rect: egui::Rect) -> Self {
        Self {
            painter,
            origin: panel_rect.left_top(),
            size: (panel_rect.width() as i32, panel_rect.height() as i32),
        }
    }

    fn pos(&self, x: f32, y: f32) -> egui::Pos2 {
        self.origin + egui::vec2(x, y)
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> (i32, i32) {
        self.size
    }

    fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let rect = egui::Rect::from_min_max(self.pos(x0, y0), self.pos(x1, y1));
        self.painter.rect_filled(rect, 0.0, egui::Color32::from(color));
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, width: f32) {
        self.painter.line_segment(
            [self.pos(x0, y0), self.pos(x1, y1)],
            egui::Stroke::new(width, egui::Color32::from(color)),
        );
    }
}

/// Render the viewfinder inside the provided UI, over whatever was painted there.
///
/// Feeds the panel size to the widget every frame (it ignores unchanged layouts),
/// then draws. `orientation` of `None` derives it from the panel aspect.
pub fn render(ui: &mut egui::Ui, viewfinder: &mut Viewfinder, orientation: Option<Orientation>) {
    let panel_rect = ui.max_rect();
    let size = ViewportSize::new(panel_rect.width() as i32, panel_rect.height() as i32);
    let orientation = orientation.unwrap_or_else(|| Orientation::from_size(size));

    if viewfinder.on_layout_changed(size, orientation) {
        ui.ctx().request_repaint();
    }

    let mut surface = PainterSurface::new(ui.painter(), panel_rect);
    viewfinder.on_draw_requested(&mut surface);
}

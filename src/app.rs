//! Preview window: a placeholder camera feed with the live viewfinder on top.

use eframe::egui;
use log::info;

use crate::widgets::viewfinder::{render_ui, Orientation, Viewfinder};

/// Stand-in for the camera preview.
const PREVIEW_BG: egui::Color32 = egui::Color32::from_rgb(70, 90, 80);
const PREVIEW_GRID: egui::Color32 = egui::Color32::from_rgb(90, 110, 100);
const GRID_STEP: f32 = 40.0;

pub struct ViewfinderApp {
    viewfinder: Viewfinder,
    /// `None` = derive from window aspect
    orientation: Option<Orientation>,
    show_help: bool,
}

impl ViewfinderApp {
    pub fn new(viewfinder: Viewfinder, orientation: Option<Orientation>) -> Self {
        Self {
            viewfinder,
            orientation,
            show_help: true,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::P) {
                self.orientation = Some(Orientation::Portrait);
                info!("Orientation: portrait");
            }
            if i.key_pressed(egui::Key::L) {
                self.orientation = Some(Orientation::Landscape);
                info!("Orientation: landscape");
            }
            if i.key_pressed(egui::Key::A) {
                self.orientation = None;
                info!("Orientation: auto");
            }
            if i.key_pressed(egui::Key::F1) {
                self.show_help = !self.show_help;
            }
        });
    }
}

fn draw_preview(ui: &egui::Ui, rect: egui::Rect) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, PREVIEW_BG);

    let stroke = egui::Stroke::new(1.0, PREVIEW_GRID);
    let mut x = rect.left();
    while x < rect.right() {
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        x += GRID_STEP;
    }
    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        y += GRID_STEP;
    }
}

impl eframe::App for ViewfinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let size = self.viewfinder.viewport();
                ui.label(format!("View: {}x{}", size.width, size.height));
                ui.separator();
                ui.label(format!(
                    "Orientation: {}{}",
                    self.viewfinder.orientation().as_str(),
                    if self.orientation.is_none() { " (auto)" } else { "" }
                ));
                ui.separator();
                match self.viewfinder.framing_rect() {
                    Some(r) => ui.label(format!(
                        "Frame: [{}, {}, {}, {}] {}x{}",
                        r.left,
                        r.top,
                        r.right,
                        r.bottom,
                        r.width(),
                        r.height()
                    )),
                    None => ui.label("Frame: -"),
                };
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let panel_rect = ui.max_rect();
                draw_preview(ui, panel_rect);
                render_ui(ui, &mut self.viewfinder, self.orientation);

                if self.show_help {
                    ui.painter().text(
                        panel_rect.left_top() + egui::vec2(10.0, 10.0),
                        egui::Align2::LEFT_TOP,
                        "P: portrait  L: landscape  A: auto  F1: toggle help",
                        egui::FontId::proportional(14.0),
                        egui::Color32::WHITE,
                    );
                }
            });
    }
}

/// Open the preview window and block until it closes.
pub fn run_window(viewfinder: Viewfinder, orientation: Option<Orientation>) -> eframe::Result<()> {
    let size = viewfinder.viewport();
    let inner = if size.is_laid_out() {
        [size.width as f32, size.height as f32]
    } else {
        [720.0, 1280.0]
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner)
            .with_title("Viewfinder"),
        ..Default::default()
    };

    eframe::run_native(
        "viewfinder",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewfinderApp::new(viewfinder, orientation)))),
    )
}

//! Viewfinder widget - barcode framing overlay
//!
//! Geometry and draw sequencing are host-agnostic; `viewfinder_ui` adapts them to egui.

pub mod framing;
pub mod overlay;
pub mod surface;
mod viewfinder;
mod viewfinder_ui;

pub use framing::{
    compute_framing_rect, FrameConstraints, FramingRect, Orientation, OrientedConstraints,
    ViewportSize,
};
pub use overlay::{render, BorderStyle, Color, MaskStyle, Surface};
pub use surface::{DrawCommand, DrawList, ImageSurface};
pub use viewfinder::Viewfinder;
pub use viewfinder_ui::{render as render_ui, PainterSurface};

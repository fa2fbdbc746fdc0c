//! Viewfinder - barcode scanner framing overlay library
//!
//! Computes the centered scan rectangle for a camera preview and issues the
//! mask/corner-bracket draw calls for it on any [`Surface`].

pub mod app;
pub mod cli;
pub mod config;
pub mod shell;
pub mod widgets;

pub use config::ViewfinderConfig;
pub use widgets::viewfinder::{
    compute_framing_rect, BorderStyle, Color, FramingRect, MaskStyle, Orientation, Surface,
    Viewfinder, ViewportSize,
};

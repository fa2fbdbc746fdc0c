use log::{debug, info};

use super::framing::{compute_framing_rect, FramingRect, Orientation, ViewportSize};
use super::overlay::{self, Surface};
use crate::config::ViewfinderConfig;

/// Viewfinder widget state.
///
/// Hosts call [`Viewfinder::on_layout_changed`] on every size/rotation event and
/// [`Viewfinder::on_draw_requested`] from their paint callback. Layout takes
/// `&mut self`, so recomputation cannot interleave with a draw.
#[derive(Debug, Clone)]
pub struct Viewfinder {
    config: ViewfinderConfig,
    viewport: ViewportSize,
    orientation: Orientation,
    framing_rect: Option<FramingRect>,
}

impl Default for Viewfinder {
    fn default() -> Self {
        Self::new(ViewfinderConfig::default())
    }
}

impl Viewfinder {
    pub fn new(config: ViewfinderConfig) -> Self {
        info!(
            "Viewfinder setup: border {:?} width {} length {}",
            config.border.color.to_array(),
            config.border.stroke_width,
            config.border.corner_line_length
        );
        Self {
            config,
            viewport: ViewportSize::default(),
            orientation: Orientation::default(),
            framing_rect: None,
        }
    }

    pub fn config(&self) -> &ViewfinderConfig {
        &self.config
    }

    /// Current framing rectangle. `None` until the host reports a real size.
    pub fn framing_rect(&self) -> Option<&FramingRect> {
        self.framing_rect.as_ref()
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Size or orientation changed: recompute the framing rectangle.
    ///
    /// A zero or negative size means the view is not laid out yet and clears the
    /// rectangle, so the next draw is skipped. Returns true if the rectangle changed.
    pub fn on_layout_changed(&mut self, viewport: ViewportSize, orientation: Orientation) -> bool {
        self.viewport = viewport;
        self.orientation = orientation;

        let next = if viewport.is_laid_out() {
            Some(compute_framing_rect(viewport, orientation, &self.config.constraints))
        } else {
            None
        };

        if next == self.framing_rect {
            return false;
        }

        debug!(
            "Viewfinder layout {}x{} {}: {:?} -> {:?}",
            viewport.width,
            viewport.height,
            orientation.as_str(),
            self.framing_rect,
            next
        );
        self.framing_rect = next;
        true
    }

    /// Same as [`Self::on_layout_changed`] with orientation derived from the size.
    pub fn on_resize(&mut self, viewport: ViewportSize) -> bool {
        self.on_layout_changed(viewport, Orientation::from_size(viewport))
    }

    /// Paint the overlay. No-op until a framing rectangle exists.
    pub fn on_draw_requested(&self, surface: &mut dyn Surface) {
        overlay::render(
            surface,
            self.framing_rect.as_ref(),
            &self.config.mask,
            &self.config.border,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::viewfinder::surface::DrawList;

    #[test]
    fn test_no_draw_before_layout() {
        let vf = Viewfinder::default();
        let mut list = DrawList::new(1080, 1920);
        vf.on_draw_requested(&mut list);
        assert!(vf.framing_rect().is_none());
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_layout_then_draw() {
        let mut vf = Viewfinder::default();
        assert!(vf.on_layout_changed(ViewportSize::new(1080, 1920), Orientation::Portrait));
        assert_eq!(vf.framing_rect(), Some(&FramingRect::new(67, 480, 1012, 1440)));

        let mut list = DrawList::new(1080, 1920);
        vf.on_draw_requested(&mut list);
        assert_eq!(list.commands().len(), 12);
    }

    #[test]
    fn test_same_layout_is_unchanged() {
        let mut vf = Viewfinder::default();
        vf.on_layout_changed(ViewportSize::new(720, 1280), Orientation::Portrait);
        let first = vf.framing_rect().copied();
        assert!(!vf.on_layout_changed(ViewportSize::new(720, 1280), Orientation::Portrait));
        assert_eq!(vf.framing_rect().copied(), first);
    }

    #[test]
    fn test_orientation_change_recomputes() {
        let mut vf = Viewfinder::default();
        vf.on_layout_changed(ViewportSize::new(1080, 1080), Orientation::Portrait);
        let portrait = *vf.framing_rect().unwrap();
        assert!(vf.on_layout_changed(ViewportSize::new(1080, 1080), Orientation::Landscape));
        let landscape = *vf.framing_rect().unwrap();
        assert_ne!(portrait, landscape);
        assert_eq!(landscape.width(), 675);
    }

    #[test]
    fn test_zero_size_clears_rect() {
        let mut vf = Viewfinder::default();
        vf.on_layout_changed(ViewportSize::new(1080, 1920), Orientation::Portrait);
        assert!(vf.on_layout_changed(ViewportSize::new(0, 1920), Orientation::Portrait));
        assert!(vf.framing_rect().is_none());

        let mut list = DrawList::new(0, 1920);
        vf.on_draw_requested(&mut list);
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_unvalidated_inverted_config_lays_out() {
        let json = r#"{
            "portrait": {
                "width_ratio": 0.875, "height_ratio": 0.5,
                "min_width": 500, "max_width": 100,
                "min_height": 240, "max_height": 960
            }
        }"#;
        let config: ViewfinderConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());

        let mut vf = Viewfinder::new(config);
        assert_eq!(vf.config().constraints.portrait.min_width, 500);
        assert!(vf.on_layout_changed(ViewportSize::new(1080, 1920), Orientation::Portrait));
        let r = *vf.framing_rect().unwrap();
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 960);

        let mut list = DrawList::new(1080, 1920);
        vf.on_draw_requested(&mut list);
        assert_eq!(list.commands().len(), 12);
    }

    #[test]
    fn test_on_resize_derives_orientation() {
        let mut vf = Viewfinder::default();
        vf.on_resize(ViewportSize::new(1920, 1080));
        assert_eq!(vf.orientation(), Orientation::Landscape);
        assert_eq!(vf.framing_rect(), Some(&FramingRect::new(360, 202, 1560, 877)));
    }
}

//! Framing rectangle geometry.
//!
//! Derives the scan region from the host view size and orientation:
//! - each axis is `round(ratio * dimension)` snapped into `[min, max]`
//! - the result is centered, so it can be larger than the view (negative offsets)
//!
//! Everything here is pure. Callers decide when a layout is valid.

use log::trace;

/// Smallest frame edge for both orientations.
pub const MIN_FRAME_WIDTH: i32 = 240;
pub const MIN_FRAME_HEIGHT: i32 = 240;

pub const LANDSCAPE_WIDTH_RATIO: f32 = 5.0 / 8.0;
pub const LANDSCAPE_HEIGHT_RATIO: f32 = 5.0 / 8.0;
pub const LANDSCAPE_MAX_FRAME_WIDTH: i32 = 1200; // 5/8 * 1920
pub const LANDSCAPE_MAX_FRAME_HEIGHT: i32 = 675; // 5/8 * 1080

pub const PORTRAIT_WIDTH_RATIO: f32 = 7.0 / 8.0;
pub const PORTRAIT_HEIGHT_RATIO: f32 = 4.0 / 8.0;
pub const PORTRAIT_MAX_FRAME_WIDTH: i32 = 945; // 7/8 * 1080
pub const PORTRAIT_MAX_FRAME_HEIGHT: i32 = 960; // 4/8 * 1920

/// Host view size in pixels. Snapshot taken on every layout change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

impl ViewportSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True once the host has laid the view out with a real size.
    pub fn is_laid_out(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Screen orientation reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Derive orientation from a screen size. Square screens count as landscape.
    pub fn from_size(size: ViewportSize) -> Self {
        if size.width < size.height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Size limits for one orientation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameConstraints {
    pub width_ratio: f32,
    pub height_ratio: f32,
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl FrameConstraints {
    pub const PORTRAIT: FrameConstraints = FrameConstraints {
        width_ratio: PORTRAIT_WIDTH_RATIO,
        height_ratio: PORTRAIT_HEIGHT_RATIO,
        min_width: MIN_FRAME_WIDTH,
        max_width: PORTRAIT_MAX_FRAME_WIDTH,
        min_height: MIN_FRAME_HEIGHT,
        max_height: PORTRAIT_MAX_FRAME_HEIGHT,
    };

    pub const LANDSCAPE: FrameConstraints = FrameConstraints {
        width_ratio: LANDSCAPE_WIDTH_RATIO,
        height_ratio: LANDSCAPE_HEIGHT_RATIO,
        min_width: MIN_FRAME_WIDTH,
        max_width: LANDSCAPE_MAX_FRAME_WIDTH,
        min_height: MIN_FRAME_HEIGHT,
        max_height: LANDSCAPE_MAX_FRAME_HEIGHT,
    };

    /// Reject ratios outside (0, 1] and inverted bounds.
    pub fn validate(&self) -> anyhow::Result<()> {
        let ratios = [("width_ratio", self.width_ratio), ("height_ratio", self.height_ratio)];
        for (name, ratio) in ratios {
            anyhow::ensure!(
                ratio > 0.0 && ratio <= 1.0,
                "{} must be in (0, 1], got {}",
                name,
                ratio
            );
        }
        anyhow::ensure!(
            self.min_width <= self.max_width,
            "min_width {} exceeds max_width {}",
            self.min_width,
            self.max_width
        );
        anyhow::ensure!(
            self.min_height <= self.max_height,
            "min_height {} exceeds max_height {}",
            self.min_height,
            self.max_height
        );
        Ok(())
    }

    /// Centered framing rectangle for this preset.
    ///
    /// Never panics: inverted bounds resolve min-first, and extreme viewport
    /// values saturate at the i32 range instead of overflowing.
    pub fn framing_rect(&self, viewport: ViewportSize) -> FramingRect {
        let width =
            dimension_in_range(self.width_ratio, viewport.width, self.min_width, self.max_width);
        let height = dimension_in_range(
            self.height_ratio,
            viewport.height,
            self.min_height,
            self.max_height,
        );

        // i32 division truncates toward zero, so oversized frames get symmetric negative offsets
        let left = viewport.width.saturating_sub(width) / 2;
        let top = viewport.height.saturating_sub(height) / 2;

        FramingRect::new(left, top, left.saturating_add(width), top.saturating_add(height))
    }
}

/// Portrait/landscape preset pair.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OrientedConstraints {
    pub portrait: FrameConstraints,
    pub landscape: FrameConstraints,
}

impl Default for OrientedConstraints {
    fn default() -> Self {
        Self {
            portrait: FrameConstraints::PORTRAIT,
            landscape: FrameConstraints::LANDSCAPE,
        }
    }
}

impl OrientedConstraints {
    pub fn for_orientation(&self, orientation: Orientation) -> &FrameConstraints {
        match orientation {
            Orientation::Portrait => &self.portrait,
            Orientation::Landscape => &self.landscape,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        use anyhow::Context;
        self.portrait.validate().context("portrait constraints")?;
        self.landscape.validate().context("landscape constraints")?;
        Ok(())
    }
}

/// Viewfinder bounds in view pixels. `left < right`, `top < bottom` for any valid preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FramingRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl FramingRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.left + self.width() / 2, self.top + self.height() / 2)
    }

    /// Zero-area or inverted.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Compute the framing rectangle for the active orientation.
///
/// Zero-sized viewports still yield a (degenerate) rectangle; hosts should not
/// draw it until a real layout size has been observed.
pub fn compute_framing_rect(
    viewport: ViewportSize,
    orientation: Orientation,
    constraints: &OrientedConstraints,
) -> FramingRect {
    let rect = constraints.for_orientation(orientation).framing_rect(viewport);
    trace!(
        "Framing rect for {}x{} ({}): {:?}",
        viewport.width,
        viewport.height,
        orientation.as_str(),
        rect
    );
    rect
}

/// `round(ratio * resolution)` snapped into `[hard_min, hard_max]`.
///
/// Checks `hard_min` first, so an inverted range yields a bound rather than a panic.
fn dimension_in_range(ratio: f32, resolution: i32, hard_min: i32, hard_max: i32) -> i32 {
    // float-to-int `as` saturates
    let dim = (ratio * resolution as f32).round() as i32;
    if dim < hard_min {
        return hard_min;
    }
    if dim > hard_max {
        return hard_max;
    }
    dim
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: i32, h: i32, orientation: Orientation) -> FramingRect {
        compute_framing_rect(ViewportSize::new(w, h), orientation, &OrientedConstraints::default())
    }

    #[test]
    fn test_portrait_phone() {
        let r = rect(1080, 1920, Orientation::Portrait);
        assert_eq!(r.width(), 945);
        assert_eq!(r.height(), 960);
        assert_eq!(r, FramingRect::new(67, 480, 1012, 1440));
    }

    #[test]
    fn test_landscape_phone() {
        let r = rect(1920, 1080, Orientation::Landscape);
        assert_eq!(r.width(), 1200);
        assert_eq!(r.height(), 675);
        assert_eq!(r, FramingRect::new(360, 202, 1560, 877));
    }

    #[test]
    fn test_small_view_snaps_to_min() {
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            let r = rect(100, 100, orientation);
            assert_eq!(r.width(), 240);
            assert_eq!(r.height(), 240);
            assert_eq!(r.left, -70);
            assert_eq!(r.top, -70);
            assert_eq!(r.right, 170);
            assert_eq!(r.bottom, 170);
        }
    }

    #[test]
    fn test_clamp_does_not_keep_aspect() {
        // Width hits max, height stays ratio-derived
        let r = rect(4000, 1000, Orientation::Landscape);
        assert_eq!(r.width(), 1200);
        assert_eq!(r.height(), 625);
    }

    #[test]
    fn test_ratio_is_rounded() {
        // 7/8 * 1001 = 875.875
        let r = rect(1001, 1920, Orientation::Portrait);
        assert_eq!(r.width(), 876);
    }

    #[test]
    fn test_bounds_and_centering_hold_everywhere() {
        let constraints = OrientedConstraints::default();
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            let c = constraints.for_orientation(orientation);
            for w in (0..=3000).step_by(37) {
                for h in (0..=3000).step_by(41) {
                    let size = ViewportSize::new(w, h);
                    let r = compute_framing_rect(size, orientation, &constraints);
                    assert!(r.width() >= c.min_width && r.width() <= c.max_width);
                    assert!(r.height() >= c.min_height && r.height() <= c.max_height);
                    assert!((r.left - (w - r.right)).abs() <= 1, "{}x{} {:?}", w, h, r);
                    assert!((r.top - (h - r.bottom)).abs() <= 1, "{}x{} {:?}", w, h, r);
                }
            }
        }
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let c = FrameConstraints {
            min_width: 500,
            max_width: 100,
            min_height: 900,
            max_height: 300,
            ..FrameConstraints::PORTRAIT
        };
        // Ratio results above both bounds: max wins
        let r = c.framing_rect(ViewportSize::new(1080, 1920));
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 300);

        // ratio result below min: min wins
        let r = c.framing_rect(ViewportSize::new(100, 100));
        assert_eq!(r.width(), 500);
        assert_eq!(r.height(), 900);
    }

    #[test]
    fn test_extreme_viewport_saturates() {
        let constraints = OrientedConstraints::default();
        for size in [
            ViewportSize::new(i32::MIN, 100),
            ViewportSize::new(100, i32::MIN),
            ViewportSize::new(i32::MAX, i32::MAX),
            ViewportSize::new(i32::MIN, i32::MAX),
        ] {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let r = compute_framing_rect(size, orientation, &constraints);
                let c = constraints.for_orientation(orientation);
                assert!(r.width() >= c.min_width && r.width() <= c.max_width, "{:?}", r);
                assert!(r.height() >= c.min_height && r.height() <= c.max_height, "{:?}", r);
            }
        }
    }

    #[test]
    fn test_center() {
        let r = rect(1080, 1920, Orientation::Portrait);
        assert_eq!(r.center(), (539, 960));
        assert!(!r.is_degenerate());
        assert!(FramingRect::new(10, 10, 10, 40).is_degenerate());
    }

    #[test]
    fn test_zero_viewport_is_well_defined() {
        let r = rect(0, 0, Orientation::Portrait);
        assert_eq!(r, FramingRect::new(-120, -120, 120, 120));
        assert!(!ViewportSize::new(0, 0).is_laid_out());
    }

    #[test]
    fn test_idempotent() {
        let a = rect(720, 1280, Orientation::Portrait);
        let b = rect(720, 1280, Orientation::Portrait);
        assert_eq!(a, b);
    }

    #[test]
    fn test_orientation_from_size() {
        assert_eq!(Orientation::from_size(ViewportSize::new(1080, 1920)), Orientation::Portrait);
        assert_eq!(Orientation::from_size(ViewportSize::new(1920, 1080)), Orientation::Landscape);
        assert_eq!(Orientation::from_size(ViewportSize::new(800, 800)), Orientation::Landscape);
    }

    #[test]
    fn test_validate() {
        assert!(OrientedConstraints::default().validate().is_ok());

        let mut c = FrameConstraints::PORTRAIT;
        c.width_ratio = 0.0;
        assert!(c.validate().is_err());

        let mut c = FrameConstraints::LANDSCAPE;
        c.min_height = 700;
        assert!(c.validate().is_err());
    }
}

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::widgets::viewfinder::{Orientation, ViewportSize};

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Orientation override for the computed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrientationArg {
    /// Portrait when the view is taller than wide, landscape otherwise
    Auto,
    Portrait,
    Landscape,
}

impl OrientationArg {
    pub fn resolve(self, size: ViewportSize) -> Orientation {
        match self {
            OrientationArg::Auto => Orientation::from_size(size),
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }

    /// `None` for auto, so interactive hosts re-derive it on every resize.
    pub fn fixed(self) -> Option<Orientation> {
        match self {
            OrientationArg::Auto => None,
            OrientationArg::Portrait => Some(Orientation::Portrait),
            OrientationArg::Landscape => Some(Orientation::Landscape),
        }
    }
}

/// Barcode viewfinder overlay: framing geometry and draw calls
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// View size in pixels
    #[arg(
        short = 's',
        long = "size",
        value_name = "WxH",
        default_value = "1080x1920",
        value_parser = parse_size
    )]
    pub size: ViewportSize,

    /// Screen orientation
    #[arg(short = 'r', long = "orientation", value_enum, default_value_t = OrientationArg::Auto)]
    pub orientation: OrientationArg,

    /// Viewfinder config file (JSON), overrides VIEWFINDER_CONFIG and the platform default
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the effective config to FILE and continue
    #[arg(long = "write-config", value_name = "FILE")]
    pub write_config: Option<PathBuf>,

    /// Print framing rect and draw commands as JSON
    #[arg(short = 'd', long = "dump")]
    pub dump: bool,

    /// Rasterize the overlay to a PNG file
    #[arg(long = "png", value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Open a preview window with the live overlay
    #[arg(short = 'w', long = "window")]
    pub window: bool,

    /// Enable debug logging to file (default: viewfinder.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Parse `WIDTHxHEIGHT`, e.g. `1080x1920`.
pub fn parse_size(s: &str) -> Result<ViewportSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let width = w.trim().parse::<i32>().map_err(|e| format!("bad width '{}': {}", w, e))?;
    let height = h.trim().parse::<i32>().map_err(|e| format!("bad height '{}': {}", h, e))?;
    if width < 0 || height < 0 {
        return Err(format!("size must not be negative, got {}x{}", width, height));
    }
    Ok(ViewportSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1080x1920").unwrap(), ViewportSize::new(1080, 1920));
        assert_eq!(parse_size("640X480").unwrap(), ViewportSize::new(640, 480));
        assert!(parse_size("1080").is_err());
        assert!(parse_size("ax1").is_err());
        assert!(parse_size("-5x10").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["viewfinder"]).unwrap();
        assert_eq!(args.size, ViewportSize::new(1080, 1920));
        assert_eq!(args.orientation, OrientationArg::Auto);
        assert_eq!(args.orientation.resolve(args.size), Orientation::Portrait);
        assert!(!args.dump);
    }

    #[test]
    fn test_args_flags() {
        let args = Args::try_parse_from([
            "viewfinder", "-s", "1920x1080", "-r", "portrait", "--dump", "-vv",
        ])
        .unwrap();
        assert_eq!(args.size, ViewportSize::new(1920, 1080));
        assert_eq!(args.orientation.fixed(), Some(Orientation::Portrait));
        assert!(args.dump);
        assert_eq!(args.verbosity, 2);
    }
}

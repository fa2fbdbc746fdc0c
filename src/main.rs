use viewfinder::cli::Args;
use viewfinder::config::ViewfinderConfig;
use viewfinder::shell;
use viewfinder::app;
use viewfinder::widgets::viewfinder::{
    Color, DrawList, FramingRect, ImageSurface, Orientation, Viewfinder, ViewportSize,
};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Stand-in preview color for PNG snapshots.
const SNAPSHOT_BG: Color = Color::rgba(70, 90, 80, 255);

#[derive(serde::Serialize)]
struct Dump<'a> {
    viewport: ViewportSize,
    orientation: Orientation,
    framing_rect: Option<&'a FramingRect>,
    draw: &'a DrawList,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .as_ref()
        .map(|p| p.clone().unwrap_or_else(|| PathBuf::from(shell::DEFAULT_LOG_FILE)));
    shell::init_logger(args.verbosity, log_path.as_deref())?;

    info!("Viewfinder starting...");
    debug!("Command-line args: {:?}", args);

    let config = ViewfinderConfig::load_or_default(args.config.as_deref())?;
    if let Some(path) = &args.write_config {
        config.save(path)?;
        info!("Config written to {}", path.display());
    }

    let mut viewfinder = Viewfinder::new(config);
    let orientation = args.orientation.resolve(args.size);
    viewfinder.on_layout_changed(args.size, orientation);

    if args.dump {
        let (w, h) = (args.size.width, args.size.height);
        let mut list = DrawList::new(w, h);
        viewfinder.on_draw_requested(&mut list);
        let dump = Dump {
            viewport: args.size,
            orientation,
            framing_rect: viewfinder.framing_rect(),
            draw: &list,
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }

    if let Some(path) = &args.png {
        anyhow::ensure!(
            args.size.is_laid_out(),
            "Cannot rasterize a {}x{} view",
            args.size.width,
            args.size.height
        );
        let (w, h) = (args.size.width as u32, args.size.height as u32);
        let mut surface = ImageSurface::with_background(w, h, SNAPSHOT_BG);
        viewfinder.on_draw_requested(&mut surface);
        surface.save(path)?;
        info!("Snapshot written to {}", path.display());
    }

    if args.window {
        app::run_window(viewfinder, args.orientation.fixed())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Preview window failed")?;
    } else if !args.dump && args.png.is_none() {
        match viewfinder.framing_rect() {
            Some(r) => println!(
                "{}x{} {}: [{}, {}, {}, {}] ({}x{})",
                args.size.width,
                args.size.height,
                orientation.as_str(),
                r.left,
                r.top,
                r.right,
                r.bottom,
                r.width(),
                r.height()
            ),
            None => println!("{}x{}: not laid out, no frame", args.size.width, args.size.height),
        }
    }

    Ok(())
}

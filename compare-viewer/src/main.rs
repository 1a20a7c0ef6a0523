mod sdl_surface;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use std::path::{Path, PathBuf};

use compare_viewer::{ComparisonViewer, ViewerConfig};
use sdl_surface::SdlSurface;
use shared::Direction;

trait SdlResultExt<T> {
    fn sdl_context(self, msg: &str) -> Result<T>;
}

impl<T> SdlResultExt<T> for std::result::Result<T, String> {
    fn sdl_context(self, msg: &str) -> Result<T> {
        self.map_err(|e| anyhow::anyhow!("{}: {}", msg, e))
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare PACT reconstructions against ground truth",
    long_about = None
)]
struct Args {
    #[arg(
        short,
        long,
        help = "Data root containing data/recon, data/tr and data/ground_truth (default: workspace root)"
    )]
    root: Option<PathBuf>,

    #[arg(short, long, help = "Display index to use (0-based)", default_value = "0")]
    display: u32,

    #[arg(long, help = "Canvas width in pixels", default_value = "1800")]
    width: u32,

    #[arg(long, help = "Canvas height in pixels", default_value = "1000")]
    height: u32,
}

/// Workspace root: the parent of this crate's manifest directory.
fn default_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = ViewerConfig {
        canvas_width: args.width,
        canvas_height: args.height,
        ..ViewerConfig::default()
    };
    let root = args.root.unwrap_or_else(default_root);
    info!("Data root: {}", root.display());
    let layout = config.layout(&root);

    let sdl_context = sdl2::init().map_err(|e| anyhow::anyhow!("SDL init failed: {}", e))?;
    let video_subsystem = sdl_context
        .video()
        .map_err(|e| anyhow::anyhow!("Video subsystem init failed: {}", e))?;

    let num_displays = video_subsystem
        .num_video_displays()
        .sdl_context("Failed to get display count")?;
    if args.display >= num_displays as u32 {
        anyhow::bail!(
            "Display {} not found (have {} displays)",
            args.display,
            num_displays
        );
    }
    let bounds = video_subsystem
        .display_bounds(args.display as i32)
        .sdl_context("Failed to get display bounds")?;

    let window_width = args.width.min(bounds.width());
    let window_height = args.height.min(bounds.height());
    let window = video_subsystem
        .window("PACT reconstruction comparison", window_width, window_height)
        .position(
            bounds.x() + (bounds.width() - window_width) as i32 / 2,
            bounds.y() + (bounds.height() - window_height) as i32 / 2,
        )
        .resizable()
        .build()
        .context("Failed to create window")?;

    let canvas = window
        .into_canvas()
        .build()
        .context("Failed to create canvas")?;
    let surface = SdlSurface::new(canvas, config.canvas_width, config.canvas_height);

    println!("Press \u{2190} (Left arrow) for the previous sample");
    println!("Press \u{2192} (Right arrow) for the next sample");

    let mut viewer =
        ComparisonViewer::initialize(layout, config, surface).context("Initial render failed")?;
    println!("Current index: {}", viewer.session().current());

    let mut event_pump = sdl_context
        .event_pump()
        .map_err(|e| anyhow::anyhow!("Failed to get event pump: {}", e))?;

    loop {
        match event_pump.wait_event() {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape | Keycode::Q),
                ..
            } => break,
            Event::KeyDown {
                keycode: Some(Keycode::Left),
                ..
            } => {
                viewer
                    .navigate(Direction::Previous)
                    .context("Failed to show previous sample")?;
            }
            Event::KeyDown {
                keycode: Some(Keycode::Right),
                ..
            } => {
                viewer
                    .navigate(Direction::Next)
                    .context("Failed to show next sample")?;
            }
            Event::Window {
                win_event: WindowEvent::Exposed | WindowEvent::SizeChanged(..),
                ..
            } => viewer.refresh().context("Failed to redraw window")?,
            _ => {}
        }
    }

    Ok(())
}

//! PixelPick - grid-based pixel art editor
//!
//! Replays a script of pointer and keyboard events against the editor and
//! writes the resulting cell map as JSON.

mod input;

use anyhow::Context;
use clap::Parser;
use pixelpick_config::{ConfigManager, PresetManager};
use pixelpick_core::{ChangeSink, ColorSpec, DrawList, MirrorTarget, PaintController};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PixelPick - paint, cycle and erase colors cell by cell
#[derive(Parser, Debug)]
#[command(name = "pixelpick")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// JSON event script to replay
    #[arg(short = 'e', long)]
    events: Option<PathBuf>,

    /// Write the cell map here instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Cell size in pixels
    #[arg(short = 's', long)]
    size: Option<u32>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Use a named palette preset
    #[arg(short = 'p', long)]
    preset: Option<String>,

    /// Additional preset file to load
    #[arg(long)]
    preset_file: Option<PathBuf>,

    /// Eraser color (hex or rgb())
    #[arg(long)]
    eraser: Option<String>,

    /// Write recorded draw commands to this file
    #[arg(long)]
    draw: Option<PathBuf>,

    /// Print the configuration JSON schema and exit
    #[arg(long)]
    print_schema: bool,

    /// List palette presets and exit
    #[arg(long)]
    list_presets: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for the cell map
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!(
                    "pixelpick={0},pixelpick_core={0},pixelpick_config={0}",
                    log_level
                )
            }),
        ))
        .init();

    tracing::debug!("Starting PixelPick v{}", env!("CARGO_PKG_VERSION"));

    if args.print_schema {
        let schema = pixelpick_config::schema::generate_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let mut presets = PresetManager::new();
    if let Some(ref path) = args.preset_file {
        presets
            .load_from_file(path)
            .with_context(|| format!("failed to load preset {}", path.display()))?;
    }

    if args.list_presets {
        for name in presets.list() {
            let description = presets
                .get(name)
                .and_then(|p| p.description.as_deref())
                .unwrap_or("");
            println!("{:<12} {}", name, description);
        }
        return Ok(());
    }

    let mut manager = match args.config {
        Some(ref path) => ConfigManager::with_path(path)?,
        None => ConfigManager::new()?,
    };
    manager.update(|config| apply_overrides(&args, config));

    let target = MirrorTarget::new();
    let options = manager
        .config()
        .editor_options(&presets, Some(ChangeSink::mirror(&target)))?;
    let mut editor = PaintController::with_canvas(options, DrawList::new())
        .context("failed to initialize editor")?;

    if let Some(ref path) = args.events {
        let events = input::load_script(path)
            .with_context(|| format!("failed to read events from {}", path.display()))?;
        let changes = input::replay(&mut editor, &events)?;
        tracing::info!("Applied {} cell changes", changes.len());
    }

    // Nothing painted yet: the mirror is still empty, serialize the fresh grid
    let map = match target.value() {
        value if value.is_empty() => serde_json::to_string(editor.cells())?,
        value => value,
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &map)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Cell map written to {}", path.display());
        }
        None => println!("{}", map),
    }

    if let Some(ref path) = args.draw {
        let commands = serde_json::to_string_pretty(editor.canvas().commands())?;
        std::fs::write(path, commands)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

/// CLI flags take precedence over file and environment settings
fn apply_overrides(args: &Args, config: &mut pixelpick_config::Config) {
    if let Some(size) = args.size {
        config.canvas.size = size;
    }
    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }
    if let Some(ref preset) = args.preset {
        config.palette.preset = Some(preset.clone());
    }
    if let Some(ref eraser) = args.eraser {
        config.palette.eraser_color = Some(ColorSpec::from(eraser.as_str()));
    }
}

//! layerstack - stacked 3D layer-model viewer
//!
//! Console front end: loads a model catalog, keeps a scene session and reads
//! viewer commands from a script or stdin.

mod commands;
mod config;
mod export;
mod font_utils;
mod panel;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{execute_command, parse_command, ViewerCommand};
use config::ViewerConfig;
use layerstack_assets::{builtin_catalog, catalog_from_file, ModelCatalog};
use layerstack_core::InspectionPanel;
use layerstack_ui3d::{BlockRaster, FontdueRaster, TextRaster, VisualizationSession};
use panel::ConsolePanel;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "layerstack")]
#[command(about = "View layered network models as a 3D stack", long_about = None)]
struct Args {
    /// Viewer configuration (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Extra model catalog (JSON) merged over the built-in models
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Model key to show at startup
    #[arg(long)]
    model: Option<String>,

    /// Font file for label text
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Draw labels with built-in block glyphs instead of a font
    #[arg(long, conflicts_with = "font")]
    block_glyphs: bool,

    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Export the startup scene to this directory and exit
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Print catalog keys and exit
    #[arg(long)]
    list_models: bool,

    /// Write the effective configuration to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // WARN by default; RUST_LOG overrides. Stdout is reserved for panel and command output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    info!("Starting layerstack v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => ViewerConfig::load_from_path(path),
        None => ViewerConfig::load(),
    };

    if let Some(path) = &args.write_config {
        config
            .save_to_path(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let catalog = load_catalog(args.catalog.as_deref().or(config.catalog_path.as_deref()))?;
    if args.list_models {
        for (key, model) in catalog.iter() {
            println!("{key}: {} ({} layers)", model.name, model.len());
        }
        return Ok(());
    }

    let raster = select_raster(&args, &config)?;
    let mut session = VisualizationSession::new(
        config.session_config(),
        catalog,
        raster,
        ConsolePanel::stdout(),
    )
    .context("invalid scene settings in configuration")?;

    let initial = args.model.as_deref().unwrap_or(&config.default_model);
    session.load_model(initial);

    if let Some(dir) = &args.export_dir {
        let written = export::export_scene(&session, dir)?;
        println!("Exported {} labels to {}", written.len(), dir.display());
        return Ok(());
    }

    match &args.script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            run_commands(&mut session, BufReader::new(file))
        }
        None => run_commands(&mut session, io::stdin().lock()),
    }
}

fn load_catalog(extra: Option<&Path>) -> Result<ModelCatalog> {
    let mut catalog = builtin_catalog();
    if let Some(path) = extra {
        let loaded = catalog_from_file(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?;
        catalog.merge(loaded);
    }
    Ok(catalog)
}

/// An explicit font must load; otherwise fall back from a system font to block glyphs.
fn select_raster(args: &Args, config: &ViewerConfig) -> Result<Box<dyn TextRaster>> {
    if args.block_glyphs {
        return Ok(Box::new(BlockRaster));
    }
    if let Some(path) = args.font.as_ref().or(config.font_path.as_ref()) {
        let raster = FontdueRaster::from_file(path)
            .with_context(|| format!("failed to load font {}", path.display()))?;
        return Ok(Box::new(raster));
    }

    let font = &config.label.font;
    let found = font_utils::find_system_font(&font.family, font.bold)
        .and_then(|path| FontdueRaster::from_file(&path).map_err(anyhow::Error::from));
    match found {
        Ok(raster) => Ok(Box::new(raster)),
        Err(err) => {
            warn!("{err:#}. Falling back to block glyphs");
            Ok(Box::new(BlockRaster))
        }
    }
}

fn run_commands<P: InspectionPanel>(
    session: &mut VisualizationSession<P>,
    input: impl BufRead,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(err) => {
                println!("Error: {err}");
                continue;
            }
        };
        if cmd == ViewerCommand::Quit {
            break;
        }
        for out in execute_command(session, cmd).lines {
            println!("{out}");
        }
    }
    Ok(())
}

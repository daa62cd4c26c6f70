// ABOUTME: Main application entry point.
// ABOUTME: Parses the command line, then opens the window or runs a headless command.

mod painter;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bst_app::{AppState, Properties};
use bst_core::storage::{format_keys, load_tree};
use bst_core::{Config, DataDir, Theme, TraversalOrder, TreeKind};

#[derive(Parser, Debug)]
#[command(name = "bst-visualizer", version, about = "Build and inspect binary search trees")]
struct Cli {
    /// Directory holding the autosaved tree and color settings
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (defaults to ~/.config/bst-visualizer/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a saved tree to an image without opening a window
    Export {
        /// Tree save file (pre-order keys)
        tree: PathBuf,
        /// Output image; the extension picks png, jpg or bmp
        output: PathBuf,
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
        /// Highlight the search path towards this key
        #[arg(long, allow_hyphen_values = true)]
        find: Option<i32>,
        /// Tree kind to replay the keys into (plain, avl or red-black)
        #[arg(long)]
        kind: Option<TreeKind>,
    },
    /// Print the properties of a saved tree
    Show {
        tree: PathBuf,
        /// Print only this traversal (in, pre or post)
        #[arg(long)]
        order: Option<TraversalOrder>,
        /// Tree kind to replay the keys into (plain, avl or red-black)
        #[arg(long)]
        kind: Option<TreeKind>,
    },
}

/// An explicit `--config` must load; the default location may be missing
fn load_config(explicit: Option<&Path>, path: Option<&Path>) -> Result<Config> {
    match (explicit, path) {
        (Some(path), _) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        (None, Some(path)) => Ok(Config::load_or_default(path)),
        (None, None) => Ok(Config::default()),
    }
}

fn data_dir(cli: &Cli, config: &Config) -> Result<DataDir> {
    match cli.data_dir.as_ref().or(config.data_dir.as_ref()) {
        Some(root) => Ok(DataDir::new(root)),
        None => DataDir::at_default().context("Failed to locate data directory"),
    }
}

/// Colors saved by the window, or the defaults
fn saved_theme(data: &DataDir) -> Theme {
    let path = data.settings_path();
    if !path.exists() {
        return Theme::default();
    }
    match Theme::load(&path) {
        Ok((theme, _)) => theme,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            Theme::default()
        }
    }
}

fn export(
    config: &Config,
    data: &DataDir,
    tree_path: &Path,
    output: &Path,
    scale: f32,
    find: Option<i32>,
    kind: TreeKind,
) -> Result<()> {
    if !(scale.is_finite() && scale > 0.0) {
        anyhow::bail!("Scale must be a positive number, got {}", scale);
    }
    let tree = load_tree(tree_path, kind)
        .with_context(|| format!("Failed to load tree from {}", tree_path.display()))?;
    let layout = bst_layout::layout(&tree, &config.layout);
    let highlight = find
        .map(|key| tree.search_path(key).visited)
        .unwrap_or_default();

    let max_pixels = config.export.max_pixels;
    let theme = saved_theme(data);
    bst_renderer::export_image(&layout, &theme, scale, &highlight, max_pixels, output)
        .with_context(|| format!("Failed to export {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn show(tree_path: &Path, order: Option<TraversalOrder>, kind: TreeKind) -> Result<()> {
    let tree = load_tree(tree_path, kind)
        .with_context(|| format!("Failed to load tree from {}", tree_path.display()))?;
    match order {
        Some(order) => println!("{}", format_keys(&tree.traversal(order))),
        None => print!("{}", Properties::of(&tree)),
    }
    Ok(())
}

fn run_window(config: &Config, config_path: Option<PathBuf>, data: DataDir) -> Result<()> {
    let mut state = AppState::restore(config, data);
    if let Some(path) = config_path {
        state = state.with_config_path(path);
    }
    let window = config.window;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Binary Tree Visualization")
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.width.min(640.0), window.min_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Binary Tree Visualization",
        options,
        Box::new(|_cc| Ok(Box::new(ui::VisualizerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("Window closed with an error: {}", e))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().or_else(Config::default_path);
    let config = load_config(cli.config.as_deref(), config_path.as_deref())?;
    let data = data_dir(&cli, &config)?;

    match &cli.command {
        Some(Command::Export {
            tree,
            output,
            scale,
            find,
            kind,
        }) => {
            let kind = kind.unwrap_or(config.tree_kind);
            export(&config, &data, tree, output, *scale, *find, kind)
        }
        Some(Command::Show { tree, order, kind }) => {
            show(tree, *order, kind.unwrap_or(config.tree_kind))
        }
        None => {
            tracing::info!("Starting bst-visualizer");
            run_window(&config, config_path, data)
        }
    }
}

// File: crates/jsonplot/src/main.rs
// Summary: Loads a graph JSON file, renders every graph and writes one PNG per graph.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use graph_render::{save_all, theme, RenderOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jsonplot")]
#[command(about = "Render JSON line-graph descriptions to PNG", long_about = None)]
struct Cli {
    /// JSON file holding one graph object or an array of them.
    input: PathBuf,

    /// Directory for graphs without their own `graph_filepath`.
    #[arg(short = 'o', long, default_value = ".")]
    out_dir: PathBuf,

    /// Theme preset (light, dark, solarized-dark, solarized-light, high-contrast-dark).
    #[arg(long, env = "JSONPLOT_THEME", default_value = "light")]
    theme: String,

    /// Pixels per inch; scales fonts, line widths and `dimensions`.
    #[arg(long)]
    dpi: Option<f32>,

    /// Figure width in pixels when a graph has no `dimensions`.
    #[arg(long)]
    width: Option<i32>,

    /// Figure height in pixels when a graph has no `dimensions`.
    #[arg(long)]
    height: Option<i32>,

    /// Debug logging unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::default();
        opts.theme = theme::find(&self.theme);
        if let Some(dpi) = self.dpi { opts.dpi = dpi; }
        if let Some(w) = self.width { opts.width = w; }
        if let Some(h) = self.height { opts.height = h; }
        opts
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let graphs = graph_spec::parse_file(&cli.input)
        .with_context(|| format!("failed to load graphs from '{}'", cli.input.display()))?;
    tracing::info!(input = %cli.input.display(), graphs = graphs.len(), "loaded");

    let opts = cli.render_options();
    if !opts.theme.name.eq_ignore_ascii_case(&cli.theme) {
        tracing::warn!(requested = %cli.theme, "unknown theme, using {}", opts.theme.name);
    }

    let written = save_all(&graphs, &opts, &input_stem(&cli.input), &cli.out_dir)?;
    for path in &written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn input_stem(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

// File: crates/graph-render/src/output.rs
// Summary: Chooses output file names and renders + saves every graph of a collection.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use graph_spec::{GraphCollection, GraphSpec};

use crate::figure::{build_graph, RenderOptions};

/// Where a graph should be written. The graph's own `graph_filepath` wins
/// (".png" is appended unless it already ends in ".png"); otherwise the file goes
/// to `out_dir` named after the input: `<stem>.png` for a single graph,
/// `<stem>_<index>.png` inside a collection.
pub fn output_path(graph: &GraphSpec, index: Option<usize>, input_stem: &str, out_dir: &Path) -> PathBuf {
    if let Some(fp) = graph.graph_filepath.as_deref().filter(|s| !s.is_empty()) {
        let is_png = Path::new(fp)
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        return if is_png { PathBuf::from(fp) } else { PathBuf::from(format!("{fp}.png")) };
    }
    let stem = if input_stem.is_empty() { "graph" } else { input_stem };
    match index {
        Some(i) => out_dir.join(format!("{stem}_{i}.png")),
        None => out_dir.join(format!("{stem}.png")),
    }
}

/// Render and save each graph in order; each figure is dropped as soon as
/// it has been written. Returns the written paths.
pub fn save_all(graphs: &GraphCollection, opts: &RenderOptions, input_stem: &str, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let indexed: Vec<(Option<usize>, &GraphSpec)> = match graphs {
        GraphCollection::Single(g) => vec![(None, g)],
        GraphCollection::Many(gs) => gs.iter().enumerate().map(|(i, g)| (Some(i), g)).collect(),
    };

    let mut written = Vec::with_capacity(indexed.len());
    for (index, graph) in indexed {
        let path = output_path(graph, index, input_stem, out_dir);
        let figure = build_graph(graph, opts)
            .with_context(|| format!("rendering graph {}", index.map_or_else(|| "0".to_string(), |i| i.to_string())))?;
        figure.save_png(&path)?;
        tracing::info!(path = %path.display(), width = figure.width(), height = figure.height(), "wrote figure");
        written.push(path);
    }
    Ok(written)
}

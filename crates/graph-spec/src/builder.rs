// File: crates/graph-spec/src/builder.rs
// Summary: Producer side of the graph JSON format: accumulate parameters and series, write JSON.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, SpecError};
use crate::model::GraphSpec;
use crate::normalize::apply_defaults;

pub const SERIES_KEY: &str = "series";
pub const DATA_KEY: &str = "data";

/// Intermediate representation for a graph under construction. Serializes
/// graph-level parameters at the top level and one object per series with
/// its parameters plus a `data` array of `[x, y]` pairs.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    graph_parameters: Map<String, Value>,
    series_parameters: Vec<Map<String, Value>>,
    series_data: Vec<Vec<(f64, f64)>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `params` into the graph-level parameters; later keys win.
    pub fn set_parameters<I, K, V>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (k, v) in params {
            self.graph_parameters.insert(k.into(), v.into());
        }
        self
    }

    /// Append a series with string parameters (`label`, `style`) and its points.
    pub fn add_series<I, K, V>(&mut self, params: I, data: Vec<(f64, f64)>) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = params
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        self.series_parameters.push(params);
        self.series_data.push(data);
        self
    }

    pub fn series_count(&self) -> usize {
        self.series_data.len()
    }

    pub fn to_value(&self) -> Value {
        let mut graph = self.graph_parameters.clone();
        let series = self
            .series_parameters
            .iter()
            .zip(&self.series_data)
            .map(|(params, data)| {
                let mut s = params.clone();
                let pairs = data.iter().map(|&(x, y)| Value::from(vec![x, y])).collect();
                s.insert(DATA_KEY.to_string(), Value::Array(pairs));
                Value::Object(s)
            })
            .collect();
        graph.insert(SERIES_KEY.to_string(), Value::Array(series));
        Value::Object(graph)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value())?)
    }

    pub fn write_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json(&self.to_value(), path.as_ref())
    }

    /// Normalize and validate the accumulated graph.
    pub fn build(&self) -> Result<GraphSpec> {
        let mut graph = self.to_value();
        if let Value::Object(map) = &mut graph {
            apply_defaults(map);
        }
        GraphSpec::from_value(&graph)
    }
}

/// Write several graphs as one JSON array, the shape that loads as `Many`.
pub fn write_collection(graphs: &[GraphBuilder], path: impl AsRef<Path>) -> Result<()> {
    let doc = Value::Array(graphs.iter().map(GraphBuilder::to_value).collect());
    write_json(&doc, path.as_ref())
}

fn write_json(doc: &Value, path: &Path) -> Result<()> {
    let text = serde_json::to_string(doc)?;
    let io_err = |source: std::io::Error| SpecError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, text).map_err(io_err)?;
    tracing::debug!(path = %path.display(), "wrote graph JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_parameters_and_series() {
        let mut g = GraphBuilder::new();
        g.set_parameters([("graph_filepath", "out/re")])
            .add_series([("label", "re_gc0"), ("style", "-")], vec![(0.0, 1.0), (1.0, 0.5)]);
        assert_eq!(
            g.to_value(),
            json!({
                "graph_filepath": "out/re",
                "series": [{ "label": "re_gc0", "style": "-", "data": [[0.0, 1.0], [1.0, 0.5]] }]
            })
        );
    }

    #[test]
    fn later_parameters_override() {
        let mut g = GraphBuilder::new();
        g.set_parameters([("xlabel", json!("a"))]).set_parameters([("xlabel", json!("b"))]);
        assert_eq!(g.to_value()["xlabel"], json!("b"));
    }

    #[test]
    fn build_applies_defaults() {
        let mut g = GraphBuilder::new();
        g.add_series([("label", "poles"), ("style", "k.")], vec![(1.0, 2.0)]);
        let spec = g.build().unwrap();
        assert_eq!(spec.series.len(), 1);
        assert!((spec.caption_font_size.points() - 12.0).abs() < 1e-9);
    }
}

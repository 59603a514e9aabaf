// File: crates/graph-render/tests/output.rs
// Purpose: save_all writes one PNG per graph under the expected names.

use std::path::PathBuf;

use graph_render::{save_all, RenderOptions};
use graph_spec::parse_str;
use serde_json::json;

fn small_opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 240;
    opts.draw_labels = false;
    opts
}

#[test]
fn collection_writes_indexed_and_named_files() {
    let out_dir = PathBuf::from("target/test_out/save_all");
    let named = out_dir.join("named/poles");
    let doc = json!([
        { "series": [{ "label": "re", "style": "-", "data": [[0, 0], [1, 1]] }] },
        {
            "series": [{ "label": "poles", "style": "k.", "data": [[0.1, 0.2]] }],
            "graph_filepath": named.to_string_lossy()
        }
    ]);
    let json = serde_json::to_string(&doc).unwrap();
    let graphs = parse_str(&json).unwrap();

    let written = save_all(&graphs, &small_opts(), "run", &out_dir).unwrap();
    assert_eq!(written, vec![out_dir.join("run_0.png"), out_dir.join("named/poles.png")]);
    for path in &written {
        let bytes = std::fs::read(path).expect("file written");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{} is not a PNG", path.display());
        let img = image::load_from_memory(&bytes).expect("decodes");
        assert_eq!((img.width(), img.height()), (320, 240));
    }
}

#[test]
fn single_graph_uses_plain_stem() {
    let out_dir = PathBuf::from("target/test_out/save_single");
    let graphs = parse_str(r#"{"series": []}"#).unwrap();
    let written = save_all(&graphs, &small_opts(), "solo", &out_dir).unwrap();
    assert_eq!(written, vec![out_dir.join("solo.png")]);
    assert!(written[0].exists());
}

// File: crates/graph-spec/tests/load.rs
// Purpose: End-to-end loading of graph JSON from strings and files.

use graph_spec::{
    parse_file, parse_str, parse_value, write_collection, FontSize, GraphBuilder, GraphCollection, NamedSize, SpecError,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn out_path(name: &str) -> std::path::PathBuf {
    let p = std::path::PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(p.parent().unwrap()).unwrap();
    p
}

#[test]
fn single_graph_gets_default_caption_font_size() {
    let doc = parse_value(r#"{"series":[{"x":[1,2],"y":[3,4],"style":"-","label":"A"}]}"#).unwrap();
    assert_eq!(doc["caption_font_size"], json!("large"));

    match parse_str(r#"{"series":[{"x":[1,2],"y":[3,4],"style":"-","label":"A"}]}"#).unwrap() {
        GraphCollection::Single(g) => {
            assert_eq!(g.caption_font_size, FontSize::Named(NamedSize::Large));
            assert_eq!(g.series[0].points, vec![(1.0, 3.0), (2.0, 4.0)]);
            assert_eq!(g.series[0].label, "A");
        }
        GraphCollection::Many(_) => panic!("object must load as a single graph"),
    }
}

#[test]
fn array_defaults_first_and_preserves_second() {
    let text = r#"[
        {"series": [{"data": [[0, 0], [1, 1]], "style": "r-", "label": "a"}]},
        {"series": [{"data": [[0, 1]], "style": "k.", "label": "b"}], "caption_font_size": 10}
    ]"#;

    let doc = parse_value(text).unwrap();
    assert_eq!(doc[0]["caption_font_size"], json!("large"));
    assert_eq!(doc[1]["caption_font_size"], json!(10));

    let graphs = parse_str(text).unwrap();
    assert_eq!(graphs.len(), 2);
    let sizes: Vec<FontSize> = graphs.iter().map(|g| g.caption_font_size).collect();
    assert_eq!(sizes, vec![FontSize::Named(NamedSize::Large), FontSize::Points(10.0)]);
}

#[test]
fn empty_array_is_an_empty_collection() {
    let graphs = parse_str("[]").unwrap();
    assert!(graphs.is_empty());
    assert!(matches!(graphs, GraphCollection::Many(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = parse_file("target/test_out/does/not/exist.json").unwrap_err();
    assert!(matches!(err, SpecError::Io { .. }));
    assert!(err.to_string().contains("exist.json"));
}

#[test]
fn builder_output_loads_back() {
    let mut re = GraphBuilder::new();
    re.set_parameters([("graph_filepath", json!("out_re")), ("dimensions", json!([4.0, 3.0]))])
        .add_series([("label", "re_gc0"), ("style", "-")], vec![(-1.0, 0.5), (0.0, 1.0), (1.0, 0.25)]);
    let mut poles = GraphBuilder::new();
    poles.add_series([("label", "poles"), ("style", "k.")], vec![(0.1, 0.2)]);

    let path = out_path("builder_roundtrip.json");
    write_collection(&[re.clone(), poles], &path).unwrap();

    let graphs = parse_file(&path).unwrap().into_vec();
    assert_eq!(graphs.len(), 2);
    assert_eq!(graphs[0], re.build().unwrap());
    assert_eq!(graphs[0].graph_filepath.as_deref(), Some("out_re"));
    assert_eq!(graphs[0].dimensions, Some((4.0, 3.0)));
    assert_eq!(graphs[1].series[0].style.as_str(), "k.");
}

#[test]
fn single_builder_file_loads_as_single() {
    let mut g = GraphBuilder::new();
    g.add_series([("label", "im_gc0"), ("style", "b--")], vec![(0.0, 0.0), (2.0, 1.0)]);
    let path = out_path("builder_single.json");
    g.write_json_file(&path).unwrap();
    assert!(matches!(parse_file(&path).unwrap(), GraphCollection::Single(_)));
}

#[test]
fn normalized_graph_serializes_back_to_loadable_json() {
    let text = r#"{
        "series": [
            {"label": "re_gc0", "style": "C1--o", "x": [0, 0.5], "y": [1, -2]},
            {"label": "poles", "style": "k.", "data": [[0.1, 0.2]]}
        ],
        "caption_font_size": "x-small",
        "dimensions": [6.4, 4.8],
        "xlabel": "kx"
    }"#;
    let GraphCollection::Single(graph) = parse_str(text).unwrap() else {
        panic!("object must load as a single graph");
    };

    let json = graph.to_json_string().unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["caption_font_size"], json!("x-small"));
    assert_eq!(doc["series"][0]["style"], json!("C1--o"));
    assert_eq!(doc["series"][0]["data"], json!([[0.0, 1.0], [0.5, -2.0]]));
    assert!(doc.get("graph_filepath").is_none());

    match parse_str(&json).unwrap() {
        GraphCollection::Single(back) => assert_eq!(back, graph),
        GraphCollection::Many(_) => panic!("serialized graph must stay a single object"),
    }

    let mut sized = graph.clone();
    sized.caption_font_size = FontSize::Points(10.0);
    let back = parse_str(&sized.to_json_string().unwrap()).unwrap().into_vec();
    assert_eq!(back[0].caption_font_size, FontSize::Points(10.0));
}

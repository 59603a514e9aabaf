// File: crates/graph-render/tests/legend.rs
// Purpose: The caption font size drives the legend; hidden labels stay out of it.

use graph_render::{build_graph, RenderOptions};
use graph_spec::{parse_str, FontSize, GraphSpec, NamedSize};

fn graphs(json: &str) -> Vec<GraphSpec> {
    parse_str(json).expect("valid graph json").into_vec()
}

fn opts() -> RenderOptions {
    let mut o = RenderOptions::default();
    o.draw_labels = false; // layout without font metrics
    o
}

#[test]
fn legend_font_follows_caption_font_size() {
    let gs = graphs(
        r#"[{"series": [{"label": "a", "style": "-", "data": [[0, 0], [1, 1]]}]},
            {"series": [{"label": "a", "style": "-", "data": [[0, 0], [1, 1]]}], "caption_font_size": 10}]"#,
    );
    let defaulted = build_graph(&gs[0], &opts()).unwrap();
    let explicit = build_graph(&gs[1], &opts()).unwrap();

    assert_eq!(defaulted.legend_font().size, FontSize::Named(NamedSize::Large));
    assert!((defaulted.legend_font().pixels - 12.0 * 100.0 / 72.0).abs() < 1e-3);
    assert_eq!(explicit.legend_font().size, FontSize::Points(10.0));
    assert!((explicit.legend_font().pixels - 10.0 * 100.0 / 72.0).abs() < 1e-3);

    // Bigger font, bigger legend box.
    let big = defaulted.legend_area().expect("legend shown");
    let small = explicit.legend_area().expect("legend shown");
    assert!(big.height() > small.height());
}

#[test]
fn legend_sits_in_upper_right_of_plot() {
    let g = graphs(r#"{"series": [{"label": "poles", "style": "k.", "data": [[0, 0], [0.1, 0.1]]}]}"#);
    let fig = build_graph(&g[0], &opts()).unwrap();
    let plot = fig.plot_area();
    let legend = fig.legend_area().expect("legend shown");
    assert!(legend.right <= plot.right && legend.top >= plot.top);
    assert!(legend.left > (plot.left + plot.right) * 0.5);
    assert!(legend.bottom < (plot.top + plot.bottom) * 0.5);

    // The frame is drawn in the theme's legend border color, not the background.
    let mid_y = ((legend.top + legend.bottom) * 0.5) as u32;
    let [r, g, b, _] = fig.pixel(legend.left as u32, mid_y).unwrap();
    assert_ne!((r, g, b), (255, 255, 255));
}

#[test]
fn hidden_labels_are_left_out() {
    let g = graphs(
        r#"{"series": [{"label": "", "style": "-", "data": [[0, 0], [1, 1]]},
                       {"label": "_nolegend_", "style": "--", "data": [[0, 1], [1, 0]]}]}"#,
    );
    let fig = build_graph(&g[0], &opts()).unwrap();
    assert!(fig.legend_area().is_none());
    // The font configuration is still computed for the graph.
    assert_eq!(fig.legend_font().size, FontSize::Named(NamedSize::Large));
}

#[test]
fn legend_grows_with_entries() {
    let one = graphs(r#"{"series": [{"label": "a", "style": "-", "data": [[0, 0]]}]}"#);
    let three = graphs(
        r#"{"series": [{"label": "a", "style": "-", "data": [[0, 0]]},
                       {"label": "b", "style": "o", "data": [[1, 1]]},
                       {"label": "c", "style": ":", "data": [[2, 0]]}]}"#,
    );
    let h1 = build_graph(&one[0], &opts()).unwrap().legend_area().unwrap().height();
    let h3 = build_graph(&three[0], &opts()).unwrap().legend_area().unwrap().height();
    assert!(h3 > h1 * 2.0);
}

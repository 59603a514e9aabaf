// File: crates/graph-render/src/lib.rs
// Summary: Renderer entry point; exports figure construction, render options and output helpers.

pub mod axis;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod marker;
pub mod output;
pub mod scale;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use figure::{build_graph, build_graphs, Figure, RenderOptions};
pub use geometry::RectF;
pub use legend::FontConfig;
pub use output::{output_path, save_all};
pub use text::TextShaper;
pub use theme::Theme;
pub use ticks::{PlainTickFormatter, TickFormatter};
pub use view::DataBounds;

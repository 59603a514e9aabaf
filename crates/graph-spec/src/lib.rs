// File: crates/graph-spec/src/lib.rs
// Summary: Graph description entry point; exports loader, normalizer, typed model and builder.

pub mod builder;
pub mod error;
pub mod load;
pub mod model;
pub mod normalize;
pub mod style;

pub use builder::{write_collection, GraphBuilder};
pub use error::{Result, SpecError};
pub use load::{parse_file, parse_str, parse_value};
pub use model::{FontSize, GraphCollection, GraphSpec, NamedSize, SeriesSpec};
pub use normalize::{apply_defaults, normalize_value, CAPTION_FONT_SIZE_KEY, DEFAULT_CAPTION_FONT_SIZE};
pub use style::{Color, LineFormat, LineStyle, Marker};

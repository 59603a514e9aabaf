// File: crates/graph-spec/src/model.rs
// Summary: Typed graph model (GraphSpec, SeriesSpec, FontSize) with a validating constructor.
// Notes:
// - Construction from JSON fails fast with the JSON path of the offending
//   value instead of deferring key/shape errors to render time.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, SpecError};
use crate::normalize::{kind, CAPTION_FONT_SIZE_KEY, DEFAULT_CAPTION_FONT_SIZE};
use crate::style::LineFormat;

/// Point size that `medium` maps to.
pub const BASE_FONT_POINTS: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedSize {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
    Smaller,
    Larger,
}

impl NamedSize {
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "xx-small" => NamedSize::XxSmall,
            "x-small" => NamedSize::XSmall,
            "small" => NamedSize::Small,
            "medium" => NamedSize::Medium,
            "large" => NamedSize::Large,
            "x-large" => NamedSize::XLarge,
            "xx-large" => NamedSize::XxLarge,
            "smaller" => NamedSize::Smaller,
            "larger" => NamedSize::Larger,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            NamedSize::XxSmall => "xx-small",
            NamedSize::XSmall => "x-small",
            NamedSize::Small => "small",
            NamedSize::Medium => "medium",
            NamedSize::Large => "large",
            NamedSize::XLarge => "x-large",
            NamedSize::XxLarge => "xx-large",
            NamedSize::Smaller => "smaller",
            NamedSize::Larger => "larger",
        }
    }

    /// Scale relative to [`BASE_FONT_POINTS`]; steps are powers of 1.2.
    pub fn scale(self) -> f64 {
        match self {
            NamedSize::XxSmall => 0.579,
            NamedSize::XSmall => 0.694,
            NamedSize::Small | NamedSize::Smaller => 0.833,
            NamedSize::Medium => 1.0,
            NamedSize::Large | NamedSize::Larger => 1.2,
            NamedSize::XLarge => 1.44,
            NamedSize::XxLarge => 1.728,
        }
    }
}

/// Caption/legend font size descriptor: a named size or a point size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    Named(NamedSize),
    Points(f64),
}

impl FontSize {
    pub fn points(&self) -> f64 {
        match self {
            FontSize::Named(n) => BASE_FONT_POINTS * n.scale(),
            FontSize::Points(p) => *p,
        }
    }

    fn from_value(v: &Value, path: &str) -> Result<Self> {
        match v {
            Value::String(s) => {
                if let Some(named) = NamedSize::parse(s) {
                    return Ok(FontSize::Named(named));
                }
                match s.trim().parse::<f64>() {
                    Ok(p) => Self::points_checked(p, path),
                    Err(_) => Err(SpecError::schema(path, format!("unknown font size {s:?}"))),
                }
            }
            Value::Number(n) => match n.as_f64() {
                Some(p) => Self::points_checked(p, path),
                None => Err(SpecError::schema(path, "font size is not representable as f64")),
            },
            other => Err(SpecError::schema(
                path,
                format!("expected a font size name or number, found {}", kind(other)),
            )),
        }
    }

    fn points_checked(p: f64, path: &str) -> Result<Self> {
        if p.is_finite() && p > 0.0 {
            Ok(FontSize::Points(p))
        } else {
            Err(SpecError::schema(path, format!("font size must be positive, got {p}")))
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Named(NamedSize::Large)
    }
}

impl Serialize for FontSize {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FontSize::Named(n) => serializer.serialize_str(n.name()),
            FontSize::Points(p) => serializer.serialize_f64(*p),
        }
    }
}

/// One line in a chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub label: String,
    pub style: LineFormat,
    #[serde(rename = "data")]
    pub points: Vec<(f64, f64)>,
}

impl SeriesSpec {
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.0)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.1)
    }

    fn from_value(v: &Value, path: &str) -> Result<Self> {
        let obj = expect_object(v, path)?;

        let label = required_str(obj, "label", path)?.to_string();
        let style = LineFormat::parse(required_str(obj, "style", path)?)?;

        let points = match (obj.get("data"), obj.get("x"), obj.get("y")) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(SpecError::schema(path, "both `data` and `x`/`y` given"));
            }
            (Some(data), None, None) => points_from_pairs(data, &join(path, "data"))?,
            (None, Some(x), Some(y)) => points_from_columns(x, y, path)?,
            (None, Some(_), None) => return Err(SpecError::schema(path, "`x` given without `y`")),
            (None, None, Some(_)) => return Err(SpecError::schema(path, "`y` given without `x`")),
            (None, None, None) => {
                return Err(SpecError::schema(path, "missing required key `data` (or `x` and `y`)"));
            }
        };

        Ok(SeriesSpec { label, style, points })
    }
}

/// Normalized description of one chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphSpec {
    pub series: Vec<SeriesSpec>,
    pub caption_font_size: FontSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_filepath: Option<String>,
    /// Figure size in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xlabel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ylabel: Option<String>,
}

impl GraphSpec {
    /// Validate a (normalized) JSON graph object. A missing caption font
    /// size falls back to the default, so un-normalized input is accepted too.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_at(value, "")
    }

    /// The graph in its JSON form, defaults included. The output loads
    /// back through `parse_str` unchanged.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn from_value_at(value: &Value, path: &str) -> Result<Self> {
        let obj = expect_object(value, if path.is_empty() { "$" } else { path })?;

        let series_path = join(path, "series");
        let series = match obj.get("series") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, s)| SeriesSpec::from_value(s, &format!("{series_path}[{i}]")))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(SpecError::schema(series_path, format!("expected an array, found {}", kind(other))));
            }
            None => return Err(SpecError::schema(series_path, "missing required key `series`")),
        };

        let font_path = join(path, CAPTION_FONT_SIZE_KEY);
        let caption_font_size = match obj.get(CAPTION_FONT_SIZE_KEY) {
            Some(v) => FontSize::from_value(v, &font_path)?,
            None => FontSize::from_value(&Value::String(DEFAULT_CAPTION_FONT_SIZE.into()), &font_path)?,
        };

        let dimensions = match obj.get("dimensions") {
            None | Some(Value::Null) => None,
            Some(v) => {
                let dims_path = join(path, "dimensions");
                let (w, h) = pair(v, &dims_path)?;
                if !(w > 0.0 && h > 0.0) {
                    return Err(SpecError::schema(dims_path, format!("dimensions must be positive, got [{w}, {h}]")));
                }
                Some((w, h))
            }
        };

        let spec = GraphSpec {
            series,
            caption_font_size,
            graph_filepath: optional_str(obj, "graph_filepath", path)?,
            dimensions,
            xlabel: optional_str(obj, "xlabel", path)?,
            ylabel: optional_str(obj, "ylabel", path)?,
        };
        tracing::trace!(series = spec.series.len(), "validated graph");
        Ok(spec)
    }
}

/// A single graph or an ordered list of graphs, decided by the JSON shape.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphCollection<T = GraphSpec> {
    Single(T),
    Many(Vec<T>),
}

impl<T> GraphCollection<T> {
    pub fn len(&self) -> usize {
        match self {
            GraphCollection::Single(_) => 1,
            GraphCollection::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            GraphCollection::Single(one) => std::slice::from_ref(one),
            GraphCollection::Many(v) => v,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            GraphCollection::Single(one) => vec![one],
            GraphCollection::Many(v) => v,
        }
    }

    /// Apply a fallible function to every element, keeping the shape.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(&T) -> std::result::Result<U, E>) -> std::result::Result<GraphCollection<U>, E> {
        Ok(match self {
            GraphCollection::Single(one) => GraphCollection::Single(f(one)?),
            GraphCollection::Many(v) => GraphCollection::Many(v.iter().map(f).collect::<std::result::Result<_, _>>()?),
        })
    }
}

// ---- helpers ----------------------------------------------------------------

fn join(path: &str, key: &str) -> String {
    if path.is_empty() { key.to_string() } else { format!("{path}.{key}") }
}

fn expect_object<'a>(v: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    v.as_object()
        .ok_or_else(|| SpecError::schema(path, format!("expected an object, found {}", kind(v))))
}

fn required_str<'a>(obj: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a str> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(SpecError::schema(join(path, key), format!("expected a string, found {}", kind(other)))),
        None => Err(SpecError::schema(path, format!("missing required key `{key}`"))),
    }
}

fn optional_str(obj: &Map<String, Value>, key: &str, path: &str) -> Result<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(SpecError::schema(join(path, key), format!("expected a string, found {}", kind(other)))),
    }
}

fn number(v: &Value, path: &str) -> Result<f64> {
    v.as_f64()
        .ok_or_else(|| SpecError::schema(path, format!("expected a number, found {}", kind(v))))
}

fn pair(v: &Value, path: &str) -> Result<(f64, f64)> {
    match v {
        Value::Array(items) if items.len() == 2 => {
            Ok((number(&items[0], &format!("{path}[0]"))?, number(&items[1], &format!("{path}[1]"))?))
        }
        Value::Array(items) => Err(SpecError::schema(path, format!("expected 2 elements, found {}", items.len()))),
        other => Err(SpecError::schema(path, format!("expected an [x, y] pair, found {}", kind(other)))),
    }
}

fn points_from_pairs(data: &Value, path: &str) -> Result<Vec<(f64, f64)>> {
    let items = data
        .as_array()
        .ok_or_else(|| SpecError::schema(path, format!("expected an array of [x, y] pairs, found {}", kind(data))))?;
    items
        .iter()
        .enumerate()
        .map(|(i, p)| pair(p, &format!("{path}[{i}]")))
        .collect()
}

fn points_from_columns(x: &Value, y: &Value, path: &str) -> Result<Vec<(f64, f64)>> {
    let column = |v: &Value, key: &str| -> Result<Vec<f64>> {
        let col_path = join(path, key);
        let items = v
            .as_array()
            .ok_or_else(|| SpecError::schema(&col_path, format!("expected an array of numbers, found {}", kind(v))))?;
        items
            .iter()
            .enumerate()
            .map(|(i, n)| number(n, &format!("{col_path}[{i}]")))
            .collect()
    };
    let xs = column(x, "x")?;
    let ys = column(y, "y")?;
    if xs.len() != ys.len() {
        return Err(SpecError::schema(
            path,
            format!("`x` has {} values but `y` has {}", xs.len(), ys.len()),
        ));
    }
    Ok(xs.into_iter().zip(ys).collect())
}

// File: crates/graph-spec/src/style.rs
// Summary: Parser for matplotlib-style format strings ("k.", "r--", "C1-o").
// Notes:
// - A format string holds at most one color, one marker and one line style,
//   in any order. A marker without a line style means "markers only".

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Result, SpecError};

/// Default color cycle ("tab10").
pub const COLOR_CYCLE: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
    /// `C0`..`C9`: an entry of [`COLOR_CYCLE`].
    Cycle(u8),
}

impl Color {
    fn from_code(c: char) -> Option<Self> {
        Some(match c {
            'b' => Color::Blue,
            'g' => Color::Green,
            'r' => Color::Red,
            'c' => Color::Cyan,
            'm' => Color::Magenta,
            'y' => Color::Yellow,
            'k' => Color::Black,
            'w' => Color::White,
            _ => return None,
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "blue" => Color::Blue,
            "green" => Color::Green,
            "red" => Color::Red,
            "cyan" => Color::Cyan,
            "magenta" => Color::Magenta,
            "yellow" => Color::Yellow,
            "black" => Color::Black,
            "white" => Color::White,
            _ => return None,
        })
    }

    /// Color of the `index`-th series that did not pick one explicitly.
    pub fn cycle(index: usize) -> Self {
        Color::Cycle((index % COLOR_CYCLE.len()) as u8)
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Blue => (0, 0, 255),
            Color::Green => (0, 128, 0),
            Color::Red => (255, 0, 0),
            Color::Cyan => (0, 191, 191),
            Color::Magenta => (191, 0, 191),
            Color::Yellow => (191, 191, 0),
            Color::Black => (0, 0, 0),
            Color::White => (255, 255, 255),
            Color::Cycle(i) => COLOR_CYCLE[i as usize % COLOR_CYCLE.len()],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Point,
    Pixel,
    Circle,
    TriangleDown,
    TriangleUp,
    TriangleLeft,
    TriangleRight,
    Square,
    Pentagon,
    Star,
    Hexagon,
    Plus,
    X,
    Diamond,
    ThinDiamond,
    VLine,
    HLine,
}

impl Marker {
    fn from_code(c: char) -> Option<Self> {
        Some(match c {
            '.' => Marker::Point,
            ',' => Marker::Pixel,
            'o' => Marker::Circle,
            'v' => Marker::TriangleDown,
            '^' => Marker::TriangleUp,
            '<' => Marker::TriangleLeft,
            '>' => Marker::TriangleRight,
            's' => Marker::Square,
            'p' => Marker::Pentagon,
            '*' => Marker::Star,
            'h' => Marker::Hexagon,
            '+' => Marker::Plus,
            'x' => Marker::X,
            'D' => Marker::Diamond,
            'd' => Marker::ThinDiamond,
            '|' => Marker::VLine,
            '_' => Marker::HLine,
            _ => return None,
        })
    }
}

/// A parsed format string. The original text is kept so the format can be
/// written back out unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineFormat {
    pub color: Option<Color>,
    pub marker: Option<Marker>,
    pub line: Option<LineStyle>,
    raw: String,
}

impl LineFormat {
    pub fn parse(style: &str) -> Result<Self> {
        let mut fmt = LineFormat { color: None, marker: None, line: None, raw: style.to_string() };

        if let Some(color) = Color::from_name(style) {
            fmt.color = Some(color);
            return Ok(fmt);
        }

        let chars: Vec<char> = style.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            let line = match (c, next) {
                ('-', Some('-')) => Some((LineStyle::Dashed, 2)),
                ('-', Some('.')) => Some((LineStyle::DashDot, 2)),
                ('-', _) => Some((LineStyle::Solid, 1)),
                (':', _) => Some((LineStyle::Dotted, 1)),
                _ => None,
            };
            if let Some((ls, width)) = line {
                if fmt.line.replace(ls).is_some() {
                    return Err(SpecError::style(style, "more than one line style"));
                }
                i += width;
                continue;
            }

            if c == 'C' {
                let digit = next
                    .and_then(|d| d.to_digit(10))
                    .ok_or_else(|| SpecError::style(style, "'C' must be followed by a cycle index digit"))?;
                if fmt.color.replace(Color::Cycle(digit as u8)).is_some() {
                    return Err(SpecError::style(style, "more than one color"));
                }
                i += 2;
                continue;
            }

            if let Some(color) = Color::from_code(c) {
                if fmt.color.replace(color).is_some() {
                    return Err(SpecError::style(style, "more than one color"));
                }
            } else if let Some(marker) = Marker::from_code(c) {
                if fmt.marker.replace(marker).is_some() {
                    return Err(SpecError::style(style, "more than one marker"));
                }
            } else {
                return Err(SpecError::style(style, format!("unrecognized character {c:?}")));
            }
            i += 1;
        }

        Ok(fmt)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Line style actually drawn: `None` when only markers are requested.
    pub fn effective_line(&self) -> Option<LineStyle> {
        match (self.line, self.marker) {
            (Some(ls), _) => Some(ls),
            (None, Some(_)) => None,
            (None, None) => Some(LineStyle::Solid),
        }
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for LineFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_only_disables_line() {
        let f = LineFormat::parse("k.").unwrap();
        assert_eq!(f.color, Some(Color::Black));
        assert_eq!(f.marker, Some(Marker::Point));
        assert_eq!(f.effective_line(), None);
    }

    #[test]
    fn empty_means_solid_line_without_color() {
        let f = LineFormat::parse("").unwrap();
        assert_eq!(f.color, None);
        assert_eq!(f.effective_line(), Some(LineStyle::Solid));
    }

    #[test]
    fn two_char_line_styles() {
        assert_eq!(LineFormat::parse("r--").unwrap().line, Some(LineStyle::Dashed));
        assert_eq!(LineFormat::parse("-.g").unwrap().line, Some(LineStyle::DashDot));
        assert_eq!(LineFormat::parse(":").unwrap().line, Some(LineStyle::Dotted));
    }

    #[test]
    fn order_is_free() {
        let a = LineFormat::parse("o-r").unwrap();
        let b = LineFormat::parse("r-o").unwrap();
        assert_eq!((a.color, a.marker, a.line), (b.color, b.marker, b.line));
        assert_eq!(a.effective_line(), Some(LineStyle::Solid));
    }

    #[test]
    fn cycle_reference() {
        let f = LineFormat::parse("C3--").unwrap();
        assert_eq!(f.color, Some(Color::Cycle(3)));
        assert_eq!(f.color.unwrap().rgb(), COLOR_CYCLE[3]);
    }

    #[test]
    fn full_color_name() {
        assert_eq!(LineFormat::parse("green").unwrap().color, Some(Color::Green));
    }

    #[test]
    fn rejects_duplicates_and_garbage() {
        assert!(matches!(LineFormat::parse("rk"), Err(SpecError::Style { .. })));
        assert!(matches!(LineFormat::parse("--:"), Err(SpecError::Style { .. })));
        assert!(matches!(LineFormat::parse("oo"), Err(SpecError::Style { .. })));
        assert!(matches!(LineFormat::parse("z"), Err(SpecError::Style { .. })));
        assert!(matches!(LineFormat::parse("C"), Err(SpecError::Style { .. })));
    }

    #[test]
    fn display_keeps_original_text() {
        assert_eq!(LineFormat::parse("-ob").unwrap().to_string(), "-ob");
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(Color::cycle(12), Color::Cycle(2));
    }
}

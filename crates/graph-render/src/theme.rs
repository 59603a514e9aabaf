// File: crates/graph-render/src/theme.rs
// Summary: Light/Dark theming for figure colors (series colors come from their format strings).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            legend_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(230, 30, 30, 36),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            plot_background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tick: skia::Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            legend_background: skia::Color::from_argb(230, 0x07, 0x36, 0x42),
            legend_border: skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            legend_text: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            plot_background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3),
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            legend_background: skia::Color::from_argb(230, 0xee, 0xe8, 0xd5),
            legend_border: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),
            legend_text: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            plot_background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            legend_background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            legend_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

// File: crates/render-core/src/theme.rs
// Summary: Colour themes: surface colours plus a line palette cycled per series.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub marker: skia::Color,
    pub palette: [skia::Color; 8],
}

fn rgb(hex: u32) -> skia::Color {
    skia::Color::from_argb(255, (hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn palette(hex: [u32; 8]) -> [skia::Color; 8] {
    hex.map(rgb)
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(38, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 200, 200, 200),
            tick_label: skia::Color::from_argb(255, 220, 220, 220),
            title: skia::Color::from_argb(255, 255, 255, 255),
            legend_background: skia::Color::from_argb(200, 20, 20, 20),
            marker: skia::Color::from_argb(140, 255, 0, 0),
            palette: palette([
                0x8dd3c7, 0xfeffb3, 0xbfbbd9, 0xfa8174, 0x81b1d2, 0xfdb462, 0xb3de69, 0xbc82bd,
            ]),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(38, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 40, 40, 40),
            tick_label: skia::Color::from_argb(255, 30, 30, 30),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(220, 255, 255, 255),
            marker: skia::Color::from_argb(140, 255, 0, 0),
            palette: palette([
                0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f,
            ]),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: rgb(0x002b36),                                    // base03
            grid: skia::Color::from_argb(90, 0x58, 0x6e, 0x75),           // base01
            axis_line: rgb(0x93a1a1),                                     // base1
            tick_label: rgb(0x839496),                                    // base0
            title: rgb(0xeee8d5),                                         // base2
            legend_background: skia::Color::from_argb(220, 0x07, 0x36, 0x42),
            marker: skia::Color::from_argb(140, 0xdc, 0x32, 0x2f),
            palette: palette([
                0x268bd2, 0x2aa198, 0x859900, 0xb58900, 0xcb4b16, 0xd33682, 0x6c71c4, 0x93a1a1,
            ]),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: rgb(0xfdf6e3),                                    // base3
            grid: skia::Color::from_argb(90, 0x93, 0xa1, 0xa1),           // base1
            axis_line: rgb(0x657b83),                                     // base00
            tick_label: rgb(0x586e75),                                    // base01
            title: rgb(0x002b36),                                         // base03
            legend_background: skia::Color::from_argb(220, 0xee, 0xe8, 0xd5),
            marker: skia::Color::from_argb(140, 0xdc, 0x32, 0x2f),
            palette: palette([
                0x268bd2, 0x2aa198, 0x859900, 0xb58900, 0xcb4b16, 0xd33682, 0x6c71c4, 0x586e75,
            ]),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: rgb(0x000000),
            grid: skia::Color::from_argb(80, 0xff, 0xff, 0xff),
            axis_line: rgb(0xffffff),
            tick_label: rgb(0xffffff),
            title: rgb(0xffffff),
            legend_background: skia::Color::from_argb(230, 0, 0, 0),
            marker: skia::Color::from_argb(200, 0xff, 0x00, 0x00),
            palette: palette([
                0x00ffff, 0xffff00, 0x00ff00, 0xff00ff, 0xffffff, 0xff8000, 0x00aaff, 0xff5555,
            ]),
        }
    }

    /// Look up a built-in theme, case-insensitively. Matplotlib style names
    /// `dark_background`, `default` and `classic` map onto the closest preset.
    pub fn by_name(name: &str) -> Option<Self> {
        let key = name.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "dark" | "dark-background" => Some(Self::dark()),
            "light" | "default" | "classic" => Some(Self::light()),
            _ => presets().into_iter().find(|t| t.name == key),
        }
    }

    /// Line colour for the `index`-th series; the palette repeats.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

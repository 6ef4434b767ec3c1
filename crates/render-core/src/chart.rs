// File: crates/render-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::downsample::prepare_line;
use crate::error::RenderError;
use crate::geometry::{clamp, RectI32};
use crate::series::{Marker, Series};
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

const TITLE_SIZE: f32 = 15.0;
const TITLE_BAND: u32 = 22;
const TICK_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 4.0;
const LEGEND_SIZE: f32 = 11.0;
const LEGEND_PAD: f32 = 6.0;
const LEGEND_SWATCH: f32 = 14.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels, title and legend. Off gives platform-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub markers: Vec<Marker>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            markers: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Set the title; an empty string clears it.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.title = (!title.trim().is_empty()).then_some(title);
    }

    /// Fit both axes to the data currently in the chart.
    pub fn autoscale_axes(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    /// Render into a fresh RGBA8 (unpremultiplied) buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        if opts.width == 0 || opts.height == 0 || opts.width > i32::MAX as u32 || opts.height > i32::MAX as u32 {
            return Err(RenderError::InvalidSize { width: opts.width, height: opts.height });
        }
        let (w, h) = (opts.width as i32, opts.height as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(RenderError::Surface)?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::ReadPixels)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &data)?;
        debug!(path = %path.display(), bytes = data.len(), "wrote png");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let titled = opts.draw_labels && self.title.is_some();
        let insets = if titled { opts.insets.with_title_band(TITLE_BAND) } else { opts.insets };
        let plot = RectI32::plot_area(opts.width, opts.height, &insets);

        let x_ticks = self.x_axis.ticks((plot.width() / 110).clamp(2, 10) as usize);
        let y_ticks = self.y_axis.ticks((plot.height() / 45).clamp(2, 8) as usize);

        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme);
        draw_axes(canvas, &plot, theme);

        canvas.save();
        canvas.clip_rect(to_rect(&plot), None, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s, theme.series_color(i));
        }
        for m in &self.markers {
            draw_marker(canvas, &plot, &self.x_axis, m, theme.marker);
        }
        canvas.restore();

        if !opts.draw_labels {
            return;
        }
        let shaper = TextShaper::new();
        draw_tick_labels(canvas, &shaper, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme);
        if let Some(title) = &self.title {
            let cx = (plot.left + plot.right) as f32 * 0.5;
            let baseline = opts.insets.top as f32 + TITLE_SIZE;
            shaper.draw(canvas, title, cx, baseline, TITLE_SIZE, theme.title, Align::Center);
        }
        if self.series.len() > 1 {
            draw_legend(canvas, &shaper, &plot, &self.series, theme);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.5);

    let (t, b) = (plot.top as f32, plot.bottom as f32);
    for &v in x_ticks {
        let px = plot.x_to_px(v, x.min, x.max);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    let (l, r) = (plot.left as f32, plot.right as f32);
    for &v in y_ticks {
        let py = plot.y_to_px(v, y.min, y.max);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

/// Left and bottom spines only.
fn draw_axes(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut tick = skia::Paint::default();
    tick.set_color(theme.axis_line);
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.0);

    let (l, b) = (plot.left as f32, plot.bottom as f32);

    let y_step = tick_step(y_ticks);
    for &v in y_ticks {
        let py = plot.y_to_px(v, y.min, y.max);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick);
        let label = y.tick_label(v, y_step);
        shaper.draw(canvas, &label, l - TICK_LEN - 3.0, py + TICK_SIZE * 0.35, TICK_SIZE, theme.tick_label, Align::Right);
    }

    let x_step = tick_step(x_ticks);
    let mut last_right = f32::NEG_INFINITY;
    for &v in x_ticks {
        let px = plot.x_to_px(v, x.min, x.max);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick);
        let label = x.tick_label(v, x_step);
        let half = shaper.measure_width(&label, TICK_SIZE) * 0.5;
        if px - half < last_right + 4.0 {
            continue;
        }
        shaper.draw(canvas, &label, px, b + TICK_LEN + TICK_SIZE + 2.0, TICK_SIZE, theme.tick_label, Align::Center);
        last_right = px + half;
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let sx = |x: f64| plot.x_to_px(x, x_axis.min, x_axis.max);
    let sy = |y: f64| plot.y_to_px(y, y_axis.min, y_axis.max);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(color);

    let mut dot = stroke.clone();
    dot.set_style(skia::paint::Style::Fill);

    let budget = (plot.width().max(1) as usize) * 2;
    for run in prepare_line(&series.data_xy, budget) {
        match run.as_slice() {
            [] => {}
            [(x, y)] => {
                canvas.draw_circle((sx(*x), sy(*y)), series.stroke_width, &dot);
            }
            [(x0, y0), rest @ ..] => {
                let mut path = skia::Path::new();
                path.move_to((sx(*x0), sy(*y0)));
                for &(x, y) in rest {
                    path.line_to((sx(x), sy(y)));
                }
                canvas.draw_path(&path, &stroke);
            }
        }
    }
}

fn draw_marker(canvas: &skia::Canvas, plot: &RectI32, x_axis: &Axis, marker: &Marker, color: skia::Color) {
    if !marker.x.is_finite() || marker.x < x_axis.min || marker.x > x_axis.max {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint.set_color(color);
    let px = plot.x_to_px(marker.x, x_axis.min, x_axis.max);
    canvas.draw_line((px, plot.top as f32), (px, plot.bottom as f32), &paint);
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectI32, series: &[Series], theme: &Theme) {
    let row_h = LEGEND_SIZE + 5.0;
    let rows_fit = (((plot.height() as f32 - 2.0 * LEGEND_PAD) / row_h).floor() as usize).max(1);

    let mut rows: Vec<(Option<skia::Color>, String)> = series
        .iter()
        .enumerate()
        .map(|(i, s)| (Some(theme.series_color(i)), s.name.clone()))
        .collect();
    if rows.len() > rows_fit {
        let hidden = rows.len() - (rows_fit - 1);
        rows.truncate(rows_fit - 1);
        rows.push((None, format!("+{hidden} more")));
    }

    let text_w = rows
        .iter()
        .map(|(_, name)| shaper.measure_width(name, LEGEND_SIZE))
        .fold(0.0f32, f32::max);
    let box_w = (LEGEND_PAD * 3.0 + LEGEND_SWATCH + text_w).min(plot.width() as f32);
    let box_h = LEGEND_PAD * 2.0 + row_h * rows.len() as f32;
    let right = plot.right as f32 - LEGEND_PAD;
    let left = clamp(right - box_w, plot.left as f32, right);
    let top = plot.top as f32 + LEGEND_PAD;

    let frame = skia::Rect::from_ltrb(left, top, right, top + box_h);
    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_background);
    canvas.draw_rect(frame, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(0.5);
    border.set_color(theme.axis_line);
    canvas.draw_rect(frame, &border);

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_stroke_width(2.0);
    swatch.set_stroke_cap(skia::paint::Cap::Round);

    for (i, (color, name)) in rows.iter().enumerate() {
        let baseline = top + LEGEND_PAD + row_h * i as f32 + LEGEND_SIZE;
        let mid = baseline - LEGEND_SIZE * 0.35;
        let sx = left + LEGEND_PAD;
        if let Some(color) = color {
            swatch.set_color(*color);
            canvas.draw_line((sx, mid), (sx + LEGEND_SWATCH, mid), &swatch);
        }
        shaper.draw(canvas, name, sx + LEGEND_SWATCH + LEGEND_PAD, baseline, LEGEND_SIZE, theme.tick_label, Align::Left);
    }
}

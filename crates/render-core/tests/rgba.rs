// File: crates/render-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use render_core::{Axis, Chart, RenderOptions, Series, Theme};

fn diagonal_chart() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new(0.0, 4.0);
    chart.y_axis = Axis::new(0.0, 4.0);
    chart.add_series(Series::with_data("diag", vec![(0.0, 0.0), (4.0, 4.0)]));
    chart
}

#[test]
fn render_rgba8_buffer() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = diagonal_chart().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is outside the plot: opaque background.
    assert_eq!(&px[0..4], &[0, 0, 0, 255]);
}

#[test]
fn light_theme_background_is_white() {
    let opts = RenderOptions { draw_labels: false, theme: Theme::light(), ..RenderOptions::default() };
    let (px, _, _, _) = diagonal_chart().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn line_uses_first_palette_colour() {
    let theme = Theme::light();
    let opts = RenderOptions { draw_labels: false, theme, ..RenderOptions::default() };
    let (px, w, _, stride) = diagonal_chart().render_to_rgba8(&opts).expect("rgba render");

    // The diagonal passes through the centre of the plot area.
    let plot_l = opts.insets.left as usize;
    let plot_r = w as usize - opts.insets.right as usize;
    let plot_t = opts.insets.top as usize;
    let plot_b = opts.height as usize - opts.insets.bottom as usize;
    let (cx, cy) = ((plot_l + plot_r) / 2, (plot_t + plot_b) / 2);
    let expected = theme.series_color(0);
    let distance = |x: usize, y: usize| -> i32 {
        let i = y * stride + x * 4;
        (px[i] as i32 - expected.r() as i32).abs()
            + (px[i + 1] as i32 - expected.g() as i32).abs()
            + (px[i + 2] as i32 - expected.b() as i32).abs()
    };
    // Anti-aliasing softens edges; some pixel near the centre is fully covered.
    let best = (cy - 2..=cy + 2)
        .flat_map(|y| (cx - 2..=cx + 2).map(move |x| (x, y)))
        .map(|(x, y)| distance(x, y))
        .min()
        .unwrap_or(i32::MAX);
    assert!(best < 30, "no pixel near the centre matches the series colour (best distance {best})");
}

#[test]
fn isolated_points_are_drawn_as_dots() {
    let theme = Theme::light();
    let opts = RenderOptions { draw_labels: false, theme, ..RenderOptions::default() };
    let mut chart = Chart::new();
    chart.x_axis = Axis::new(0.0, 4.0);
    chart.y_axis = Axis::new(0.0, 4.0);
    chart.add_series(Series::with_data(
        "gappy",
        vec![(0.0, 0.0), (1.0, f64::NAN), (2.0, 2.0), (3.0, f64::NAN), (4.0, 4.0)],
    ));
    let (px, w, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    let plot_l = opts.insets.left as usize;
    let plot_r = w as usize - opts.insets.right as usize;
    let plot_t = opts.insets.top as usize;
    let plot_b = opts.height as usize - opts.insets.bottom as usize;
    let (cx, cy) = ((plot_l + plot_r) / 2, (plot_t + plot_b) / 2);
    let want = theme.series_color(0);
    let distance = |x: usize, y: usize| -> i32 {
        let i = y * stride + x * 4;
        (px[i] as i32 - want.r() as i32).abs()
            + (px[i + 1] as i32 - want.g() as i32).abs()
            + (px[i + 2] as i32 - want.b() as i32).abs()
    };
    let best = (cy - 1..=cy + 1)
        .flat_map(|y| (cx - 1..=cx + 1).map(move |x| (x, y)))
        .map(|(x, y)| distance(x, y))
        .min()
        .unwrap_or(i32::MAX);
    assert!(best < 30, "no dot at the isolated point (best distance {best})");

    // Halfway toward the next point a connecting line would pass; nothing is drawn there.
    let dx = (plot_r - plot_l) / 8;
    let dy = (plot_b - plot_t) / 8;
    let i = (cy - dy) * stride + (cx + dx) * 4;
    assert_eq!(&px[i..i + 4], &[255, 255, 255, 255]);
}

// File: crates/render-core/src/downsample.rs
// Summary: Gap-aware line preparation: split at non-finite samples, reduce with LTTB.

/// Split `points` into runs of consecutive finite points.
/// A non-finite x or y ends the current run, so the line shows a gap there.
pub fn finite_runs(points: &[(f64, f64)]) -> Vec<&[(f64, f64)]> {
    points
        .split(|&(x, y)| !x.is_finite() || !y.is_finite())
        .filter(|run| !run.is_empty())
        .collect()
}

/// Largest-Triangle-Three-Buckets downsampling.
/// Returns at most `threshold` points, always keeping the first and last one.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    let bucket = (n - 2) as f64 / (threshold - 2) as f64;
    let bounds = |i: usize| -> usize { ((1.0 + i as f64 * bucket).floor() as usize).min(n - 1) };

    let mut out = Vec::with_capacity(threshold);
    out.push(points[0]);
    let mut prev = 0usize;

    for i in 0..(threshold - 2) {
        let (start, end) = (bounds(i), bounds(i + 1).max(bounds(i) + 1));

        // Average of the following bucket; the last bucket looks at the final point.
        let next = &points[end.min(n - 1)..bounds(i + 2).max(end + 1).min(n)];
        let (sx, sy) = next.iter().fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
        let (avg_x, avg_y) = (sx / next.len() as f64, sy / next.len() as f64);

        let (ax, ay) = points[prev];
        let mut best = start;
        let mut best_area = -1.0f64;
        for (k, &(x, y)) in points.iter().enumerate().take(end).skip(start) {
            let area = ((ax - avg_x) * (y - ay) - (ax - x) * (avg_y - ay)).abs();
            if area > best_area {
                best_area = area;
                best = k;
            }
        }
        out.push(points[best]);
        prev = best;
    }

    out.push(points[n - 1]);
    out
}

/// Reduce every finite run of `points` to roughly `budget` points in total.
pub fn prepare_line(points: &[(f64, f64)], budget: usize) -> Vec<Vec<(f64, f64)>> {
    let runs = finite_runs(points);
    let total: usize = runs.iter().map(|r| r.len()).sum();
    if total <= budget || budget < 2 {
        return runs.into_iter().map(|r| r.to_vec()).collect();
    }
    runs.into_iter()
        .map(|r| {
            let share = ((r.len() as f64 / total as f64) * budget as f64).ceil() as usize;
            lttb(r, share.max(2))
        })
        .collect()
}

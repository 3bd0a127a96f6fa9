/// Linear interpolation on the segment (x1, y1)–(x2, y2): returns the `x` at
/// which the segment reaches `y`.
///
/// A flat segment (`y1 == y2`) carries no information about where inside it
/// `y` sits, so the left endpoint `x1` is returned instead of dividing by zero.
pub fn interpolate(x1: f64, y1: f64, x2: f64, y2: f64, y: f64) -> f64 {
    if y1 == y2 {
        return x1;
    }
    if y == y2 {
        return x2;
    }
    x1 + (x2 - x1) * ((y - y1) / (y2 - y1))
}

/// `true` when `y` lies between `y1` and `y2` inclusive, in either orientation.
pub fn brackets(y1: f64, y2: f64, y: f64) -> bool {
    (y1 <= y && y <= y2) || (y1 >= y && y >= y2)
}

/// `n` logarithmically spaced values from `start` to `end`, both included.
pub fn log_space(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let log_start = start.ln();
            let step = (end.ln() - log_start) / (n - 1) as f64;
            (0..n)
                .map(|i| match i {
                    0 => start,
                    _ if i == n - 1 => end,
                    _ => (log_start + step * i as f64).exp()
                })
                .collect()
        }
    }
}

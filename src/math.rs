use std::f64::consts::PI;

/// Converts an angle in degrees to radians.
#[inline(always)]
pub fn deg(v: f64) -> f64 {
    PI * v / 180.0
}

/// Remainder with the sign of the divisor, for `m > 0`. Unlike `%`, negative `n` wraps around
/// into `[0, m)`.
pub fn modulo(n: f64, m: f64) -> f64 {
    ((n % m) + m) % m
}

pub fn add_polar_offset((x, y): (f64, f64), theta: f64, r: f64) -> (f64, f64) {
    (x + r * theta.cos(), y + r * theta.sin())
}

/// Unit steps from `start` up to and including `end` (when `end - start` is a whole number).
/// Yields nothing if `end < start` or either bound is not finite.
///
/// Each value is computed as `start + i` rather than accumulated, so long runs don't drift.
pub fn unit_steps(start: f64, end: f64) -> impl Iterator<Item = f64> {
    let count = if start.is_finite() && end.is_finite() && end >= start {
        (end - start).floor() as u64 + 1
    } else {
        0
    };
    (0..count).map(move |i| start + i as f64)
}

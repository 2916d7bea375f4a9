//! Parabolas with a vertical axis, described by their vertex and one other point on the curve.
//!
//! For vertex `(h, k)` and a point `(x, y)` on the curve:
//!
//! ```text
//! (x - h)² = 4p (y - k)    =>    p = (x - h)² / 4(y - k)
//! y(x) = (4pk + (x - h)²) / 4p
//! ```

use crate::error::Error;
use crate::math::unit_steps;
use crate::sampler::Pen;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Parabola {
    vertex: (f64, f64),
    /// Focal parameter; finite and nonzero.
    p: f64,
}

impl Parabola {
    /// Builds the parabola with the given vertex that passes through `through`.
    ///
    /// Fails if the two points share a height (the curve would be infinitely wide) or a column
    /// (infinitely narrow).
    pub fn new(vertex: (f64, f64), through: (f64, f64)) -> Result<Self, Error> {
        let (h, k) = vertex;
        let (x, y) = through;
        let p = (x - h) * (x - h) / (4.0 * (y - k));
        if !p.is_finite() || p == 0.0 {
            return Err(Error::DegenerateParabola { vertex, through });
        }
        Ok(Parabola { vertex, p })
    }

    pub fn eval(&self, x: f64) -> f64 {
        let (h, k) = self.vertex;
        (4.0 * self.p * k + (x - h) * (x - h)) / (4.0 * self.p)
    }
}

/// Height at `x` of the parabola with vertex `(h, k)` through `(through_x, through_y)`, or
/// `None` if that parabola is degenerate.
pub fn evaluate_parabola(h: f64, k: f64, through_x: f64, through_y: f64, x: f64) -> Option<f64> {
    Parabola::new((h, k), (through_x, through_y))
        .ok()
        .map(|parabola| parabola.eval(x))
}

/// Traces the parabola with vertex `vertex` from `point` to the vertex, one unit of x at a time.
/// Degenerate input is skipped.
pub fn plot_half_parabola(pen: &mut Pen, point: (f64, f64), vertex: (f64, f64)) {
    let parabola = match Parabola::new(vertex, point) {
        Ok(parabola) => parabola,
        Err(e) => {
            tracing::debug!("skipping half parabola: {}", e);
            return;
        }
    };
    let (x_min, x_max) = (f64::min(point.0, vertex.0), f64::max(point.0, vertex.0));
    for x in unit_steps(x_min, x_max) {
        pen.maybe_plot(x, parabola.eval(x));
    }
}

/// Traces an arc from `start` through `vertex` to `end`, as two half parabolas that share the
/// vertex. If `start` and `end` are at the same height the two halves are the same parabola.
pub fn plot_curve(pen: &mut Pen, start: (f64, f64), end: (f64, f64), vertex: (f64, f64)) {
    plot_half_parabola(pen, start, vertex);
    plot_half_parabola(pen, end, vertex);
}

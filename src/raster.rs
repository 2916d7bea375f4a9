//! Straight lines and circular outlines, built from unit steps and one-degree angular samples.

use crate::math::{add_polar_offset, deg, unit_steps};
use crate::sampler::Pen;

/// Number of angular samples in a full turn.
const CIRCLE_SAMPLES: u32 = 360;

/// Plots the segment from `(x0, y0)` to `(x1, y1)`, inclusive of both ends.
///
/// Steps one unit at a time along whichever axis the segment spans further (x on a tie), so
/// that no column or row along that axis is skipped. Coincident endpoints plot a single point.
pub fn line(pen: &mut Pen, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) {
    let (x_min, x_max) = (f64::min(x0, x1), f64::max(x0, x1));
    let (y_min, y_max) = (f64::min(y0, y1), f64::max(y0, y1));

    if x0 == x1 {
        for y in unit_steps(y_min, y_max) {
            pen.maybe_plot(x0, y);
        }
    } else if y0 == y1 {
        for x in unit_steps(x_min, x_max) {
            pen.maybe_plot(x, y0);
        }
    } else {
        let m = (y1 - y0) / (x1 - x0);
        if x_max - x_min >= y_max - y_min {
            for x in unit_steps(x_min, x_max) {
                pen.maybe_plot(x, m * (x - x0) + y0);
            }
        } else {
            for y in unit_steps(y_min, y_max) {
                pen.maybe_plot(x0 + (y - y0) / m, y);
            }
        }
    }
}

/// Plots the circumference of a circle at one-degree steps. When `filled`, every angle also
/// plots points at unit distances from the center out to the edge, which approximates a disk;
/// the interior thins out away from the center.
///
/// A non-positive radius plots nothing.
pub fn circle(pen: &mut Pen, center: (f64, f64), radius: f64, filled: bool) {
    if !(radius > 0.0) {
        return;
    }
    for i in 0..CIRCLE_SAMPLES {
        let theta = deg(f64::from(i));
        if filled {
            for j in (0u32..).map(f64::from).take_while(|&j| j < radius) {
                let (x, y) = add_polar_offset(center, theta, j);
                pen.maybe_plot(x, y);
            }
        }
        let (x, y) = add_polar_offset(center, theta, radius);
        pen.maybe_plot(x, y);
    }
}

/// Plots the part of a circle from `start` degrees (inclusive) to `end` degrees (exclusive), at
/// one-degree steps.
pub fn circle_arc(pen: &mut Pen, center: (f64, f64), radius: f64, start: f64, end: f64) {
    if !(end > start) || !(end - start).is_finite() {
        return;
    }
    let steps = (end - start).ceil() as u64;
    for i in 0..steps {
        let (x, y) = add_polar_offset(center, deg(start + i as f64), radius);
        pen.maybe_plot(x, y);
    }
}

/// Plots an axis-aligned ellipse outline at one-degree steps.
pub fn ellipse(pen: &mut Pen, (cx, cy): (f64, f64), radius_x: f64, radius_y: f64) {
    for i in 0..CIRCLE_SAMPLES {
        let theta = deg(f64::from(i));
        pen.maybe_plot(cx + radius_x * theta.cos(), cy + radius_y * theta.sin());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sampler::test::points;

    #[test]
    fn test_line_single_point() {
        assert_eq!(points(|pen| line(pen, (4.0, 5.0), (4.0, 5.0))), [(4.0, 5.0)]);
    }

    #[test]
    fn test_line_horizontal() {
        let pts = points(|pen| line(pen, (0.0, 0.0), (10.0, 0.0)));
        let want: Vec<_> = (0..=10).map(|x| (x as f64, 0.0)).collect();
        assert_eq!(pts, want);
    }

    #[test]
    fn test_line_reversed_endpoints() {
        assert_eq!(points(|pen| line(pen, (10.0, 3.0), (0.0, 3.0))).len(), 11);
        let vertical = points(|pen| line(pen, (2.0, 5.0), (2.0, -1.0)));
        assert_eq!(vertical.first(), Some(&(2.0, -1.0)));
        assert_eq!(vertical.last(), Some(&(2.0, 5.0)));
        assert_eq!(vertical.len(), 7);
    }

    #[test]
    fn test_line_x_dominant() {
        let pts = points(|pen| line(pen, (0.0, 0.0), (10.0, 5.0)));
        assert_eq!(pts.len(), 11);
        assert_eq!(pts[4], (4.0, 2.0));
        assert_eq!(pts[10], (10.0, 5.0));
    }

    #[test]
    fn test_line_y_dominant_has_no_gaps() {
        let pts = points(|pen| line(pen, (0.0, 0.0), (3.0, 12.0)));
        let ys: Vec<f64> = pts.iter().map(|p| p.1).collect();
        let want: Vec<f64> = (0..=12).map(f64::from).collect();
        assert_eq!(ys, want);
        for (x, y) in pts {
            assert!((x - y / 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_line_tie_steps_along_x() {
        let pts = points(|pen| line(pen, (0.0, 0.0), (-4.0, 4.0)));
        let xs: Vec<f64> = pts.iter().map(|p| p.0).collect();
        assert_eq!(xs, [-4.0, -3.0, -2.0, -1.0, 0.0]);
        assert_eq!(pts[0], (-4.0, 4.0));
    }

    #[test]
    fn test_circle_has_360_points() {
        for radius in [0.5, 1.0, 7.0, 130.0] {
            let pts = points(|pen| circle(pen, (50.0, 50.0), radius, false));
            assert_eq!(pts.len(), 360);
            assert!(pts
                .iter()
                .all(|&(x, y)| ((x - 50.0).hypot(y - 50.0) - radius).abs() < 1e-9));
        }
        assert!(points(|pen| circle(pen, (0.0, 0.0), 0.0, true)).is_empty());
    }

    #[test]
    fn test_filled_circle_samples_every_radius() {
        let pts = points(|pen| circle(pen, (0.0, 0.0), 4.0, true));
        // Interior distances 0, 1, 2, 3 plus the rim, for every degree.
        assert_eq!(pts.len(), 360 * 5);
        let pts = points(|pen| circle(pen, (0.0, 0.0), 2.5, true));
        assert_eq!(pts.len(), 360 * 4);
    }

    #[test]
    fn test_circle_arc_count() {
        assert_eq!(points(|pen| circle_arc(pen, (0.0, 0.0), 10.0, -90.0, 0.0)).len(), 90);
        assert_eq!(points(|pen| circle_arc(pen, (0.0, 0.0), 10.0, -90.0, 90.0)).len(), 180);
        assert!(points(|pen| circle_arc(pen, (0.0, 0.0), 10.0, 30.0, 30.0)).is_empty());

        let pts = points(|pen| circle_arc(pen, (0.0, 0.0), 10.0, -90.0, 90.0));
        // Right half only.
        assert!(pts.iter().all(|&(x, _)| x >= -1e-9));
        let (x, y) = pts[0];
        assert!(x.abs() < 1e-9 && (y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_arc_unbounded_plots_nothing() {
        let arc =
            |start: f64, end: f64| points(|pen| circle_arc(pen, (0.0, 0.0), 10.0, start, end));
        assert!(arc(0.0, f64::INFINITY).is_empty());
        assert!(arc(f64::NEG_INFINITY, 0.0).is_empty());
        assert!(arc(f64::NAN, 90.0).is_empty());
    }

    #[test]
    fn test_ellipse() {
        let pts = points(|pen| ellipse(pen, (1.0, 2.0), 4.0, 2.0));
        assert_eq!(pts.len(), 360);
        for (x, y) in pts {
            let r = ((x - 1.0) / 4.0).powi(2) + ((y - 2.0) / 2.0).powi(2);
            assert!((r - 1.0).abs() < 1e-9);
        }
    }
}

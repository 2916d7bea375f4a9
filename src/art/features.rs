//! The individual parts of the face. Every coordinate is a multiple of the scale unit; on the
//! canvas, x grows to the right and y grows upward.

use std::ops::Range;

use crate::color::Palette;
use crate::config::Scale;
use crate::error::Error;
use crate::fill::{Bound, Piece, Region};
use crate::parabola::{plot_curve, plot_half_parabola, Parabola};
use crate::raster::{circle, circle_arc, line};
use crate::sampler::Pen;

use super::Stroke;

/// One pixel at the default scale, for the hairline offsets that thicken strokes.
const PX: f64 = 1.0 / Scale::DEFAULT as f64;

fn curve(vertex: (f64, f64), through: (f64, f64)) -> Result<Bound, Error> {
    Parabola::new(vertex, through).map(Bound::Curve)
}

pub(super) fn fur(pen: &mut Pen, palette: &Palette, scale: Scale) -> Result<(), Error> {
    let u = |v: f64| scale.units(v);
    let x_i = u(12.0);
    let x_f = x_i + u(3.0);
    let y = u(7.3);

    let crown = (x_i + u(1.5), y + u(0.6));
    let notch = (x_i + u(1.5), y + u(0.2));
    let region = Region::new(
        (x_i, x_f),
        (y - u(0.25), y + u(0.6)),
        vec![
            Piece::new(
                f64::NEG_INFINITY..x_i + u(0.2),
                curve(crown, (x_i, y))?,
                curve((x_i + u(0.2), y - u(0.25)), (x_i, y))?,
            ),
            Piece::new(
                x_i + u(0.2)..x_i + u(1.5),
                curve(crown, (x_i, y))?,
                curve(notch, (x_i, y - u(0.3)))?,
            ),
            Piece::new(
                x_i + u(1.5)..x_f - u(0.2),
                curve(crown, (x_f, y))?,
                curve(notch, (x_f, y - u(0.3)))?,
            ),
            Piece::new(
                x_f - u(0.2)..f64::INFINITY,
                curve(crown, (x_f, y))?,
                curve((x_f - u(0.2), y - u(0.25)), (x_f, y))?,
            ),
        ],
    );

    pen.batch(palette.shadow, Stroke::Shadow.weight(), |pen| region.fill(pen));
    Ok(())
}

pub(super) fn nose(pen: &mut Pen, palette: &Palette, scale: Scale) -> Result<(), Error> {
    let u = |v: f64| scale.units(v);
    let x_i = u(12.0);
    let x_f = x_i + u(3.0);
    let y = u(7.0);

    let bridge = (x_i + u(1.5), y + u(0.5));
    let chin = (x_i + u(1.5), y - u(0.5));
    let left_wing = (x_i + u(0.4), y - u(0.1));
    let right_wing = (x_f - u(0.4), y - u(0.1));
    let left_nostril = (x_i + u(0.8), y + u(0.1));
    let right_nostril = (x_f - u(0.8), y + u(0.1));
    let left_lip = (x_i + u(1.2), y - u(0.29));
    let right_lip = (x_f - u(1.2), y - u(0.29));

    let top_left = curve(bridge, (x_i, y))?;
    let top_right = curve(bridge, (x_f, y))?;
    // Lower edges of the nostril shading.
    let left_flare = curve(left_wing, (x_i + u(1.2), y - u(0.3)))?;
    let right_flare = curve(right_wing, (x_f - u(1.2), y - u(0.3)))?;

    // Nostril columns carve the shading band between the nostril's top edge and its flare.
    let nostril = |columns: Range<f64>, upper: Bound, lower: Bound, flare: Bound| {
        Piece::new(columns, upper, lower).with_cutout(lower, flare)
    };

    let left_nostril_top_a = curve(left_nostril, left_wing)?;
    let left_nostril_top_b = curve(left_nostril, left_lip)?;
    let right_nostril_top_a = curve(right_nostril, right_lip)?;
    let right_nostril_top_b = curve(right_nostril, right_wing)?;

    let region = Region::new(
        (x_i, x_f),
        (y - u(0.5), y + u(0.5)),
        vec![
            Piece::new(
                f64::NEG_INFINITY..x_i + u(0.4),
                top_left,
                curve(left_wing, (x_i, y))?,
            ),
            nostril(x_i + u(0.4)..x_i + u(0.8), top_left, left_nostril_top_a, left_flare),
            nostril(x_i + u(0.8)..x_i + u(1.2), top_left, left_nostril_top_b, left_flare),
            Piece::new(x_i + u(1.2)..x_i + u(1.5), top_left, curve(chin, left_lip)?),
            Piece::new(x_i + u(1.5)..x_f - u(1.2), top_right, curve(chin, right_lip)?),
            nostril(x_f - u(1.2)..x_f - u(0.8), top_right, right_nostril_top_a, right_flare),
            nostril(x_f - u(0.8)..x_f - u(0.4), top_right, right_nostril_top_b, right_flare),
            Piece::new(
                x_f - u(0.4)..f64::INFINITY,
                top_right,
                curve(right_wing, (x_f, y))?,
            ),
        ],
    );

    let weight = Stroke::Outline.weight();
    pen.batch(palette.nose, weight, |pen| region.fill(pen));
    pen.batch(palette.outline, weight, |pen| region.fill_cutouts(pen));
    pen.batch(palette.outline, weight, |pen| {
        pen.maybe_plot(x_i, y);
        pen.maybe_plot(x_f, y);
        plot_curve(pen, (x_i, y), (x_f, y), bridge);

        plot_half_parabola(pen, (x_i, y), left_wing);
        plot_half_parabola(pen, (x_i + u(1.2), y - u(0.3)), left_wing);
        plot_half_parabola(pen, (x_f, y), right_wing);
        plot_half_parabola(pen, (x_f - u(1.2), y - u(0.3)), right_wing);

        plot_curve(pen, left_lip, right_lip, chin);
        plot_curve(pen, left_wing, left_lip, left_nostril);
        plot_curve(pen, right_lip, right_wing, right_nostril);
    });
    Ok(())
}

/// Geometry of one eye, in scale units.
struct Eye {
    /// Left and right corners, where the lashes start.
    left_corner: (f64, f64),
    right_corner: (f64, f64),
    center: (f64, f64),
    pupil: (f64, f64),
    glints: [((f64, f64), f64); 2],
}

const LEFT_EYE: Eye = Eye {
    left_corner: (7.6, 7.0),
    right_corner: (10.05, 7.5),
    center: (8.75, 7.5),
    pupil: (8.95, 7.35),
    glints: [((8.7, 7.35), 0.15), ((8.85, 7.05), 0.07)],
};

const RIGHT_EYE: Eye = Eye {
    left_corner: (17.0, 7.5),
    right_corner: (19.45, 7.0),
    center: (18.3, 7.5),
    pupil: (18.1, 7.35),
    glints: [((17.85, 7.35), 0.15), ((18.05, 7.05), 0.07)],
};

pub(super) fn left_eye(pen: &mut Pen, palette: &Palette, scale: Scale) -> Result<(), Error> {
    eye(pen, palette, scale, &LEFT_EYE);
    Ok(())
}

pub(super) fn right_eye(pen: &mut Pen, palette: &Palette, scale: Scale) -> Result<(), Error> {
    eye(pen, palette, scale, &RIGHT_EYE);
    Ok(())
}

fn eye(pen: &mut Pen, palette: &Palette, scale: Scale, eye: &Eye) {
    let u = |v: f64| scale.units(v);
    let at = |(x, y): (f64, f64)| (u(x), u(y));
    const LASH_OFFSETS: [f64; 5] = [3.0, 2.0, 0.0, -2.0, -3.0];

    let (x_i, y_i) = at(eye.left_corner);
    let (x_f, y_f) = at(eye.right_corner);
    let center = at(eye.center);
    let radius = u(1.3);

    pen.batch(palette.outline, Stroke::Outline.weight(), |pen| {
        pen.maybe_plot(x_i, y_i);
        pen.maybe_plot(x_f, y_f);
        for d in LASH_OFFSETS.map(|d| u(d * PX)) {
            line(pen, (x_f, y_f + d), (x_f + u(0.5), y_f - u(0.1)));
        }
        for d in LASH_OFFSETS.map(|d| u(d * PX)) {
            line(pen, (x_i, y_i + d), (x_i - u(0.5), y_i - u(0.1)));
        }
    });

    pen.batch(palette.white, Stroke::Medium.weight(), |pen| {
        circle(pen, center, radius, true);
    });

    // Shading along the right rim, stepping inward.
    pen.batch(palette.light_shadow, Stroke::Outline.weight(), |pen| {
        for k in 0..5 {
            let shifted = (center.0 - u(0.05 * f64::from(k)), center.1);
            circle_arc(pen, shifted, radius, -90.0, 90.0);
        }
    });

    pen.batch(palette.outline, Stroke::Outline.weight(), |pen| {
        circle(pen, center, radius, false);
        circle(pen, center, u(1.35), false);
        circle(pen, at(eye.pupil), u(0.5), true);
    });

    pen.batch(palette.white, Stroke::Medium.weight(), |pen| {
        for (glint, r) in eye.glints {
            circle(pen, at(glint), u(r), true);
        }
    });
}

pub(super) fn mouth(pen: &mut Pen, palette: &Palette, scale: Scale) -> Result<(), Error> {
    let u = |v: f64| scale.units(v);
    let x_i = u(7.0);
    let x_f = x_i + u(13.0);
    let y = u(5.0);
    let mid = x_i + u(6.5);

    let upper_lip = (mid, y + u(0.5));
    let lower_lip = (mid, y - u(3.0));
    let left = (curve(upper_lip, (x_i, y))?, curve(lower_lip, (x_i, y))?);
    let right = (curve(upper_lip, (x_f, y))?, curve(lower_lip, (x_f, y))?);
    let y_span = (y - u(3.05), y + u(0.55));

    let inside = Region::new(
        (x_i, x_f),
        y_span,
        vec![
            Piece::new(f64::NEG_INFINITY..mid, left.0, left.1),
            Piece::new(mid..f64::INFINITY, right.0, right.1),
        ],
    );

    // Shading along one side of each tooth.
    const LEFT_SHADES: [(f64, f64); 3] = [(1.7, 1.8), (3.5, 3.7), (5.1, 5.4)];
    const RIGHT_SHADES: [(f64, f64); 4] =
        [(6.6, 7.0), (8.3, 8.8), (9.8, 10.4), (11.2, f64::INFINITY)];
    let shades = LEFT_SHADES
        .iter()
        .map(|&(a, b)| Piece::new(x_i + u(a)..x_i + u(b), left.0, left.1))
        .chain(
            RIGHT_SHADES
                .iter()
                .map(|&(a, b)| Piece::new(x_i + u(a)..x_i + u(b), right.0, right.1)),
        )
        .collect();
    let shading = Region::new((x_i, x_f), y_span, shades);

    pen.batch(palette.white, Stroke::Medium.weight(), |pen| inside.fill(pen));
    pen.batch(palette.light_shadow, Stroke::Shadow.weight(), |pen| {
        shading.fill(pen)
    });

    const TEETH: [(f64, f64, f64); 6] = [
        (1.80, -1.42, 0.20),
        (3.70, -2.42, 0.38),
        (5.40, -2.90, 0.45),
        (7.00, -2.98, 0.48),
        (8.80, -2.60, 0.43),
        (10.4, -1.90, 0.30),
    ];
    let px = u(PX);
    pen.batch(palette.outline, Stroke::Outline.weight(), |pen| {
        pen.maybe_plot(x_i, y);
        pen.maybe_plot(x_f, y);

        plot_curve(pen, (x_i, y), (x_f, y), upper_lip);
        plot_curve(pen, (x_i, y + px), (x_f, y + px), (mid, y + u(0.55)));
        plot_curve(pen, (x_i, y), (x_f, y), lower_lip);
        plot_curve(pen, (x_i, y - px), (x_f, y - px), (mid, y - u(3.05)));

        for (dx, bottom, top) in TEETH {
            line(pen, (x_i + u(dx), y + u(bottom)), (x_i + u(dx), y + u(top)));
        }
    });
    Ok(())
}

/// One whisker, in scale units. `root` is the end near the face, where the strokes fan out, and
/// all strokes meet at `tip`. The shadow is drawn to `tip + shadow_shift`.
struct Whisker {
    root: (f64, f64),
    tip: (f64, f64),
    shadow_shift: (f64, f64),
}

const LEFT_WHISKERS: [Whisker; 3] = [
    Whisker {
        root: (6.5, 6.0),
        tip: (1.6, 7.8),
        shadow_shift: (0.0, -0.5),
    },
    Whisker {
        root: (6.0, 5.5),
        tip: (1.0, 5.5),
        shadow_shift: (0.1, -0.2),
    },
    Whisker {
        root: (6.3, 4.5),
        tip: (2.0, 3.5),
        shadow_shift: (0.2, -0.3),
    },
];

const RIGHT_WHISKERS: [Whisker; 3] = [
    Whisker {
        root: (20.5, 6.0),
        tip: (25.0, 7.8),
        shadow_shift: (0.0, -0.5),
    },
    Whisker {
        root: (21.0, 5.5),
        tip: (26.0, 5.5),
        shadow_shift: (-0.1, -0.2),
    },
    Whisker {
        root: (21.2, 4.6),
        tip: (25.0, 4.4),
        shadow_shift: (-0.2, -0.3),
    },
];

pub(super) fn right_whiskers(pen: &mut Pen, palette: &Palette, scale: Scale) -> Result<(), Error> {
    whiskers(pen, palette, scale, &RIGHT_WHISKERS);
    Ok(())
}

pub(super) fn left_whiskers(pen: &mut Pen, palette: &Palette, scale: Scale) -> Result<(), Error> {
    whiskers(pen, palette, scale, &LEFT_WHISKERS);
    Ok(())
}

fn whiskers(pen: &mut Pen, palette: &Palette, scale: Scale, whiskers: &[Whisker]) {
    let u = |v: f64| scale.units(v);
    let at = |(x, y): (f64, f64)| (u(x), u(y));

    // Root offsets in hairlines; the outermost strokes lean toward the tip.
    let fan = |w: &Whisker| {
        let lean = (w.tip.0 - w.root.0).signum();
        let (x, y) = at(w.root);
        [(lean, 2.0), (0.0, 1.0), (0.0, 0.0), (0.0, -1.0), (lean, -2.0)]
            .map(|(dx, dy)| (x + u(dx * PX), y + u(dy * PX)))
    };

    pen.batch(palette.shadow, Stroke::Shadow.weight(), |pen| {
        for w in whiskers {
            let tip = at((w.tip.0 + w.shadow_shift.0, w.tip.1 + w.shadow_shift.1));
            for root in fan(w) {
                line(pen, tip, root);
            }
        }
    });

    pen.batch(palette.outline, Stroke::Outline.weight(), |pen| {
        for w in whiskers {
            let (tip, root) = (at(w.tip), at(w.root));
            pen.maybe_plot(tip.0, tip.1);
            pen.maybe_plot(root.0, root.1);
        }
        for w in whiskers {
            let tip = at(w.tip);
            for root in fan(w) {
                line(pen, tip, root);
            }
        }
    });
}

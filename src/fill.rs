//! Filling curved silhouettes by scanning a bounding box against implicit bounds.
//!
//! A [`Region`] is a bounding box plus an ordered list of [`Piece`]s. Each piece covers a
//! half-open range of columns and supplies an upper and a lower bound there; composing several
//! pieces is how one silhouette is stitched together from different parabola segments. A pixel
//! is inside when it lies strictly between its column's bounds, so the boundary itself is left to
//! the outline that is drawn separately.

use std::ops::Range;

use crate::math::unit_steps;
use crate::parabola::Parabola;
use crate::sampler::Pen;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Bound {
    Curve(Parabola),
    /// A horizontal line at the given height.
    Level(f64),
}

impl Bound {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Bound::Curve(parabola) => parabola.eval(x),
            Bound::Level(y) => *y,
        }
    }
}

impl From<Parabola> for Bound {
    fn from(parabola: Parabola) -> Self {
        Bound::Curve(parabola)
    }
}

/// A band carved out of a piece: points strictly between `upper` and `lower` are never part of
/// the main fill, and are plotted by [`Region::fill_cutouts`] instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cutout {
    pub upper: Bound,
    pub lower: Bound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    columns: Range<f64>,
    upper: Bound,
    lower: Bound,
    cutout: Option<Cutout>,
}

impl Piece {
    pub fn new(columns: Range<f64>, upper: impl Into<Bound>, lower: impl Into<Bound>) -> Self {
        Piece {
            columns,
            upper: upper.into(),
            lower: lower.into(),
            cutout: None,
        }
    }

    pub fn with_cutout(mut self, upper: impl Into<Bound>, lower: impl Into<Bound>) -> Self {
        self.cutout = Some(Cutout {
            upper: upper.into(),
            lower: lower.into(),
        });
        self
    }
}

fn strictly_between(y: f64, lower: f64, upper: f64) -> bool {
    lower < y && y < upper
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    x: (f64, f64),
    y: (f64, f64),
    pieces: Vec<Piece>,
}

impl Region {
    /// A region scanned over the inclusive spans `x` and `y`, in unit steps from their lower ends.
    pub fn new(x: (f64, f64), y: (f64, f64), pieces: Vec<Piece>) -> Self {
        Region { x, y, pieces }
    }

    /// The first piece whose columns contain `x`.
    pub fn piece_at(&self, x: f64) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.columns.contains(&x))
    }

    /// Whether `(x, y)` belongs to the main fill. Ignores the bounding box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.piece_at(x)
            .is_some_and(|piece| Self::in_piece(piece, x, y) && !Self::in_cutout(piece, x, y))
    }

    fn in_piece(piece: &Piece, x: f64, y: f64) -> bool {
        strictly_between(y, piece.lower.eval(x), piece.upper.eval(x))
    }

    fn in_cutout(piece: &Piece, x: f64, y: f64) -> bool {
        piece
            .cutout
            .is_some_and(|c| strictly_between(y, c.lower.eval(x), c.upper.eval(x)))
    }

    /// Plots every pixel of the bounding box that is inside the region.
    pub fn fill(&self, pen: &mut Pen) {
        self.scan(pen, |piece, x, y| {
            Self::in_piece(piece, x, y) && !Self::in_cutout(piece, x, y)
        });
    }

    /// Plots every pixel of the bounding box that falls in a cutout band.
    pub fn fill_cutouts(&self, pen: &mut Pen) {
        self.scan(pen, Self::in_cutout);
    }

    fn scan(&self, pen: &mut Pen, inside: impl Fn(&Piece, f64, f64) -> bool) {
        for x in unit_steps(self.x.0, self.x.1) {
            let Some(piece) = self.piece_at(x) else {
                continue;
            };
            for y in unit_steps(self.y.0, self.y.1) {
                if inside(piece, x, y) {
                    pen.maybe_plot(x, y);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sampler::test::{points, record};

    const ALL: Range<f64> = f64::NEG_INFINITY..f64::INFINITY;

    #[test]
    fn test_fill_between_levels() {
        let region = Region::new(
            (0.0, 4.0),
            (0.0, 10.0),
            vec![Piece::new(ALL, Bound::Level(7.0), Bound::Level(2.0))],
        );
        let pts = points(|pen| region.fill(pen));
        // y in 3..=6 for each of 5 columns; the bounds themselves are excluded.
        assert_eq!(pts.len(), 5 * 4);
        assert!(pts.iter().all(|&(_, y)| (3.0..=6.0).contains(&y)));
    }

    #[test]
    fn test_fill_clipped_to_bounding_box() {
        let region = Region::new(
            (0.0, 2.0),
            (0.0, 3.0),
            vec![Piece::new(ALL, Bound::Level(100.0), Bound::Level(-100.0))],
        );
        assert_eq!(points(|pen| region.fill(pen)).len(), 3 * 4);
    }

    #[test]
    fn test_fill_under_parabola_matches_count() {
        // y = x² / 4 opening up, as the upper bound over a flat floor.
        let bowl = Parabola::new((0.0, 0.0), (4.0, 4.0)).unwrap();
        let region = Region::new(
            (-6.0, 6.0),
            (-1.0, 20.0),
            vec![Piece::new(ALL, bowl, Bound::Level(-1.0))],
        );
        let expected: usize = (-6..=6)
            .map(|x| {
                let upper = bowl.eval(x as f64);
                (-1..=20).filter(|&y| -1.0 < y as f64 && (y as f64) < upper).count()
            })
            .sum();
        let pts = points(|pen| region.fill(pen));
        assert_eq!(pts.len(), expected);
        assert!(pts.iter().all(|&(x, y)| region.contains(x, y)));
    }

    #[test]
    fn test_first_matching_piece_wins_and_gaps_are_empty() {
        let region = Region::new(
            (0.0, 9.0),
            (0.0, 9.0),
            vec![
                Piece::new(0.0..3.0, Bound::Level(5.0), Bound::Level(0.0)),
                Piece::new(0.0..6.0, Bound::Level(3.0), Bound::Level(0.0)),
                Piece::new(8.0..f64::INFINITY, Bound::Level(2.0), Bound::Level(0.0)),
            ],
        );
        let pts = points(|pen| region.fill(pen));
        let column = |x: f64| pts.iter().filter(|p| p.0 == x).count();
        assert_eq!(column(2.0), 4);
        assert_eq!(column(3.0), 2);
        assert_eq!(column(6.0), 0);
        assert_eq!(column(7.0), 0);
        assert_eq!(column(9.0), 1);
    }

    #[test]
    fn test_cutout_is_excluded_and_filled_separately() {
        let region = Region::new(
            (0.0, 0.0),
            (0.0, 10.0),
            vec![Piece::new(ALL, Bound::Level(10.0), Bound::Level(0.0))
                .with_cutout(Bound::Level(6.0), Bound::Level(3.0))],
        );
        let main: Vec<f64> = points(|pen| region.fill(pen)).iter().map(|p| p.1).collect();
        assert_eq!(main, [1.0, 2.0, 3.0, 6.0, 7.0, 8.0, 9.0]);
        let holes: Vec<f64> = points(|pen| region.fill_cutouts(pen))
            .iter()
            .map(|p| p.1)
            .collect();
        assert_eq!(holes, [4.0, 5.0]);
        assert!(!region.contains(0.0, 4.0));
    }

    #[test]
    fn test_sparse_fill_is_subset() {
        let region = Region::new(
            (0.0, 99.0),
            (0.0, 99.0),
            vec![Piece::new(ALL, Bound::Level(100.0), Bound::Level(-1.0))],
        );
        let scene = record(2, |pen| region.fill(pen));
        let kept = scene.point_count();
        assert!((4_500..5_500).contains(&kept), "kept {}", kept);
    }
}

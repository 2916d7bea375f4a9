use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::config::Density;
use crate::rand::Rng;

/// Draw context for one redraw: the canvas being plotted into, the shared random stream, and the
/// stipple density that gates every point.
pub struct Pen<'a> {
    canvas: &'a mut dyn Canvas,
    rng: &'a mut Rng,
    density: Density,
    candidates: usize,
    plotted: usize,
}

impl<'a> Pen<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, rng: &'a mut Rng, density: Density) -> Self {
        Pen {
            canvas,
            rng,
            density,
            candidates: 0,
            plotted: 0,
        }
    }

    /// Plots `(x, y)` with probability `1 / density`.
    pub fn maybe_plot(&mut self, x: f64, y: f64) {
        self.candidates += 1;
        if self.rng.one_in(self.density.get()) {
            self.canvas.plot_vertex(x, y);
            self.plotted += 1;
        }
    }

    /// Runs `f` inside a point batch drawn with `color` at `weight`.
    pub fn batch<R>(&mut self, color: Rgb, weight: f32, f: impl FnOnce(&mut Self) -> R) -> R {
        self.canvas.set_draw_color(color);
        self.canvas.set_stroke_weight(weight);
        self.canvas.begin_point_batch();
        let result = f(self);
        self.canvas.end_point_batch();
        result
    }

    /// Number of points offered to [`maybe_plot`][Pen::maybe_plot] so far.
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// Number of points that made it through the stipple gate so far.
    pub fn plotted(&self) -> usize {
        self.plotted
    }
}

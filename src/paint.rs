//! A raster host for the face: paints onto a [`raqote::DrawTarget`].

use raqote::{DrawOptions, DrawTarget, SolidSource, Source};

use crate::canvas::{Canvas, Scene};
use crate::color::Rgb;
use crate::config::Settings;

fn solid(color: Rgb) -> SolidSource {
    let [r, g, b] = color.to_bytes();
    SolidSource::from_unpremultiplied_argb(0xff, r, g, b)
}

/// Paints each vertex as a square of side `stroke weight` covering the pixel the vertex falls in
/// and its neighbours. Canvas y grows upward, so rows are flipped relative to the target.
pub struct RasterCanvas {
    dt: DrawTarget,
    clear_color: SolidSource,
    color: SolidSource,
    weight: f32,
    in_batch: bool,
}

impl RasterCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        let black = SolidSource::from_unpremultiplied_argb(0xff, 0, 0, 0);
        RasterCanvas {
            dt: DrawTarget::new(width, height),
            clear_color: black,
            color: black,
            weight: 1.0,
            in_batch: false,
        }
    }

    pub fn draw_target(&self) -> &DrawTarget {
        &self.dt
    }

    pub fn into_draw_target(self) -> DrawTarget {
        self.dt
    }
}

impl Canvas for RasterCanvas {
    fn set_clear_color(&mut self, color: Rgb) {
        self.clear_color = solid(color);
    }

    fn clear(&mut self) {
        self.dt.clear(self.clear_color);
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.color = solid(color);
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.weight = weight.max(1.0);
    }

    fn begin_point_batch(&mut self) {
        self.in_batch = true;
    }

    fn plot_vertex(&mut self, x: f64, y: f64) {
        if !self.in_batch {
            return;
        }
        // Same pixels as a GL point of this size under a unit orthographic projection.
        let size = self.weight.round();
        let left = (x as f32 - (size - 1.0) / 2.0).floor();
        let bottom = (y as f32 - (size - 1.0) / 2.0).floor();
        let top = self.dt.height() as f32 - bottom - size;
        self.dt.fill_rect(
            left,
            top,
            size,
            size,
            &Source::Solid(self.color),
            &DrawOptions::new(),
        );
    }

    fn end_point_batch(&mut self) {
        self.in_batch = false;
    }
}

/// Paints a recorded scene onto a new target sized for `settings`.
pub fn rasterize(scene: &Scene, settings: &Settings) -> DrawTarget {
    let mut canvas = RasterCanvas::new(settings.width() as i32, settings.height() as i32);
    scene.replay(&mut canvas);
    canvas.into_draw_target()
}

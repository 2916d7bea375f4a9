use serde::Serialize;

use crate::color::Rgb;

/// The drawing surface that the core plots into.
///
/// Points are only plotted between [`begin_point_batch`][Canvas::begin_point_batch] and
/// [`end_point_batch`][Canvas::end_point_batch], and take the draw color and stroke weight that
/// were current when the batch began.
pub trait Canvas {
    fn set_clear_color(&mut self, color: Rgb);
    /// Fills the whole canvas with the clear color.
    fn clear(&mut self);
    fn set_draw_color(&mut self, color: Rgb);
    /// Side length of each plotted point, in pixels.
    fn set_stroke_weight(&mut self, weight: f32);
    fn begin_point_batch(&mut self);
    fn plot_vertex(&mut self, x: f64, y: f64);
    fn end_point_batch(&mut self);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batch {
    pub color: Rgb,
    pub weight: f32,
    pub points: Vec<(f64, f64)>,
}

/// Everything one redraw produced, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub clear_color: Option<Rgb>,
    pub batches: Vec<Batch>,
}

impl Scene {
    pub fn point_count(&self) -> usize {
        self.batches.iter().map(|b| b.points.len()).sum()
    }

    /// Issues this scene's calls against another canvas.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        if let Some(color) = self.clear_color {
            canvas.set_clear_color(color);
            canvas.clear();
        }
        for batch in &self.batches {
            canvas.set_draw_color(batch.color);
            canvas.set_stroke_weight(batch.weight);
            canvas.begin_point_batch();
            for &(x, y) in &batch.points {
                canvas.plot_vertex(x, y);
            }
            canvas.end_point_batch();
        }
    }
}

/// A canvas that records into a [`Scene`] instead of painting.
#[derive(Debug)]
pub struct Recorder {
    scene: Scene,
    clear_color: Rgb,
    color: Rgb,
    weight: f32,
    open: Option<Batch>,
}

impl Default for Recorder {
    fn default() -> Self {
        Recorder {
            scene: Scene::default(),
            clear_color: Rgb::default(),
            color: Rgb::default(),
            weight: 1.0,
            open: None,
        }
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finishes recording. A batch that is still open is kept.
    pub fn finish(mut self) -> Scene {
        self.end_point_batch();
        self.scene
    }
}

impl Canvas for Recorder {
    fn set_clear_color(&mut self, color: Rgb) {
        self.clear_color = color;
    }

    fn clear(&mut self) {
        self.open = None;
        self.scene.batches.clear();
        self.scene.clear_color = Some(self.clear_color);
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.weight = weight;
    }

    fn begin_point_batch(&mut self) {
        self.end_point_batch();
        self.open = Some(Batch {
            color: self.color,
            weight: self.weight,
            points: Vec::new(),
        });
    }

    fn plot_vertex(&mut self, x: f64, y: f64) {
        if let Some(batch) = self.open.as_mut() {
            batch.points.push((x, y));
        }
    }

    fn end_point_batch(&mut self) {
        // Empty batches paint nothing.
        if let Some(batch) = self.open.take().filter(|b| !b.points.is_empty()) {
            self.scene.batches.push(batch);
        }
    }
}

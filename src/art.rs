use crate::canvas::{Canvas, Recorder, Scene};
use crate::color::Palette;
use crate::config::{Scale, Settings};
use crate::error::Error;
use crate::rand::Rng;
use crate::sampler::Pen;

mod features;

/// Visual weight of a batch of points. Affects only how large each plotted point is painted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stroke {
    Outline,
    Medium,
    Shadow,
}

impl Stroke {
    pub fn weight(self) -> f32 {
        match self {
            Stroke::Outline => 3.0,
            Stroke::Medium => 2.0,
            Stroke::Shadow => 1.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Feature {
    Fur,
    Nose,
    LeftEye,
    RightEye,
    Mouth,
    RightWhiskers,
    LeftWhiskers,
}

impl Feature {
    /// Back to front: where features overlap, the later one paints over the earlier.
    pub const DRAW_ORDER: [Feature; 7] = [
        Feature::Fur,
        Feature::Nose,
        Feature::LeftEye,
        Feature::RightEye,
        Feature::Mouth,
        Feature::RightWhiskers,
        Feature::LeftWhiskers,
    ];

    pub fn draw(self, pen: &mut Pen, palette: &Palette, scale: Scale) -> Result<(), Error> {
        match self {
            Feature::Fur => features::fur(pen, palette, scale),
            Feature::Nose => features::nose(pen, palette, scale),
            Feature::LeftEye => features::left_eye(pen, palette, scale),
            Feature::RightEye => features::right_eye(pen, palette, scale),
            Feature::Mouth => features::mouth(pen, palette, scale),
            Feature::RightWhiskers => features::right_whiskers(pen, palette, scale),
            Feature::LeftWhiskers => features::left_whiskers(pen, palette, scale),
        }
    }
}

/// Clears `canvas` to the background color and draws the whole face onto it.
pub fn render(
    canvas: &mut dyn Canvas,
    settings: &Settings,
    palette: &Palette,
    rng: &mut Rng,
) -> Result<(), Error> {
    canvas.set_clear_color(palette.background);
    canvas.clear();

    let mut pen = Pen::new(canvas, rng, settings.density);
    for feature in Feature::DRAW_ORDER {
        let before = pen.plotted();
        feature.draw(&mut pen, palette, settings.scale)?;
        tracing::debug!(?feature, points = pen.plotted() - before, "drew feature");
    }
    tracing::info!(
        candidates = pen.candidates(),
        plotted = pen.plotted(),
        density = settings.density.get(),
        scale = settings.scale.get(),
        "rendered face"
    );
    Ok(())
}

/// Like [`render`], but records the result instead of painting it.
pub fn draw(settings: &Settings, palette: &Palette, rng: &mut Rng) -> Result<Scene, Error> {
    let mut recorder = Recorder::new();
    render(&mut recorder, settings, palette, rng)?;
    Ok(recorder.finish())
}

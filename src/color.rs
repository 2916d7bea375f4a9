use std::collections::{hash_map::Entry::*, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::math::modulo;

const PALETTE_JSON: &str = include_str!("palette.json");

/// A color in hue/saturation/lightness form: hue in degrees, saturation and lightness in
/// percent.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hsl {
    pub hue: f64,
    pub sat: f64,
    pub light: f64,
}

/// Channel intensities in `[0, 255]`.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Hsl {
    pub fn new(hue: f64, sat: f64, light: f64) -> Self {
        Hsl { hue, sat, light }
    }

    /// Standard HSL to RGB conversion.
    ///
    /// Hue wraps into `[0, 360)`, so `360` is red again and negative hues count backwards.
    /// Saturation and lightness are clamped to `[0, 100]`.
    pub fn to_rgb(self) -> Rgb {
        let h = modulo(self.hue, 360.0) / 60.0;
        let s = self.sat.clamp(0.0, 100.0) / 100.0;
        let l = self.light.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (modulo(h, 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            // `h` is below 6 here, except that a NaN hue lands in sector 0 above.
            _ => (c, 0.0, x),
        };

        Rgb {
            r: (r + m) * 255.0,
            g: (g + m) * 255.0,
            b: (b + m) * 255.0,
        }
    }
}

impl Rgb {
    /// Channels rounded to bytes, for raster output.
    pub fn to_bytes(self) -> [u8; 3] {
        let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WireSwatch {
    name: String,
    #[serde(flatten)]
    color: Hsl,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WirePalette {
    swatches: Vec<WireSwatch>,
}

/// The named colors of the drawing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub nose: Rgb,
    pub shadow: Rgb,
    pub light_shadow: Rgb,
    pub outline: Rgb,
    pub white: Rgb,
}

impl Palette {
    pub fn from_bundle() -> Self {
        let wire: WirePalette =
            serde_json::from_str(PALETTE_JSON).expect("bundled palette is invalid JSON");
        Palette::from_wire(wire).expect("bundled palette is incomplete")
    }

    pub fn from_wire(wire: WirePalette) -> Result<Self, Error> {
        let mut by_name: HashMap<String, Rgb> = HashMap::with_capacity(wire.swatches.len());
        for swatch in wire.swatches {
            match by_name.entry(swatch.name) {
                Occupied(o) => {
                    let name = o.remove_entry().0;
                    return Err(Error::DuplicateSwatch { name });
                }
                Vacant(v) => v.insert(swatch.color.to_rgb()),
            };
        }
        let mut take = |name: &str| {
            by_name.remove(name).ok_or_else(|| Error::MissingSwatch {
                name: name.to_string(),
            })
        };
        Ok(Palette {
            background: take("background")?,
            nose: take("nose")?,
            shadow: take("shadow")?,
            light_shadow: take("lightShadow")?,
            outline: take("outline")?,
            white: take("white")?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_rgb_close(actual: Rgb, (r, g, b): (f64, f64, f64)) {
        let close = |u: f64, v: f64| (u - v).abs() < 1e-9;
        if !(close(actual.r, r) && close(actual.g, g) && close(actual.b, b)) {
            panic!("got {:?}, want ({}, {}, {})", actual, r, g, b);
        }
    }

    #[test]
    fn test_primaries() {
        assert_rgb_close(Hsl::new(0.0, 100.0, 50.0).to_rgb(), (255.0, 0.0, 0.0));
        assert_rgb_close(Hsl::new(120.0, 100.0, 50.0).to_rgb(), (0.0, 255.0, 0.0));
        assert_rgb_close(Hsl::new(240.0, 100.0, 50.0).to_rgb(), (0.0, 0.0, 255.0));
    }

    #[test]
    fn test_secondaries_and_grays() {
        assert_rgb_close(Hsl::new(60.0, 100.0, 50.0).to_rgb(), (255.0, 255.0, 0.0));
        assert_rgb_close(Hsl::new(180.0, 100.0, 50.0).to_rgb(), (0.0, 255.0, 255.0));
        assert_rgb_close(Hsl::new(300.0, 100.0, 50.0).to_rgb(), (255.0, 0.0, 255.0));
        assert_rgb_close(Hsl::new(0.0, 0.0, 100.0).to_rgb(), (255.0, 255.0, 255.0));
        assert_rgb_close(Hsl::new(200.0, 0.0, 0.0).to_rgb(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(
            Hsl::new(360.0, 100.0, 50.0).to_rgb(),
            Hsl::new(0.0, 100.0, 50.0).to_rgb()
        );
        assert_eq!(
            Hsl::new(-120.0, 100.0, 50.0).to_rgb(),
            Hsl::new(240.0, 100.0, 50.0).to_rgb()
        );
    }

    #[test]
    fn test_channels_in_range() {
        for hue in (0..360).step_by(7) {
            for sat in (0..=100).step_by(10) {
                for light in (0..=100).step_by(10) {
                    let rgb = Hsl::new(hue as f64, sat as f64, light as f64).to_rgb();
                    for v in [rgb.r, rgb.g, rgb.b] {
                        assert!(
                            (-1e-9..=255.0 + 1e-9).contains(&v),
                            "hsl({}, {}, {}) -> {:?}",
                            hue,
                            sat,
                            light,
                            rgb
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_to_bytes() {
        let rgb = Rgb {
            r: 254.6,
            g: -0.2,
            b: 300.0,
        };
        assert_eq!(rgb.to_bytes(), [255, 0, 255]);
    }

    #[test]
    fn test_palette_from_bundle() {
        let palette = Palette::from_bundle();
        assert_eq!(palette.white, Hsl::new(0.0, 0.0, 96.0).to_rgb());
        assert_eq!(palette.background, Hsl::new(122.0, 11.0, 47.0).to_rgb());
    }

    #[test]
    fn test_palette_rejects_bad_wire_data() {
        let json = r#"{"swatches": [{"name": "white", "hue": 0, "sat": 0, "light": 96}]}"#;
        let missing: WirePalette = serde_json::from_str(json).unwrap();
        assert_eq!(
            Palette::from_wire(missing),
            Err(Error::MissingSwatch {
                name: "background".to_string()
            })
        );

        let duplicated: WirePalette = serde_json::from_str(
            r#"{"swatches": [
                {"name": "nose", "hue": 0, "sat": 0, "light": 20},
                {"name": "nose", "hue": 0, "sat": 0, "light": 30}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            Palette::from_wire(duplicated),
            Err(Error::DuplicateSwatch {
                name: "nose".to_string()
            })
        );
    }
}

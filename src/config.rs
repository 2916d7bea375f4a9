use crate::error::Error;

#[derive(Debug, Clone, clap::Args)]
pub struct Config {
    /// Keep one in every N candidate points. Higher values give a sparser, grainier stipple.
    #[clap(long, default_value_t = 1, allow_negative_numbers = true)]
    pub density: i64,

    /// Size of the drawing. Every feature is laid out in multiples of this unit, and the canvas
    /// is 27 units wide and 11 units tall.
    #[clap(long, default_value_t = 56, allow_negative_numbers = true)]
    pub scale: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            density: 1,
            scale: Scale::DEFAULT as i64,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<Settings, Error> {
        Ok(Settings {
            density: Density::try_from(self.density)?,
            scale: Scale::try_from(self.scale)?,
        })
    }
}

/// Validated drawing parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Settings {
    pub density: Density,
    pub scale: Scale,
}

impl Settings {
    pub fn width(&self) -> u32 {
        self.scale.get() * 27
    }

    pub fn height(&self) -> u32 {
        self.scale.get() * 11
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            density: Density(1),
            scale: Scale(Scale::DEFAULT),
        }
    }
}

/// Stipple density: one in every `N` candidate points is plotted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Density(u32);

impl Density {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 3;

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Density {
    type Error = Error;
    fn try_from(density: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&density) {
            Ok(Density(density as u32))
        } else {
            Err(Error::DensityOutOfRange { density })
        }
    }
}

/// The unit that all feature geometry is expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scale(u32);

impl Scale {
    pub const MIN: u32 = 20;
    pub const MAX: u32 = 80;
    pub const DEFAULT: u32 = 56;

    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns `v` scale units, in pixels.
    pub fn units(self, v: f64) -> f64 {
        f64::from(self.0) * v
    }
}

impl TryFrom<i64> for Scale {
    type Error = Error;
    fn try_from(scale: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&scale) {
            Ok(Scale(scale as u32))
        } else {
            Err(Error::ScaleOutOfRange { scale })
        }
    }
}

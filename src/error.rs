use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A parabola whose through-point shares the vertex's height or column, so that its focal
    /// parameter would be infinite or zero.
    DegenerateParabola {
        vertex: (f64, f64),
        through: (f64, f64),
    },
    DensityOutOfRange { density: i64 },
    ScaleOutOfRange { scale: i64 },
    MissingSwatch { name: String },
    DuplicateSwatch { name: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateParabola { vertex, through } => write!(
                f,
                "degenerate parabola: vertex {:?} and point {:?} share a coordinate",
                vertex, through
            ),
            Error::DensityOutOfRange { density } => write!(
                f,
                "stipple density {} is out of range (expected {}..={})",
                density,
                crate::config::Density::MIN,
                crate::config::Density::MAX
            ),
            Error::ScaleOutOfRange { scale } => write!(
                f,
                "scale {} is out of range (expected {}..={})",
                scale,
                crate::config::Scale::MIN,
                crate::config::Scale::MAX
            ),
            Error::MissingSwatch { name } => write!(f, "palette has no swatch named {:?}", name),
            Error::DuplicateSwatch { name } => {
                write!(f, "palette defines swatch {:?} more than once", name)
            }
        }
    }
}

impl std::error::Error for Error {}

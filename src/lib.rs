pub mod art;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod fill;
pub mod math;
pub mod paint;
pub mod parabola;
pub mod rand;
pub mod raster;
pub mod sampler;

//! Procedural heightfield generation library
//!
//! Samples Perlin noise into a normalized height grid and shapes it with
//! neighbour-averaging passes that raise cells above a threshold.

pub mod error;
pub mod export;
pub mod gradient;
pub mod grid;
pub mod noise_field;
pub mod params;
pub mod pipeline;
pub mod smoothing;

pub use error::{Result, TerrainError};
pub use grid::{Grid, HeightGrid};
pub use noise_field::NoiseFieldSampler;
pub use params::{GenerationParameters, SmoothingParameters, TerrainConfig, TerrainPreset};
pub use pipeline::{generate_terrain, HeightStats};
pub use smoothing::SmoothingEngine;

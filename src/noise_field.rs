//! Initial elevation field from 2D Perlin noise.
//!
//! The seed never reaches the noise function itself. It only picks where in
//! the (fixed) Perlin plane the grid is laid down, so two seeds give two
//! different windows onto the same infinite field.

use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::grid::HeightGrid;
use crate::params::GenerationParameters;

/// Offsets are drawn from `[0, OFFSET_RANGE)`.
pub const OFFSET_RANGE: u32 = 100_000;

// Permutation seed of the Perlin table. Changing it changes every terrain.
const PERLIN_SEED: u32 = 0;

/// Deterministic sampling offset for a seed: `offset_x` is drawn first, then `offset_y`.
pub fn derive_offset(seed: u64) -> (f64, f64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let offset_x = rng.gen_range(0..OFFSET_RANGE);
    let offset_y = rng.gen_range(0..OFFSET_RANGE);
    (offset_x as f64, offset_y as f64)
}

/// Samples coherent noise over a grid.
pub struct NoiseFieldSampler {
    noise: Perlin,
}

impl Default for NoiseFieldSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseFieldSampler {
    pub fn new() -> Self {
        Self {
            noise: Perlin::new(PERLIN_SEED),
        }
    }

    /// Noise value at a point of the plane, remapped from `[-1, 1]` to `[0, 1]`.
    pub fn noise_at(&self, sample_x: f64, sample_y: f64) -> f32 {
        let n = self.noise.get([sample_x, sample_y]);
        (((n + 1.0) * 0.5) as f32).clamp(0.0, 1.0)
    }

    /// Produce the initial height grid for `params`.
    ///
    /// Identical parameters always give a bit-identical grid. Rows are filled in
    /// parallel, but each cell depends only on its own coordinates.
    pub fn sample(&self, params: &GenerationParameters) -> Result<HeightGrid> {
        params.validate()?;

        let (offset_x, offset_y) = derive_offset(params.seed);
        debug!(
            width = params.width,
            length = params.length,
            noise_scale = params.noise_scale,
            seed = params.seed,
            offset_x,
            offset_y,
            "sampling noise field"
        );

        let width = params.width;
        let scale = params.noise_scale;
        let mut grid = HeightGrid::new(width, params.length);

        grid.as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let sample_y = (y as f64 + offset_y) / scale;
                for (x, cell) in row.iter_mut().enumerate() {
                    let sample_x = (x as f64 + offset_x) / scale;
                    *cell = self.noise_at(sample_x, sample_y);
                }
            });

        Ok(grid)
    }
}

/// Convenience wrapper around [`NoiseFieldSampler::sample`].
pub fn sample(params: &GenerationParameters) -> Result<HeightGrid> {
    NoiseFieldSampler::new().sample(params)
}

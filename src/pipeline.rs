//! Sampling followed by smoothing, plus a summary of the result.

use tracing::info;

use crate::error::Result;
use crate::grid::HeightGrid;
use crate::noise_field::NoiseFieldSampler;
use crate::params::{GenerationParameters, SmoothingParameters};
use crate::smoothing::smooth;

/// Generate a normalized heightfield: Perlin noise, then `smoothing.iterations` passes.
///
/// Fails without producing a grid if the generation parameters are invalid.
pub fn generate_terrain(
    generation: &GenerationParameters,
    smoothing: &SmoothingParameters,
) -> Result<HeightGrid> {
    let initial = NoiseFieldSampler::new().sample(generation)?;
    Ok(smooth(initial, smoothing))
}

/// Summary statistics of a height grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    /// Share of cells strictly above the threshold passed to [`HeightStats::of`]
    pub above_threshold: f32,
}

impl HeightStats {
    pub fn of(grid: &HeightGrid, threshold: f32) -> Self {
        let (min, max) = grid.min_max().unwrap_or((0.0, 0.0));
        let cells = grid.len().max(1) as f64;
        let sum: f64 = grid.values().map(|&h| h as f64).sum();
        let above = grid.values().filter(|&&h| h > threshold).count();

        Self {
            min,
            max,
            mean: (sum / cells) as f32,
            above_threshold: (above as f64 / cells) as f32,
        }
    }

    pub fn log(&self, label: &str) {
        info!(
            "{}: range {:.3} to {:.3}, mean {:.3}, {:.1}% above threshold",
            label,
            self.min,
            self.max,
            self.mean,
            100.0 * self.above_threshold
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerrainError;
    use crate::grid::Grid;

    #[test]
    fn test_generate_is_deterministic_and_in_range() {
        let generation = GenerationParameters::new(40, 30, 20.0, 9);
        let smoothing = SmoothingParameters::new(6, 0.5);
        let a = generate_terrain(&generation, &smoothing).unwrap();
        let b = generate_terrain(&generation, &smoothing).unwrap();

        assert_eq!(a, b);
        assert_eq!((a.width, a.length), (40, 30));
        for &h in a.values() {
            assert!((0.0..=1.0).contains(&h));
        }
    }

    #[test]
    fn test_generate_keeps_noise_border() {
        let generation = GenerationParameters::new(16, 16, 10.0, 3);
        let raw = generate_terrain(&generation, &SmoothingParameters::new(0, 0.5)).unwrap();
        let smoothed = generate_terrain(&generation, &SmoothingParameters::new(4, 0.5)).unwrap();
        for (x, y, &h) in raw.iter() {
            if raw.is_border(x, y) {
                assert_eq!(*smoothed.get(x, y), h);
            }
        }
    }

    #[test]
    fn test_generate_rejects_invalid_parameters() {
        let result = generate_terrain(
            &GenerationParameters::new(16, 16, -5.0, 0),
            &SmoothingParameters::default(),
        );
        assert!(matches!(result, Err(TerrainError::InvalidScale(_))));
    }

    #[test]
    fn test_tiny_grid_skips_smoothing() {
        let generation = GenerationParameters::new(2, 2, 50.0, 1);
        let raw = generate_terrain(&generation, &SmoothingParameters::new(0, 0.5)).unwrap();
        let smoothed = generate_terrain(&generation, &SmoothingParameters::new(5, 0.0)).unwrap();
        assert_eq!(raw, smoothed);
    }

    #[test]
    fn test_stats() {
        let grid = Grid::from_fn(2, 2, |x, y| [0.0f32, 0.2, 0.6, 1.0][y * 2 + x]);
        let stats = HeightStats::of(&grid, 0.5);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 1.0);
        assert!((stats.mean - 0.45).abs() < 1e-6);
        assert!((stats.above_threshold - 0.5).abs() < 1e-6);
    }
}

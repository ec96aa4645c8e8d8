//! Generation and smoothing parameters, presets and JSON configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};

/// Named parameter sets for common terrain looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TerrainPreset {
    /// Reference behaviour: 512x512, scale 50, 5 passes at threshold 0.5
    #[default]
    Default,
    /// Low-frequency hills, gently smoothed
    Rolling,
    /// Many passes with a low threshold, building broad flat tops
    Plateaus,
    /// Unsmoothed noise
    Raw,
}

impl TerrainPreset {
    pub fn all() -> &'static [Self] {
        &[Self::Default, Self::Rolling, Self::Plateaus, Self::Raw]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => "Reference settings",
            Self::Rolling => "Soft rolling hills",
            Self::Plateaus => "Raised plateaus and ridges",
            Self::Raw => "Raw Perlin noise, no smoothing",
        }
    }
}

impl std::fmt::Display for TerrainPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Rolling => write!(f, "rolling"),
            Self::Plateaus => write!(f, "plateaus"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

/// Inputs to the noise sampler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    /// Cells along x
    pub width: usize,
    /// Cells along y
    pub length: usize,
    /// Spatial frequency divisor; larger values give smoother, lower-frequency noise
    pub noise_scale: f64,
    /// Source of the deterministic sampling offset
    pub seed: u64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            width: 512,
            length: 512,
            noise_scale: 50.0,
            seed: 0,
        }
    }
}

impl GenerationParameters {
    pub fn new(width: usize, length: usize, noise_scale: f64, seed: u64) -> Self {
        Self { width, length, noise_scale, seed }
    }

    /// Reject zero dimensions and non-positive or non-finite scales.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.length == 0 {
            return Err(TerrainError::InvalidDimension {
                width: self.width,
                length: self.length,
            });
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(TerrainError::InvalidScale(self.noise_scale));
        }
        Ok(())
    }
}

/// Inputs to the smoothing engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingParameters {
    /// Number of smoothing passes (0 leaves the grid untouched)
    pub iterations: usize,
    /// Cells whose value exceeds this before a pass receive the growth increment
    pub threshold: f32,
}

impl SmoothingParameters {
    /// Weight of the neighbourhood average when blending with the cell value.
    pub const BLEND_FACTOR: f32 = 0.5;
    /// Amount added to cells above the threshold on every pass.
    pub const GROWTH_INCREMENT: f32 = 0.01;

    pub fn new(iterations: usize, threshold: f32) -> Self {
        Self { iterations, threshold }
    }
}

impl Default for SmoothingParameters {
    fn default() -> Self {
        Self {
            iterations: 5,
            threshold: 0.5,
        }
    }
}

/// Full configuration for one terrain, as loaded from a JSON file.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub generation: GenerationParameters,
    pub smoothing: SmoothingParameters,
    /// Elevation of a cell at 1.0, used only when exporting denormalized heights
    pub max_height: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            generation: GenerationParameters::default(),
            smoothing: SmoothingParameters::default(),
            max_height: 100.0,
        }
    }
}

impl TerrainConfig {
    pub fn from_preset(preset: TerrainPreset) -> Self {
        match preset {
            TerrainPreset::Default => Self::default(),
            TerrainPreset::Rolling => Self {
                generation: GenerationParameters {
                    noise_scale: 120.0,
                    ..Default::default()
                },
                smoothing: SmoothingParameters::new(12, 0.7),
                ..Default::default()
            },
            TerrainPreset::Plateaus => Self {
                generation: GenerationParameters {
                    noise_scale: 40.0,
                    ..Default::default()
                },
                smoothing: SmoothingParameters::new(30, 0.45),
                max_height: 150.0,
            },
            TerrainPreset::Raw => Self {
                smoothing: SmoothingParameters::new(0, 0.5),
                ..Default::default()
            },
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TerrainError::Config(e.to_string()))
    }

    /// Load a configuration file. Fails if the file is unreadable or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| TerrainError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TerrainError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let config = TerrainConfig::default();
        assert_eq!(config.generation.width, 512);
        assert_eq!(config.generation.length, 512);
        assert_eq!(config.generation.noise_scale, 50.0);
        assert_eq!(config.generation.seed, 0);
        assert_eq!(config.smoothing.iterations, 5);
        assert_eq!(config.smoothing.threshold, 0.5);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let zero_width = GenerationParameters::new(0, 10, 50.0, 1);
        assert!(matches!(
            zero_width.validate(),
            Err(TerrainError::InvalidDimension { width: 0, length: 10 })
        ));

        let zero_length = GenerationParameters::new(10, 0, 50.0, 1);
        assert!(matches!(zero_length.validate(), Err(TerrainError::InvalidDimension { .. })));

        for scale in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let params = GenerationParameters::new(10, 10, scale, 1);
            assert!(matches!(params.validate(), Err(TerrainError::InvalidScale(_))));
        }

        assert!(GenerationParameters::new(1, 1, 0.001, 1).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TerrainConfig::from_json(
            r#"{ "generation": { "width": 64, "seed": 7 }, "smoothing": { "threshold": 0.3 } }"#,
        )
        .unwrap();

        assert_eq!(config.generation.width, 64);
        assert_eq!(config.generation.length, 512);
        assert_eq!(config.generation.seed, 7);
        assert_eq!(config.smoothing.iterations, 5);
        assert!((config.smoothing.threshold - 0.3).abs() < 1e-6);
        assert_eq!(config.max_height, 100.0);
    }

    #[test]
    fn test_json_round_trip_and_errors() {
        let config = TerrainConfig::from_preset(TerrainPreset::Plateaus);
        let json = config.to_json().unwrap();
        assert_eq!(TerrainConfig::from_json(&json).unwrap(), config);

        assert!(matches!(
            TerrainConfig::from_json("{ not json"),
            Err(TerrainError::Config(_))
        ));
    }

    #[test]
    fn test_raw_preset_disables_smoothing() {
        assert_eq!(TerrainConfig::from_preset(TerrainPreset::Raw).smoothing.iterations, 0);
        assert_eq!(TerrainPreset::all().len(), 4);
        assert_eq!(TerrainPreset::Plateaus.to_string(), "plateaus");
    }
}

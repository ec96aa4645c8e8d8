//! Colour ramps keyed by normalized height.

/// A piecewise-linear colour ramp over `[0, 1]`.
///
/// Keys are `(position, rgb)` pairs kept sorted by position. Heights below the
/// first key take its colour, heights above the last key take the last colour.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorGradient {
    keys: Vec<(f32, [u8; 3])>,
}

impl ColorGradient {
    /// Build a ramp from keys in any order. An empty ramp evaluates to black.
    pub fn new(mut keys: Vec<(f32, [u8; 3])>) -> Self {
        for key in &mut keys {
            key.0 = key.0.clamp(0.0, 1.0);
        }
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    pub fn keys(&self) -> &[(f32, [u8; 3])] {
        &self.keys
    }

    /// Deep water, shore, grass, rock and snow.
    pub fn terrain() -> Self {
        Self::new(vec![
            (0.00, [20, 50, 120]),
            (0.30, [40, 110, 180]),
            (0.38, [210, 200, 140]),
            (0.45, [80, 140, 60]),
            (0.65, [60, 100, 45]),
            (0.80, [130, 120, 110]),
            (0.92, [240, 240, 245]),
        ])
    }

    pub fn grayscale() -> Self {
        Self::new(vec![(0.0, [0, 0, 0]), (1.0, [255, 255, 255])])
    }

    pub fn desert() -> Self {
        Self::new(vec![
            (0.0, [120, 80, 40]),
            (0.4, [210, 170, 110]),
            (0.7, [235, 205, 150]),
            (1.0, [180, 110, 70]),
        ])
    }

    pub fn alpine() -> Self {
        Self::new(vec![
            (0.0, [35, 70, 40]),
            (0.35, [70, 120, 60]),
            (0.6, [110, 105, 100]),
            (0.8, [170, 170, 175]),
            (0.88, [250, 250, 255]),
        ])
    }

    /// Colour at normalized height `t` (clamped to `[0, 1]`).
    pub fn evaluate(&self, t: f32) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return [0, 0, 0],
        };
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        for pair in self.keys.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let span = p1 - p0;
                let frac = if span > 0.0 { (t - p0) / span } else { 1.0 };
                return [
                    lerp_channel(c0[0], c1[0], frac),
                    lerp_channel(c0[1], c1[1], frac),
                    lerp_channel(c0[2], c1[2], frac),
                ];
            }
        }
        last.1
    }
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self::terrain()
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

//! Neighbour-averaging smoothing with threshold growth.
//!
//! Every pass reads a frozen copy of the previous grid and writes a fresh one,
//! so the update behaves like a discrete diffusion step. Interior cells are
//! blended halfway towards their 5-point average; cells that were above the
//! threshold before the pass then grow by a fixed increment. The outer ring is
//! never touched.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{Result, TerrainError};
use crate::grid::HeightGrid;
use crate::params::SmoothingParameters;

/// Smallest side length that still has an interior cell.
pub const MIN_SMOOTHABLE_SIDE: usize = 3;

/// Fail with `DimensionMismatch` if the grid has no interior cells.
pub fn check_dimensions(grid: &HeightGrid) -> Result<()> {
    if grid.width < MIN_SMOOTHABLE_SIDE || grid.length < MIN_SMOOTHABLE_SIDE {
        return Err(TerrainError::DimensionMismatch {
            width: grid.width,
            length: grid.length,
        });
    }
    Ok(())
}

/// New value for the interior cell `x` of the row `mid`.
#[inline]
fn update_cell(up: &[f32], mid: &[f32], down: &[f32], x: usize, threshold: f32) -> f32 {
    let h = mid[x];
    let avg = (h + mid[x - 1] + mid[x + 1] + up[x] + down[x]) / 5.0;
    let blended = h + (avg - h) * SmoothingParameters::BLEND_FACTOR;

    // Growth depends on the value before blending.
    if h > threshold {
        (blended + SmoothingParameters::GROWTH_INCREMENT).clamp(0.0, 1.0)
    } else {
        blended
    }
}

/// One smoothing pass. The input is left untouched; borders are copied over.
///
/// A grid smaller than 3x3 comes back as an unchanged copy.
pub fn smooth_step(grid: &HeightGrid, threshold: f32) -> HeightGrid {
    let width = grid.width;
    let length = grid.length;
    let mut next = grid.clone();
    if check_dimensions(grid).is_err() {
        return next;
    }

    next.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .filter(|(y, _)| *y > 0 && *y + 1 < length)
        .for_each(|(y, row)| {
            let up = grid.row(y - 1);
            let mid = grid.row(y);
            let down = grid.row(y + 1);
            for x in 1..width - 1 {
                row[x] = update_cell(up, mid, down, x, threshold);
            }
        });

    next
}

/// Iterator over the grids produced by successive passes.
pub struct Passes {
    current: Option<HeightGrid>,
    remaining: usize,
    threshold: f32,
}

impl Iterator for Passes {
    type Item = HeightGrid;

    fn next(&mut self) -> Option<HeightGrid> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.current.as_ref()?;
        let next = smooth_step(current, self.threshold);
        self.remaining -= 1;
        self.current = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.current.is_some() { self.remaining } else { 0 };
        (n, Some(n))
    }
}

/// Yield the grid after each of the `params.iterations` passes.
///
/// A grid smaller than 3x3 yields nothing.
pub fn passes(grid: HeightGrid, params: &SmoothingParameters) -> Passes {
    let current = check_dimensions(&grid).ok().map(|_| grid);
    Passes {
        current,
        remaining: params.iterations,
        threshold: params.threshold,
    }
}

/// Like [`smooth`], but reports a grid without interior cells as an error.
pub fn try_smooth(grid: HeightGrid, params: &SmoothingParameters) -> Result<HeightGrid> {
    if params.iterations == 0 {
        return Ok(grid);
    }
    check_dimensions(&grid)?;

    debug!(
        width = grid.width,
        length = grid.length,
        iterations = params.iterations,
        threshold = params.threshold,
        "smoothing height grid"
    );

    Ok(run_passes(grid, params))
}

/// Run `params.iterations` smoothing passes over `grid`.
///
/// Zero iterations hands back the same grid. A grid smaller than 3x3 has no
/// interior and is also returned unchanged.
pub fn smooth(grid: HeightGrid, params: &SmoothingParameters) -> HeightGrid {
    if params.iterations == 0 {
        return grid;
    }
    if let Err(e) = check_dimensions(&grid) {
        warn!("{}, returning grid unchanged", e);
        return grid;
    }
    run_passes(grid, params)
}

fn run_passes(grid: HeightGrid, params: &SmoothingParameters) -> HeightGrid {
    let mut current = grid;
    for _ in 0..params.iterations {
        current = smooth_step(&current, params.threshold);
    }
    current
}

/// Stateless handle over the smoothing passes, for callers that prefer a value.
#[derive(Clone, Debug, Default)]
pub struct SmoothingEngine {
    pub params: SmoothingParameters,
}

impl SmoothingEngine {
    pub fn new(params: SmoothingParameters) -> Self {
        Self { params }
    }

    pub fn smooth(&self, grid: HeightGrid) -> HeightGrid {
        smooth(grid, &self.params)
    }

    pub fn try_smooth(&self, grid: HeightGrid) -> Result<HeightGrid> {
        try_smooth(grid, &self.params)
    }

    pub fn passes(&self, grid: HeightGrid) -> Passes {
        passes(grid, &self.params)
    }
}

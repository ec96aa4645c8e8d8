//! Profiling tool for the sampling and smoothing stages

use std::time::Instant;

use terrain_generator::noise_field::NoiseFieldSampler;
use terrain_generator::smoothing;
use terrain_generator::{GenerationParameters, HeightStats, SmoothingParameters};

fn main() {
    let generation = GenerationParameters::new(1024, 1024, 50.0, 1337);
    let cells = generation.width * generation.length;

    println!("=== Performance Profiling ===");
    println!("Grid size: {}x{} ({} cells)", generation.width, generation.length, cells);
    println!("Worker threads: {}", rayon::current_num_threads());
    println!();

    let start = Instant::now();
    let initial = match NoiseFieldSampler::new().sample(&generation) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Sampling failed: {}", e);
            std::process::exit(1);
        }
    };
    let sample_time = start.elapsed();
    println!("Noise sampling: {:?}", sample_time);

    for iterations in [1usize, 5, 20, 50] {
        let params = SmoothingParameters::new(iterations, 0.5);
        let start = Instant::now();
        let smoothed = smoothing::smooth(initial.clone(), &params);
        let elapsed = start.elapsed();
        let stats = HeightStats::of(&smoothed, params.threshold);
        println!(
            "Smoothing x{:<3} {:>12?}  ({:>8.2} ns/cell/pass)  max {:.3}, {:.1}% above threshold",
            iterations,
            elapsed,
            elapsed.as_nanos() as f64 / (cells * iterations) as f64,
            stats.max,
            100.0 * stats.above_threshold
        );
    }
}

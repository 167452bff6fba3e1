//! Benchmark and demo binary for the rollwin operator family.
//!
//! Usage:
//!     rollwin_bench [size] [window] [iterations]
//!
//! Shows the robust handling of a NaN/Inf-laced sample, then times each
//! builtin operator over a synthetic Gaussian series and writes a JSON
//! array of benchmark results to stdout.

use std::env;
use std::error::Error;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use serde::Serialize;

use rollwin_core::series::Series;
use rollwin_core::traits::SlidingOperator;
use rollwin_ops::prelude::*;

const DEFAULT_SIZE: usize = 10_000;
const DEFAULT_WINDOW: usize = 100;
const DEFAULT_ITERATIONS: usize = 10;

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    input_len: usize,
    window: usize,
    output_len: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_samples_per_sec: f64,
}

fn parse_arg(args: &[String], index: usize, default: usize) -> Result<usize, Box<dyn Error>> {
    match args.get(index) {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(default),
    }
}

fn generate_series(len: usize, rng: &mut StdRng) -> Vec<f64> {
    let dist = Normal::new(100.0, 10.0).expect("valid normal parameters");
    (0..len).map(|_| rng.sample(dist)).collect()
}

fn format_sample(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{value:.4}")
    }
}

fn format_series(values: &Series<f64>) -> String {
    values
        .iter()
        .map(|&value| format_sample(value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn show_invalid_sample_handling(registry: &OperatorRegistry<f64>) -> Result<(), Box<dyn Error>> {
    let sample = vec![
        1.0,
        2.0,
        f64::NAN,
        4.0,
        f64::INFINITY,
        6.0,
        f64::NEG_INFINITY,
        8.0,
        9.0,
        10.0,
    ];
    let window = 3;

    eprintln!("invalid sample handling (window = {window}):");
    eprintln!(
        "  input: {}",
        sample
            .iter()
            .map(|&value| format_sample(value))
            .collect::<Vec<_>>()
            .join(", ")
    );
    for name in registry.names() {
        let operator = registry.resolve(name)?;
        let result = operator.compute(&sample, window);
        eprintln!("  {name:>4}: {}", format_series(&result));
    }
    eprintln!();

    Ok(())
}

fn bench_operator(
    registry: &OperatorRegistry<f64>,
    name: &str,
    data: &[f64],
    window: usize,
    iterations: usize,
) -> Result<BenchmarkResult, Box<dyn Error>> {
    let operator = registry.resolve(name)?;

    let mut timings = Vec::with_capacity(iterations);
    let mut output_len = 0;
    for _ in 0..iterations {
        let start = Instant::now();
        let output = operator.compute(data, window);
        timings.push(start.elapsed().as_secs_f64() * 1000.0);
        output_len = output.len();
    }

    let total: f64 = timings.iter().sum();
    let avg = total / iterations as f64;
    let min = timings.iter().copied().fold(f64::INFINITY, f64::min);
    let max = timings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg > 0.0 {
        data.len() as f64 / (avg / 1000.0)
    } else {
        f64::INFINITY
    };

    Ok(BenchmarkResult {
        name: name.to_string(),
        input_len: data.len(),
        window,
        output_len,
        iterations,
        total_time_ms: total,
        avg_time_ms: avg,
        min_time_ms: min,
        max_time_ms: max,
        throughput_samples_per_sec: throughput,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let size = parse_arg(&args, 1, DEFAULT_SIZE)?;
    let window = parse_arg(&args, 2, DEFAULT_WINDOW)?;
    let iterations = parse_arg(&args, 3, DEFAULT_ITERATIONS)?;

    let registry = OperatorRegistry::<f64>::with_builtins();

    show_invalid_sample_handling(&registry)?;

    let mut rng = StdRng::seed_from_u64(42);
    let data = generate_series(size, &mut rng);
    eprintln!("benchmarking over {size} samples (window = {window}, iterations = {iterations}):");

    let mut results = Vec::new();
    for name in registry.names() {
        let result = bench_operator(&registry, name, &data, window, iterations)?;
        eprintln!(
            "  {:>4}: {} values, avg {:.3} ms",
            result.name, result.output_len, result.avg_time_ms
        );
        results.push(result);
    }

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}

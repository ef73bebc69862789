//! Step throughput benchmark comparing the serial and parallel backends

use std::time::Instant;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use cellular_terrain::domain::{CancelToken, Cancelled, Grid, StepStrategy, ThresholdRule, seeder, stepper};

fn seeded_grid(size: usize) -> Result<Grid, Cancelled> {
    let mut grid = Grid::new(size, size);
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    seeder::seed(&mut grid, 48, &mut rng, &CancelToken::new())?;
    Ok(grid)
}

fn benchmark_step(size: usize, iterations: u32, strategy: StepStrategy) -> Result<f64, Cancelled> {
    let rule = ThresholdRule::default();
    let mut current = seeded_grid(size)?;
    let mut scratch = Grid::new(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        stepper::step_once(&mut current, &mut scratch, rule, strategy);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), Cancelled> {
    println!("=== Cellular Terrain Step Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000, 5000];
    let iterations = 10;
    let strategies = StepStrategy::all();

    print!("{:>10}", "Size");
    for strategy in &strategies {
        print!(" {:>12}", strategy.name());
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let timings = strategies
            .iter()
            .map(|&strategy| benchmark_step(size, iterations, strategy))
            .collect::<Result<Vec<_>, _>>()?;

        print!("{:>10}", format!("{}x{}", size, size));
        for ms in &timings {
            print!(" {:>12.2}", ms);
        }
        let fastest = timings.iter().cloned().fold(f64::INFINITY, f64::min);
        println!(" {:>9.1}x", timings[0] / fastest);
    }

    println!("\n=== Ground share after smoothing (1000x1000) ===\n");

    let mut current = seeded_grid(1000)?;
    let mut scratch = Grid::new(1000, 1000);
    println!("seeded:  {:.3}", current.ground_fraction());
    for step in 1..=5 {
        stepper::step_once(&mut current, &mut scratch, ThresholdRule::default(), StepStrategy::Parallel);
        println!("step {}:  {:.3}", step, current.ground_fraction());
    }

    Ok(())
}

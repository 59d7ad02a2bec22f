//! Step throughput, serial versus parallel

use std::time::Instant;

use emergence::{Grid, RuleGenerator, RuleSet};
use rand::{SeedableRng, rngs::StdRng};

fn seeded_grid(size: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(size, size, 15, 2);
    grid.seed(0.35, rng);
    grid
}

fn benchmark(size: usize, iterations: u32, rules: &[RuleSet], parallel: bool) -> f64 {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = seeded_grid(size, &mut rng);

    let start = Instant::now();
    for rule in rules.iter().cycle().take(iterations as usize) {
        if parallel {
            grid.step_parallel(rule);
        } else {
            grid.step(rule);
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Emergence Step Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    // One rule set per tick, as the running simulation does
    let generator = RuleGenerator::new(0.5, 0.1..0.7);
    let mut rng = StdRng::seed_from_u64(0);
    let rules: Vec<RuleSet> = (0..iterations).map(|_| generator.generate(&mut rng).rules).collect();

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, &rules, false);
        let parallel_ms = benchmark(size, iterations, &rules, true);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000.0 * 2000.0;
    let parallel_ms = benchmark(2000, iterations, &rules, true);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
}

//! Throughput benchmark over the preset patterns.
//!
//! Each board is single-threaded; rayon only spreads independent boards
//! across cores.

use std::time::Instant;

use rayon::prelude::*;
use sparse_life::{Board, Pattern, presets};

struct RunResult {
    name: &'static str,
    final_population: usize,
    ms_per_gen: f64,
    avg_candidates: f64,
}

fn benchmark_pattern(pattern: &Pattern, generations: u32) -> RunResult {
    let mut board = Board::new();
    pattern.place_on(&mut board, 0, 0);

    let mut candidates = 0usize;
    let start = Instant::now();
    for _ in 0..generations {
        candidates += board.advance().candidates_evaluated;
    }
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;

    RunResult {
        name: pattern.name,
        final_population: board.live_count(),
        ms_per_gen: elapsed / generations as f64,
        avg_candidates: candidates as f64 / generations as f64,
    }
}

/// Same seed on many threads must end in the same live set
fn check_determinism(pattern: &Pattern, boards: usize, generations: u32) -> bool {
    let results: Vec<Board> = (0..boards)
        .into_par_iter()
        .map(|_| {
            let mut board = Board::new();
            pattern.place_on(&mut board, 0, 0);
            for _ in 0..generations {
                board.advance();
            }
            board
        })
        .collect();
    results.windows(2).all(|pair| pair[0] == pair[1])
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");

    let generations = 500;
    let patterns = presets::all_patterns();

    let start = Instant::now();
    let results: Vec<RunResult> = patterns[..]
        .par_iter()
        .map(|p| benchmark_pattern(p, generations))
        .collect();
    let wall = start.elapsed().as_secs_f64() * 1000.0;

    println!(
        "{:>14} {:>12} {:>12} {:>14}",
        "Pattern", "Population", "ms/gen", "Candidates/gen"
    );
    println!("{:-<56}", "");
    for r in &results {
        println!(
            "{:>14} {:>12} {:>12.3} {:>14.1}",
            r.name, r.final_population, r.ms_per_gen, r.avg_candidates
        );
    }

    let serial: f64 = results.iter().map(|r| r.ms_per_gen * generations as f64).sum();
    println!("\n{} generations each, {:.1} ms wall ({:.1} ms summed)", generations, wall, serial);

    println!("\n=== Determinism across threads ===\n");
    for pattern in [presets::R_PENTOMINO, presets::ACORN] {
        let same = check_determinism(&pattern, 8, 200);
        println!("{:>14}: {}", pattern.name, if same { "identical" } else { "DIVERGED" });
    }
}

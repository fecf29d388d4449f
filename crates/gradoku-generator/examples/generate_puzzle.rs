//! Example demonstrating seeded puzzle generation and rating.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` backed by a `BacktrackingOracle`
//! - Rate generated puzzles with a `HumanSolver`
//! - Pick the hardest puzzle within a sampling budget
//! - Reproduce a puzzle from its seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Sample more puzzles and keep the hardest one rated at least the given
//! score:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 64 --min-score 800
//! ```
//!
//! Reproduce one specific puzzle from its seed (ignores `--count` and
//! `--min-score`):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64 hex digits>
//! ```
//!
//! Trace the rating step by step:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate_puzzle -- --seed <64 hex digits>
//! ```

use std::process;

use clap::Parser;
use gradoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use gradoku_oracle::BacktrackingOracle;
use gradoku_solver::{HumanSolver, Rating};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzles to sample when searching for a hard one.
    #[arg(long, value_name = "COUNT", default_value_t = 16)]
    count: usize,

    /// Seed of one specific puzzle to reproduce.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Lowest acceptable rating score.
    #[arg(long, value_name = "SCORE", default_value_t = 0)]
    min_score: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let oracle = BacktrackingOracle::new();
    let generator = PuzzleGenerator::new(&oracle);
    let solver = HumanSolver::with_all_techniques();

    if let Some(seed) = args.seed {
        let puzzle = generator.generate_with_seed(seed);
        let rating = solver.rate(&puzzle.problem);
        print_puzzle(&puzzle, &rating);
        return;
    }

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.count)
        .into_par_iter()
        .map(|_| {
            let puzzle = generator.generate();
            let rating = solver.rate(&puzzle.problem);
            (puzzle, rating)
        })
        .filter(|(_, rating)| rating.is_solved && rating.score >= args.min_score)
        .max_by_key(|(_, rating)| rating.score);

    let Some((puzzle, rating)) = best else {
        eprintln!(
            "No puzzle out of {} rated at least {}.",
            args.count, args.min_score
        );
        process::exit(1);
    };
    print_puzzle(&puzzle, &rating);
}

fn print_puzzle(puzzle: &GeneratedPuzzle, rating: &Rating) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    println!("Rating:");
    println!("  Score: {}", rating.score);
    println!("  Solved: {}", rating.is_solved);
    let techniques = rating.used_techniques.iter().copied().collect::<Vec<_>>();
    println!("  Techniques: {}", techniques.join(", "));
}

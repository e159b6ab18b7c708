//! Command-line driver for the N-Queens solvers.
//!
//! ```bash
//! nqueens evolve --size 8 --trials 10
//! nqueens evolve --size 7 --wraparound --seed 42
//! nqueens exhaustive --size 8 --max-solutions 3 --show
//! ```
//!
//! Set `RUST_LOG=u_nqueens=debug` to follow stage progress.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::time::Instant;
use u_nqueens::backtrack::{count_solutions, solve_exhaustive};
use u_nqueens::board::Geometry;
use u_nqueens::ga::{IncrementalSearch, SearchConfig, SearchOutcome};

#[derive(Debug, Parser)]
#[command(name = "nqueens")]
#[command(about = "Solve N-Queens by incremental genetic search or backtracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the incremental genetic algorithm
    Evolve(EvolveArgs),
    /// Run the exhaustive backtracking search
    Exhaustive(ExhaustiveArgs),
}

#[derive(Debug, Args)]
struct EvolveArgs {
    /// Board size (number of queens and board dimension)
    #[arg(short = 'n', long, default_value_t = 8)]
    size: usize,

    /// Candidates per generation
    #[arg(short, long, default_value_t = 100)]
    population: usize,

    /// Generation budget per stage
    #[arg(short, long, default_value_t = 500)]
    generations: usize,

    /// Probability of a swap mutation per child
    #[arg(short, long, default_value_t = 0.15)]
    mutation_rate: f64,

    /// Let diagonals wrap around the board edges
    #[arg(short, long)]
    wraparound: bool,

    /// Seed for a reproducible run (trial `i` uses `seed + i`)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of independent runs
    #[arg(short, long, default_value_t = 1)]
    trials: usize,
}

#[derive(Debug, Args)]
struct ExhaustiveArgs {
    /// Board size (number of queens and board dimension)
    #[arg(short = 'n', long, default_value_t = 8)]
    size: usize,

    /// Stop after this many solutions
    #[arg(short, long, default_value_t = 1)]
    max_solutions: usize,

    /// Let diagonals wrap around the board edges
    #[arg(short, long)]
    wraparound: bool,

    /// Print every solution found
    #[arg(long)]
    show: bool,

    /// Also count all solutions
    #[arg(long)]
    count: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Evolve(args) => evolve(&args),
        Command::Exhaustive(args) => exhaustive(&args),
    }
}

fn geometry(wraparound: bool) -> Geometry {
    if wraparound {
        Geometry::Wraparound
    } else {
        Geometry::Flat
    }
}

fn evolve(args: &EvolveArgs) -> Result<()> {
    let base = SearchConfig::new(args.size)
        .with_population_size(args.population)
        .with_max_generations_per_step(args.generations)
        .with_mutation_rate(args.mutation_rate)
        .with_geometry(geometry(args.wraparound));
    base.validate()?;

    println!(
        "=== Incremental GA (N={}, {}, population {}, {} generations/stage) ===\n",
        args.size, base.geometry, args.population, args.generations
    );

    let mut successes = 0;
    let mut total_ms = 0.0;
    for trial in 0..args.trials {
        let mut config = base.clone();
        config.seed = args.seed.map(|s| s.wrapping_add(trial as u64));

        let outcome = IncrementalSearch::new(&config)?.run()?;
        total_ms += outcome.elapsed.as_secs_f64() * 1000.0;
        if outcome.succeeded {
            successes += 1;
        }
        if args.trials > 1 {
            println!("--- Trial {} ---", trial + 1);
        }
        print_outcome(&outcome, args.size);
    }

    if args.trials > 1 {
        println!("Summary:");
        println!("  Solved:    {}/{}", successes, args.trials);
        println!("  Mean time: {:.2}ms", total_ms / args.trials as f64);
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome, board_size: usize) {
    match &outcome.solution {
        Some(solution) => {
            println!("Solution: {solution}");
            println!("  Valid:       {}", outcome.valid);
            println!("  Generations: {}", outcome.generations);
            println!("  Time:        {:.2}ms", outcome.elapsed.as_secs_f64() * 1000.0);
            println!();
            print_board(solution.placements(), board_size);
        }
        None => {
            let reason = if outcome.cancelled { "cancelled" } else { "exhausted" };
            println!(
                "No solution ({reason} at {} queens).",
                outcome.reached_size
            );
            println!(
                "Best candidate (conflicts = {}): {}",
                outcome.best_conflicts, outcome.best
            );
            println!("  Time: {:.2}ms", outcome.elapsed.as_secs_f64() * 1000.0);
            println!();
            print_board(outcome.best.placements(), board_size);
        }
    }
    println!();
}

fn exhaustive(args: &ExhaustiveArgs) -> Result<()> {
    let geometry = geometry(args.wraparound);
    println!("=== Backtracking (N={}, {}) ===\n", args.size, geometry);

    let start = Instant::now();
    let solutions = solve_exhaustive(args.size, args.max_solutions, geometry)?;
    let elapsed = start.elapsed();

    println!("Results:");
    println!("  Solutions: {}", solutions.len());
    println!("  Time:      {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    if args.count {
        let start = Instant::now();
        let total = count_solutions(args.size, geometry)?;
        println!(
            "  Total:     {} ({:.2}ms)",
            total,
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
    println!();

    if args.show {
        for (i, solution) in solutions.iter().enumerate() {
            println!("Solution {}: {:?}", i + 1, solution);
            print_board(solution, args.size);
            println!();
        }
    }
    Ok(())
}

fn print_board(placements: &[usize], board_size: usize) {
    for &column in placements {
        let row: Vec<&str> = (0..board_size)
            .map(|c| if c == column { "Q" } else { "." })
            .collect();
        println!("{}", row.join(" "));
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use simplex_tableau::{Objective, SimplexOptions, Solution, SolveResult, Solver};
use simplex_tableau::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, LargestCoefficient};
use simplex_tableau::io::import;

/// A dense tableau linear program solver written in rust.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// How to choose the entering column
    #[arg(long, value_enum, default_value_t = Rule::Largest)]
    pivot_rule: Rule,
    /// Maximum number of pivots before giving up
    #[arg(long, default_value_t = SimplexOptions::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Log every pivot
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Rule {
    /// Column with the largest relative cost
    Largest,
    /// First column with a positive relative cost
    First,
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let level = if opts.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    println!("Reading problem file: \"{}\"...", opts.problem_file.to_string_lossy());
    let program = match import::<f64>(&opts.problem_file) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("Couldn't import the problem: {}", error);
            return ExitCode::FAILURE;
        },
    };

    let options = SimplexOptions { max_iterations: opts.max_iterations };
    let result = program.solver(options)
        .and_then(|solver| solve(&solver, program.objective(), opts.pivot_rule));

    match result {
        Ok(solution) => {
            println!("Solution computed:");
            print!("{}", solution);
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        },
    }
}

fn solve(solver: &Solver, objective: &Objective<f64>, rule: Rule) -> SolveResult<Solution<f64>> {
    match rule {
        Rule::Largest => solver.maximize_with_rule::<LargestCoefficient>(objective),
        Rule::First => solver.maximize_with_rule::<FirstProfitable>(objective),
    }
}

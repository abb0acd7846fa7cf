use std::io::Write;
use std::path::Path;

use clap::Parser;
use env_logger::Builder;
use itertools::Itertools;
use log::LevelFilter;

use perfect_phylogeny::matrix::read_matrix;
use perfect_phylogeny::reduction::{reduce, ReductionConfig};
use perfect_phylogeny::verify::{ReplayVerifier, Verifier};

#[derive(Parser)]
#[command(name = "ppp")]
#[command(
    about = "Calculate a successful c-reduction for the matrix(ces) in FILE(s), if it exists"
)]
struct Args {
    /// Paths to matrix files
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Display the operations performed by the program
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Exponential version of the algorithm
    /// (mutually exclusive with --interactive)
    #[arg(long, short = 'x')]
    exponential: bool,

    /// User input driven execution
    /// (mutually exclusive with --exponential)
    #[arg(long, short = 'i')]
    interactive: bool,
}

fn main() {
    let args = Args::parse();

    if args.exponential && args.interactive {
        eprintln!("Error: conflicting options --exponential and --interactive.");
        eprintln!("Try 'ppp --help' for more information.");
        std::process::exit(1);
    }

    if args.files.is_empty() {
        eprintln!("Error: No input file specified.");
        eprintln!("Try 'ppp --help' for more information.");
        std::process::exit(1);
    }

    let log_level = if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Off
    };
    Builder::from_default_env()
        .filter_level(log_level)
        .target(env_logger::Target::Stdout)
        .init();

    for file in &args.files {
        run_file(file, &args);
    }
}

/// Processes one input file; failures are reported and do not stop the
/// remaining files.
fn run_file(file: &str, args: &Args) {
    let g = match read_matrix(file) {
        Ok(g) => g,
        Err(e) => {
            println!("No ({}) {}", file, e);
            return;
        }
    };

    let config = if args.exponential {
        ReductionConfig::exponential()
    } else if args.interactive {
        ReductionConfig::interactive(Box::new(prompt_selection))
    } else {
        ReductionConfig::new()
    };

    match reduce(&g, &config) {
        Ok(reduction) => {
            let verified = ReplayVerifier
                .verify(Path::new(file), &reduction)
                .unwrap_or(false);
            if verified {
                println!("Ok ({}) < {} >", file, reduction.iter().join(" "));
            } else {
                println!(
                    "No ({}) the reduction does not empty the original graph",
                    file
                );
            }
        }
        Err(e) => println!("No ({}) {}", file, e),
    }
}

/// Prompts the operator to pick one of the rendered safe sources, repeating
/// until a valid index is entered.
fn prompt_selection(candidates: &[String]) -> usize {
    println!("Safe sources:");
    for (i, candidate) in candidates.iter().enumerate() {
        println!("  {}: [ {} ]", i, candidate);
    }
    loop {
        print!("Select a source [0-{}]: ", candidates.len() - 1);
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            // On end of input, fall back to the first candidate.
            Ok(0) | Err(_) => return 0,
            Ok(_) => {}
        }
        match line.trim().parse::<usize>() {
            Ok(choice) if choice < candidates.len() => return choice,
            _ => println!("Invalid selection."),
        }
    }
}

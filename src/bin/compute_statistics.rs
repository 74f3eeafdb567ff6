use clap::Parser;
use tally::cli::{execute, InputArgs};
use tally::tools::statistics;

/// Mean, median, mode, variance and standard deviation of a list of numbers
#[derive(Parser)]
#[command(name = "compute-statistics", version)]
#[command(
    about = "Compute descriptive statistics for a file with one number per line",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    args: InputArgs,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(execute(&cli.args, statistics::run));
}

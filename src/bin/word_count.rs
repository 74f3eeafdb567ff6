use clap::Parser;
use tally::cli::{execute, InputArgs};
use tally::tools::word_count;

/// Distinct words of a text file and how often each occurs
#[derive(Parser)]
#[command(name = "word-count", version)]
#[command(about = "Count how often each distinct word appears in a text file", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: InputArgs,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(execute(&cli.args, word_count::run));
}

use clap::Parser;
use tally::cli::{execute, InputArgs};
use tally::tools::conversion;

/// Binary and hexadecimal forms of a list of integers
#[derive(Parser)]
#[command(name = "convert-numbers", version)]
#[command(
    about = "Convert a file with one integer per line to binary and hexadecimal",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    args: InputArgs,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(execute(&cli.args, conversion::run));
}

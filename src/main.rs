use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = gh_open::Cli::parse();
    if let Err(e) = gh_open::run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

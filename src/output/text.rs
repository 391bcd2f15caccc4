use colored::Colorize;

use crate::resolver::Resolution;

pub fn print_url(resolution: &Resolution) {
    println!("{}", resolution.url);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

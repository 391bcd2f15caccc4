use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gh-open")]
#[command(version, about = "Open a GitHub repository in your browser")]
pub struct Cli {
    /// Directory inside the git repository
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Just print the URL
    #[arg(short, long)]
    pub print: bool,

    /// Open the branch tree (and not the PR)
    #[arg(short, long)]
    pub branch: bool,

    /// Timeout for HTTP requests in milliseconds (0 disables it)
    #[arg(short, long, env = "GH_OPEN_TIMEOUT", default_value_t = crate::config::DEFAULT_TIMEOUT_MS)]
    pub timeout: u64,

    /// Enable debug mode
    #[arg(short, long)]
    pub debug: bool,

    /// GitHub API root used for the pull request lookup
    #[arg(long, env = "GH_OPEN_API_URL", default_value = crate::github::DEFAULT_API_URL)]
    pub api_url: String,

    /// Print the full resolution as JSON (implies --print)
    #[arg(long)]
    pub json: bool,
}

//! Resolver configuration, built once from the command line.

use std::time::Duration;

use crate::cli::Cli;
use crate::github::DEFAULT_API_URL;

pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Timeout for the pull request lookup. Zero means no timeout.
    pub timeout: Duration,
    pub debug: bool,
    /// Open the branch tree without asking GitHub for a pull request.
    pub skip_pull_request: bool,
    pub github_token: Option<String>,
    pub api_url: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            debug: false,
            skip_pull_request: false,
            github_token: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            timeout: Duration::from_millis(cli.timeout),
            debug: cli.debug,
            skip_pull_request: cli.branch,
            github_token: std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            api_url: cli.api_url.clone(),
        }
    }
}

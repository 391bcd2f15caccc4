//! Turn a directory inside a git checkout into the URL to open.
//!
//! The pipeline is straight-line: find the repository root, read the remote
//! and branch, normalize the remote, then optionally swap the branch tree URL
//! for an open pull request. Only the pull request step may fail softly.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::config::ResolverConfig;
use crate::error::{ResolveError, TransportError};
use crate::git;
use crate::github::{self, GitHubClient, PullRequestLookup};
use crate::remote::WebRemote;

/// Everything learned while resolving a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub repo_root: PathBuf,
    pub remote: String,
    pub branch: String,
    pub tree_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_url: Option<String>,
    pub url: String,
    /// Set when the pull request lookup failed and the tree URL was kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

pub struct UrlResolver {
    config: ResolverConfig,
    lookup: Option<Box<dyn PullRequestLookup>>,
    lookup_error: Option<String>,
}

impl UrlResolver {
    /// Resolver using the GitHub API unless `skip_pull_request` is set.
    ///
    /// A client that cannot be built is reported as a warning on every
    /// resolution of a GitHub remote instead of failing construction.
    pub fn new(config: ResolverConfig) -> Self {
        if config.skip_pull_request {
            return Self {
                config,
                lookup: None,
                lookup_error: None,
            };
        }

        let client = GitHubClient::with_base_url(
            &config.api_url,
            config.timeout,
            config.github_token.as_deref(),
        );
        match client {
            Ok(client) => Self::with_lookup(config, Box::new(client)),
            Err(e) => Self {
                config,
                lookup: None,
                lookup_error: Some(format!("{:#}", anyhow::Error::new(e))),
            },
        }
    }

    pub fn with_lookup(config: ResolverConfig, lookup: Box<dyn PullRequestLookup>) -> Self {
        Self {
            config,
            lookup: Some(lookup),
            lookup_error: None,
        }
    }

    pub fn resolve(&self, start_dir: &Path) -> Result<Resolution, ResolveError> {
        let repo_root = git::find_repo_root(start_dir)?;
        debug!("Found git dir in \"{}\"", repo_root.display());

        let remote = git::read_remote_url(&repo_root)?;
        debug!("Found raw URL \"{}\"", remote);
        let branch = git::read_branch(&repo_root)?;
        debug!("Found branch \"{}\"", branch);

        let web_remote = WebRemote::parse(&remote)?;
        let tree_url = web_remote.tree_url(&branch);

        let mut resolution = Resolution {
            repo_root,
            remote,
            branch,
            url: tree_url.clone(),
            tree_url,
            pull_request_url: None,
            warning: None,
        };

        if self.config.skip_pull_request {
            return Ok(resolution);
        }

        let Some((owner, repo)) = web_remote.github_repo() else {
            debug!(
                "\"{}\" is not hosted on GitHub, skipping pull request lookup",
                web_remote.host
            );
            return Ok(resolution);
        };

        if let Some(message) = &self.lookup_error {
            resolution.warning = Some(message.clone());
            return Ok(resolution);
        }

        match self.find_pull_request(owner, repo, &resolution.branch) {
            Ok(Some(pr_url)) => {
                resolution.url = pr_url.clone();
                resolution.pull_request_url = Some(pr_url);
            }
            Ok(None) => debug!("No open pull request for \"{}\"", resolution.branch),
            Err(e) => {
                let message = format!("{:#}", anyhow::Error::new(e));
                debug!("Pull request lookup failed: {}", message);
                resolution.warning = Some(message);
            }
        }

        Ok(resolution)
    }

    fn find_pull_request(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Option<String>, TransportError> {
        let Some(lookup) = &self.lookup else {
            return Ok(None);
        };
        debug!("Got user \"{owner}\", repo name \"{repo}\" and branch \"{branch}\"");

        let pull_requests = lookup.open_pull_requests(owner, repo)?;
        let found = github::find_by_branch(&pull_requests, branch).map(str::to_string);
        if let Some(url) = &found {
            debug!("Got pull request URL \"{}\"", url);
        }
        Ok(found)
    }
}

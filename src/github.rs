//! Pull request lookup against the GitHub REST API.
//!
//! See <https://docs.github.com/en/rest/pulls/pulls#list-pull-requests>.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::error::TransportError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("gh-open/", env!("CARGO_PKG_VERSION"));

/// The subset of a pull request this tool needs.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    pub head: HeadRef,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Source branch of a pull request.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HeadRef {
    #[serde(rename = "ref")]
    pub branch: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Links {
    pub html: Link,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub href: String,
}

impl PullRequest {
    pub fn html_url(&self) -> &str {
        &self.links.html.href
    }
}

/// Anything that can list the open pull requests of a repository.
pub trait PullRequestLookup {
    fn open_pull_requests(&self, owner: &str, repo: &str)
        -> Result<Vec<PullRequest>, TransportError>;
}

/// Web URL of the first pull request whose source branch is `branch`.
pub fn find_by_branch<'a>(pull_requests: &'a [PullRequest], branch: &str) -> Option<&'a str> {
    pull_requests
        .iter()
        .find(|pr| pr.head.branch == branch)
        .map(PullRequest::html_url)
}

/// Blocking HTTP client for `api.github.com`.
pub struct GitHubClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl GitHubClient {
    pub fn new(timeout: Duration, token: Option<&str>) -> Result<Self, TransportError> {
        Self::with_base_url(DEFAULT_API_URL, timeout, token)
    }

    /// Client against another API root. A zero `timeout` disables the timeout.
    pub fn with_base_url(
        base_url: &str,
        timeout: Duration,
        token: Option<&str>,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = token {
            // A token with characters not allowed in headers is ignored.
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout((!timeout.is_zero()).then_some(timeout))
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn get(&self, url_path: &str) -> Result<String, TransportError> {
        let url = format!("{}/{}", self.base_url, url_path);
        debug!(
            "Sending GET request to \"{}\" with timeout {:?} ...",
            url, self.timeout
        );

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        debug!("Got response status code {}", status.as_u16());
        if status != reqwest::StatusCode::OK {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .map_err(|source| TransportError::Request { url, source })
    }
}

impl PullRequestLookup for GitHubClient {
    fn open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequest>, TransportError> {
        let url_path = format!("repos/{owner}/{repo}/pulls");
        let body = self.get(&url_path)?;
        let pull_requests = parse_pull_requests(&body).map_err(|source| TransportError::Decode {
            url: format!("{}/{}", self.base_url, url_path),
            source,
        })?;
        debug!("Got {} pull requests", pull_requests.len());
        Ok(pull_requests)
    }
}

fn parse_pull_requests(body: &str) -> Result<Vec<PullRequest>, serde_json::Error> {
    serde_json::from_str(body)
}

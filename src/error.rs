//! Error taxonomy for repository URL resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not find the directory \"{}\"", .0.display())]
    MissingDirectory(PathBuf),

    #[error("could not find a git repository in \"{}\"", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("could not convert raw URL \"{0}\" into a web URL")]
    Normalize(String),

    #[error("could not resolve an absolute path for \"{}\"", path.display())]
    AbsolutePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Problems reading or matching the contents of `.git/HEAD` and `.git/config`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not find git HEAD file in \"{}\"", .0.display())]
    HeadMissing(PathBuf),

    #[error("no branch found in git HEAD file \"{}\" (detached HEAD is not supported)", .0.display())]
    NoBranch(PathBuf),

    #[error("could not find git config file in \"{}\"", .0.display())]
    ConfigMissing(PathBuf),

    #[error("no remote URL found in git config file \"{}\"", .0.display())]
    NoRemoteUrl(PathBuf),

    #[error("failed to read \"{}\"", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of the optional pull request lookup. Never fatal.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to \"{url}\" failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid response status code {status} from \"{url}\"")]
    Status { url: String, status: u16 },

    #[error("could not decode pull requests from \"{url}\"")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_converts_into_resolve_error() {
        let err: ResolveError = ParseError::NoBranch(PathBuf::from("/repo/.git/HEAD")).into();
        assert!(matches!(err, ResolveError::Parse(ParseError::NoBranch(_))));
        assert!(err.to_string().contains("no branch found"));
    }

    #[test]
    fn test_not_found_message_names_directory() {
        let err = ResolveError::NotFound(PathBuf::from("/tmp/somewhere"));
        assert_eq!(
            err.to_string(),
            "could not find a git repository in \"/tmp/somewhere\""
        );
    }

    #[test]
    fn test_status_error_message() {
        let err = TransportError::Status {
            url: "https://api.github.com/repos/a/b/pulls".into(),
            status: 403,
        };
        assert!(err.to_string().contains("403"));
    }
}

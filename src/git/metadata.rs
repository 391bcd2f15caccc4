//! Branch and remote URL extraction from `.git/HEAD` and `.git/config`.
//!
//! Both files are line-oriented and loosely structured, so a pair of regexes
//! is enough; no git config grammar is needed.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::ParseError;

static BRANCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)ref: refs/heads/(.*)$").expect("valid branch regex"));

static REMOTE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^.*url = (.*)$").expect("valid remote URL regex"));

static GITDIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^gitdir:\s*(.+)$").expect("valid gitdir regex"));

/// Where the metadata files of a repository live.
///
/// For a regular checkout both point at `<root>/.git`. Linked worktrees and
/// submodules have a `.git` file pointing elsewhere, and worktrees share the
/// config of the main repository through `commondir`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GitDirs {
    head_dir: PathBuf,
    config_dir: PathBuf,
}

fn git_dirs(repo_root: &Path) -> GitDirs {
    let dot_git = repo_root.join(".git");
    if !dot_git.is_file() {
        return GitDirs {
            head_dir: dot_git.clone(),
            config_dir: dot_git,
        };
    }

    let pointed = std::fs::read_to_string(&dot_git).ok().and_then(|content| {
        GITDIR_RE
            .captures(&content)
            .map(|caps| repo_root.join(caps[1].trim()))
    });
    let Some(head_dir) = pointed else {
        return GitDirs {
            head_dir: dot_git.clone(),
            config_dir: dot_git,
        };
    };
    debug!("Following gitdir pointer to \"{}\"", head_dir.display());

    let config_dir = std::fs::read_to_string(head_dir.join("commondir"))
        .ok()
        .map(|common| head_dir.join(common.trim()))
        .unwrap_or_else(|| head_dir.clone());

    GitDirs {
        head_dir,
        config_dir,
    }
}

fn read_text(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read the checked-out branch name from `HEAD`.
///
/// A detached HEAD (raw commit hash) is an error, not a fallback.
pub fn read_branch(repo_root: &Path) -> Result<String, ParseError> {
    let git_dir = git_dirs(repo_root).head_dir;
    let head_path = git_dir.join("HEAD");
    if !head_path.is_file() {
        return Err(ParseError::HeadMissing(git_dir));
    }

    let head = read_text(&head_path)?;
    debug!("Read git head file: \"{}\"", head.trim());

    first_capture(&BRANCH_RE, &head).ok_or(ParseError::NoBranch(head_path))
}

/// Read the first `url = ...` value from `config`. The section is not checked.
pub fn read_remote_url(repo_root: &Path) -> Result<String, ParseError> {
    let git_dir = git_dirs(repo_root).config_dir;
    let config_path = git_dir.join("config");
    debug!("Looking for git config file \"{}\"", config_path.display());
    if !config_path.is_file() {
        return Err(ParseError::ConfigMissing(git_dir));
    }

    let config = read_text(&config_path)?;
    first_capture(&REMOTE_URL_RE, &config).ok_or(ParseError::NoRemoteUrl(config_path))
}

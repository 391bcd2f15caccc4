//! Repository discovery and git metadata parsing.

mod metadata;
mod walker;

pub use metadata::{read_branch, read_remote_url};
pub use walker::find_repo_root;

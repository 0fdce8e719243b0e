//! Git operations via the git CLI.

pub mod diff;

pub use diff::{DiffSource, GitCli, check_git_installed};

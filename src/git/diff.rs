//! Working tree diff capture via the git CLI.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::DiffError;

/// Arguments for `git`: no pager, no color, no moved-line detection.
pub const DIFF_ARGS: [&str; 4] = ["--no-pager", "diff", "--no-color", "--color-moved=no"];

/// Source of the diff text that a commit message is written for.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiffSource: Send + Sync {
    /// Return the unified diff text. An empty string means a clean tree.
    async fn diff(&self) -> Result<String, DiffError>;
}

/// Runs `git diff` as a subprocess.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    repo_dir: Option<PathBuf>,
}

impl GitCli {
    /// Diff the repository containing the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff the repository at `repo_dir`.
    pub fn in_dir(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: Some(repo_dir.into()),
        }
    }
}

#[async_trait]
impl DiffSource for GitCli {
    async fn diff(&self) -> Result<String, DiffError> {
        check_git_installed()?;

        let mut cmd = Command::new("git");
        cmd.args(DIFF_ARGS)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(DiffError::SpawnFailed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            let code = output.status.code().unwrap_or(-1);
            return Err(DiffError::NonZeroExit { code, stderr });
        }

        let diff = String::from_utf8_lossy(&output.stdout).to_string();
        debug!("Captured diff: {} bytes", diff.len());
        Ok(diff)
    }
}

/// Check that the git executable is on `PATH`.
pub fn check_git_installed() -> Result<(), DiffError> {
    which::which("git")
        .map(|_| ())
        .map_err(|_| DiffError::GitNotInstalled)
}

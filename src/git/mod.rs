use anyhow::{Context, Result, anyhow};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::traits::GitOperations;

/// Runs git operations in a repository by invoking the `git` binary.
///
/// Each operation is a single subprocess call checked only for its exit
/// status; on failure the trimmed stderr becomes the error detail.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Checks out an existing branch
    ///
    /// # Errors
    /// Returns an error if the git invocation fails or exits non-zero
    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.run_checked(&["checkout", branch])?;
        Ok(())
    }

    /// Pulls a branch from a remote into the current branch
    ///
    /// # Errors
    /// Returns an error if the git invocation fails or exits non-zero
    /// (unknown branch, network failure, merge conflict, dirty working tree)
    pub fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_checked(&["pull", remote, branch])?;
        Ok(())
    }

    /// Creates a new branch starting from the current HEAD and checks it out
    ///
    /// # Errors
    /// Returns an error if the git invocation fails or exits non-zero
    /// (e.g. the branch already exists or the name is rejected by git)
    pub fn checkout_new_branch(&self, branch: &str) -> Result<()> {
        self.run_checked(&["checkout", "-b", branch])?;
        Ok(())
    }

    fn run_checked(&self, args: &[&str]) -> Result<Output> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("git {} failed: {}", args.join(" "), stderr.trim()));
        }
        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        debug!(
            "running git {} in {}",
            args.join(" "),
            self.workdir.display()
        );
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("Failed to spawn git {}", args.join(" ")))
    }
}

impl GitOperations for GitCli {
    fn checkout(&self, branch: &str) -> Result<()> {
        self.checkout(branch)
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.pull(remote, branch)
    }

    fn checkout_new_branch(&self, branch: &str) -> Result<()> {
        self.checkout_new_branch(branch)
    }
}

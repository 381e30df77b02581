#![allow(clippy::unwrap_used)] // Tests use unwrap for simplicity

//! Tests for the `GitCli` subprocess layer against real git repositories.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use branchout::git::GitCli;

/// Run a git command in the given directory, failing on non-zero exit
fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .context("Failed to execute git command")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Git command failed: {}", stderr);
    }

    Ok(())
}

/// Initialize a repository with one commit on a `main` branch
fn init_repo(dir: &Path) -> Result<()> {
    run_git(dir, &["init"])?;
    run_git(dir, &["config", "user.name", "Test User"])?;
    run_git(dir, &["config", "user.email", "test@example.com"])?;

    std::fs::write(dir.join("README.md"), "# Test Repo")?;
    run_git(dir, &["add", "."])?;
    run_git(dir, &["commit", "-m", "Initial commit"])?;

    // Ensure we have a main branch (some git versions default to 'master')
    run_git(dir, &["branch", "-M", "main"])?;

    Ok(())
}

fn current_branch(dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(dir)
        .output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[test]
fn test_checkout_new_branch_switches_to_it() -> Result<()> {
    let temp_dir = TempDir::new()?;
    init_repo(temp_dir.path())?;

    let git = GitCli::new(temp_dir.path());
    git.checkout_new_branch("feat-x")?;

    assert_eq!(current_branch(temp_dir.path())?, "feat-x");
    Ok(())
}

#[test]
fn test_checkout_returns_to_an_existing_branch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    init_repo(temp_dir.path())?;

    let git = GitCli::new(temp_dir.path());
    git.checkout_new_branch("feat-x")?;
    git.checkout("main")?;

    assert_eq!(current_branch(temp_dir.path())?, "main");
    Ok(())
}

#[test]
fn test_pull_fast_forwards_from_origin() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let origin_dir = temp_dir.path().join("origin");
    let clone_dir = temp_dir.path().join("clone");
    std::fs::create_dir_all(&origin_dir)?;

    init_repo(&origin_dir)?;
    run_git(
        temp_dir.path(),
        &[
            "clone",
            origin_dir.to_string_lossy().as_ref(),
            clone_dir.to_string_lossy().as_ref(),
        ],
    )?;
    run_git(&clone_dir, &["config", "user.name", "Test User"])?;
    run_git(&clone_dir, &["config", "user.email", "test@example.com"])?;

    // A new commit upstream that the clone does not have yet
    std::fs::write(origin_dir.join("CHANGES.md"), "upstream work")?;
    run_git(&origin_dir, &["add", "."])?;
    run_git(&origin_dir, &["commit", "-m", "Upstream commit"])?;

    let git = GitCli::new(&clone_dir);
    git.pull("origin", "main")?;

    assert!(clone_dir.join("CHANGES.md").exists());
    Ok(())
}

#[test]
fn test_checkout_unknown_branch_carries_git_detail() -> Result<()> {
    let temp_dir = TempDir::new()?;
    init_repo(temp_dir.path())?;

    let git = GitCli::new(temp_dir.path());
    let error = git.checkout("does-not-exist").unwrap_err();

    let message = error.to_string();
    assert!(message.contains("git checkout does-not-exist failed"));
    Ok(())
}

#[test]
fn test_pull_without_a_remote_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    init_repo(temp_dir.path())?;

    let git = GitCli::new(temp_dir.path());
    assert!(git.pull("origin", "main").is_err());
    Ok(())
}

#[test]
fn test_creating_a_branch_that_already_exists_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    init_repo(temp_dir.path())?;

    let git = GitCli::new(temp_dir.path());
    git.checkout_new_branch("feat-x")?;
    git.checkout("main")?;

    assert!(git.checkout_new_branch("feat-x").is_err());
    Ok(())
}

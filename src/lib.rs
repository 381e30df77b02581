//! # Branchout CLI
//!
//! An interactive CLI tool for cutting a new branch from your main branch across
//! multiple local git repositories at once.
//!
//! ## Features
//!
//! - **Remembered Main Branch** - Persists your main branch choice to `~/.cli-config.json`
//! - **Multi-Project Runs** - Targets every project from the `PROJECTS` environment variable, or just one
//! - **Per-Project Isolation** - A failure in one repository never aborts the run for the others
//! - **Clean Cancellation** - Esc or Ctrl-C during any prompt stops the run without touching anything
//!
//! ## Quick Start
//!
//! ```bash
//! # Configure the projects branchout manages (directories under the current dir)
//! export PROJECTS="app1,app2,shared-lib"
//!
//! # Run the interactive flow: pick the main branch, the projects, and the
//! # new branch name per project
//! branchout
//! ```
//!
//! ## Module Structure
//!
//! - [`commands`] - The interactive run flow (prompts, validation, git loop)
//! - [`config`] - Persisted configuration in `~/.cli-config.json`
//! - [`projects`] - Project list parsing from the `PROJECTS` environment variable
//! - [`git`] - Git operations via single-shot `git` subprocess invocations
//! - [`prompt`] - Abstracts interactive prompts for testability
//! - [`traits`] - Defines the GitOperations trait for testability and abstraction

pub mod commands;
pub mod config;
pub mod git;
pub mod projects;
pub mod prompt;
pub mod traits;

pub use anyhow::Result;

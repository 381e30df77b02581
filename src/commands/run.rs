//! The interactive run flow: resolve the main branch, pick the target
//! projects, collect a new branch name per project, then walk the projects
//! one after another running checkout, pull, and branch creation.
//!
//! A failure in one project never aborts the run for the others; each
//! project ends in its own [`ProjectOutcome`] and the whole run is summed up
//! in a [`RunReport`].

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::git::GitCli;
use crate::prompt::{Prompter, RealPrompter};
use crate::traits::GitOperations;

/// The remote pulled from before cutting the new branch.
const DEFAULT_REMOTE: &str = "origin";

/// Fallback main branch name offered when none has been configured yet.
const FALLBACK_MAIN_BRANCH: &str = "main";

/// How a run ended.
pub enum RunOutcome {
    /// Every selected project was attempted; per-project results inside.
    Completed(RunReport),
    /// The user cancelled during prompting; nothing was touched.
    Cancelled,
}

/// Per-project results collected over a run.
pub struct RunReport {
    pub results: Vec<ProjectResult>,
}

impl RunReport {
    #[must_use]
    pub fn created(&self) -> usize {
        self.results
            .iter()
            .filter(|result| matches!(result.outcome, ProjectOutcome::Created { .. }))
            .count()
    }

    #[must_use]
    pub fn skipped_or_failed(&self) -> usize {
        self.results.len() - self.created()
    }
}

/// Result for a single project.
pub struct ProjectResult {
    pub project: String,
    pub outcome: ProjectOutcome,
}

/// Terminal state of one project's checkout → pull → branch sequence.
#[derive(Debug)]
pub enum ProjectOutcome {
    /// The new branch exists and is checked out.
    Created { branch: String },
    /// The project directory does not exist.
    MissingPath { path: PathBuf },
    /// The directory exists but has no `.git` metadata directory.
    NotARepository { path: PathBuf },
    /// One of the git operations failed; detail carries the underlying error.
    GitFailed { detail: String },
}

/// Runs the interactive flow against the current working directory.
///
/// # Errors
/// Returns an error if prompting fails, the configuration cannot be saved,
/// or the current directory cannot be determined
pub fn run(config: CliConfig, projects: &[String]) -> Result<RunOutcome> {
    let root = std::env::current_dir()?;
    run_with(&RealPrompter, &root, config, projects, &|path| {
        Box::new(GitCli::new(path))
    })
}

/// Runs the flow with injected prompt and git implementations (for testing)
///
/// # Errors
/// Returns an error if prompting fails or the configuration cannot be saved
pub fn run_with(
    prompter: &dyn Prompter,
    root: &Path,
    mut config: CliConfig,
    projects: &[String],
    open_git: &dyn Fn(&Path) -> Box<dyn GitOperations>,
) -> Result<RunOutcome> {
    let Some(main_branch) = resolve_main_branch(prompter, &mut config)? else {
        return Ok(RunOutcome::Cancelled);
    };

    let Some(selected) = select_projects(prompter, projects)? else {
        return Ok(RunOutcome::Cancelled);
    };

    let Some(assignments) = assign_branch_names(prompter, &selected)? else {
        return Ok(RunOutcome::Cancelled);
    };

    let mut results = Vec::with_capacity(assignments.len());

    for (project, branch) in &assignments {
        println!("\nWorking in '{project}'");

        let outcome = cut_branch_in_project(root, project, &main_branch, branch, open_git);
        match &outcome {
            ProjectOutcome::Created { branch } => {
                println!("✓ Created branch '{branch}' from '{main_branch}' in '{project}'");
            }
            ProjectOutcome::MissingPath { path } => {
                eprintln!("✗ Project path does not exist: {}", path.display());
            }
            ProjectOutcome::NotARepository { path } => {
                eprintln!("✗ Not a git repository: {}", path.display());
            }
            ProjectOutcome::GitFailed { detail } => {
                eprintln!("✗ Failed to create branch in '{project}': {detail}");
            }
        }

        results.push(ProjectResult {
            project: project.clone(),
            outcome,
        });
    }

    let report = RunReport { results };
    if report.skipped_or_failed() == 0 {
        println!("\n✓ All done! Created {} new branch(es).", report.created());
    } else {
        println!(
            "\nFinished with {} branch(es) created and {} project(s) skipped or failed.",
            report.created(),
            report.skipped_or_failed()
        );
    }

    Ok(RunOutcome::Completed(report))
}

/// Confirms or replaces the configured main branch.
///
/// The configuration is written back only when the value changed or was
/// newly set; confirming the current value leaves the file alone.
fn resolve_main_branch(prompter: &dyn Prompter, config: &mut CliConfig) -> Result<Option<String>> {
    if let Some(current) = config.main_branch.clone() {
        let message = format!("The main branch is currently '{current}'. Keep it?");
        match prompter.confirm(&message, true)? {
            None => return Ok(None),
            Some(true) => return Ok(Some(current)),
            Some(false) => {}
        }
    } else {
        // The name prompt follows either way; there is nothing to keep yet.
        match prompter.confirm("No main branch is configured yet. Set one now?", true)? {
            None => return Ok(None),
            Some(_) => {}
        }
    }

    let default = config
        .main_branch
        .clone()
        .unwrap_or_else(|| FALLBACK_MAIN_BRANCH.to_string());
    let Some(main_branch) = prompter.input(
        "Main branch name (e.g. main, master, develop):",
        Some(&default),
    )?
    else {
        return Ok(None);
    };

    if config.main_branch.as_deref() != Some(main_branch.as_str()) {
        config.main_branch = Some(main_branch.clone());
        config.save().context("Failed to save configuration")?;
    }

    Ok(Some(main_branch))
}

/// Picks the projects to operate on.
///
/// With exactly one configured project the selection prompts are skipped
/// entirely and that project is chosen automatically.
fn select_projects(prompter: &dyn Prompter, projects: &[String]) -> Result<Option<Vec<String>>> {
    if let [only] = projects {
        println!("Only one project configured: {only}");
        return Ok(Some(vec![only.clone()]));
    }

    let message = format!("Create the branch in all {} projects?", projects.len());
    match prompter.confirm(&message, true)? {
        None => Ok(None),
        Some(true) => Ok(Some(projects.to_vec())),
        Some(false) => {
            let Some(project) = prompter.select("Select a project:", projects.to_vec())? else {
                return Ok(None);
            };
            Ok(Some(vec![project]))
        }
    }
}

/// Asks for the new branch name of every selected project, in order.
fn assign_branch_names(
    prompter: &dyn Prompter,
    selected: &[String],
) -> Result<Option<Vec<(String, String)>>> {
    let mut assignments = Vec::with_capacity(selected.len());

    for project in selected {
        let message = format!("New branch name for '{project}':");
        let Some(branch) = prompter.input(&message, None)? else {
            return Ok(None);
        };
        assignments.push((project.clone(), branch));
    }

    Ok(Some(assignments))
}

/// Validates one project directory and runs the three-step git sequence in it.
fn cut_branch_in_project(
    root: &Path,
    project: &str,
    main_branch: &str,
    branch: &str,
    open_git: &dyn Fn(&Path) -> Box<dyn GitOperations>,
) -> ProjectOutcome {
    let path = root.join(project);

    if !path.exists() {
        return ProjectOutcome::MissingPath { path };
    }

    if !path.join(".git").exists() {
        return ProjectOutcome::NotARepository { path };
    }

    let git = open_git(&path);
    match checkout_pull_branch(git.as_ref(), main_branch, branch) {
        Ok(()) => ProjectOutcome::Created {
            branch: branch.to_string(),
        },
        Err(error) => ProjectOutcome::GitFailed {
            detail: format!("{error:#}"),
        },
    }
}

/// The three-step sequence: checkout main, pull it from origin, cut the new branch.
fn checkout_pull_branch(git: &dyn GitOperations, main_branch: &str, branch: &str) -> Result<()> {
    git.checkout(main_branch)?;
    git.pull(DEFAULT_REMOTE, main_branch)?;
    git.checkout_new_branch(branch)?;
    Ok(())
}

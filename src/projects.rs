//! Project list parsing from the `PROJECTS` environment variable.

use anyhow::Result;

/// Environment variable holding the comma-separated list of managed projects.
pub const PROJECTS_ENV: &str = "PROJECTS";

/// Reads the managed project list from the environment.
///
/// # Errors
/// Returns an error if `PROJECTS` is unset or contains no non-empty entries
pub fn from_env() -> Result<Vec<String>> {
    let raw = std::env::var(PROJECTS_ENV).unwrap_or_default();
    let projects = parse(&raw);

    if projects.is_empty() {
        anyhow::bail!(
            "No projects configured. Set the {} environment variable (comma-separated directory names) in .env or in the environment.",
            PROJECTS_ENV
        );
    }

    Ok(projects)
}

/// Splits a comma-separated project list, trimming entries and dropping
/// empty ones while preserving order.
#[must_use]
pub fn parse(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|project| !project.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_trims_whitespace_and_preserves_order() {
        let projects = parse(" app1 , app2,  shared-lib ");
        assert_eq!(projects, vec!["app1", "app2", "shared-lib"]);
    }

    #[test]
    fn test_parse_drops_empty_entries() {
        let projects = parse("app1,,app2, ,");
        assert_eq!(projects, vec!["app1", "app2"]);
    }

    #[test]
    fn test_parse_empty_string_yields_no_projects() {
        assert!(parse("").is_empty());
        assert!(parse(" , , ").is_empty());
    }

    #[test]
    fn test_from_env_with_projects_set() {
        temp_env::with_var(PROJECTS_ENV, Some("app1, app2"), || {
            let projects = from_env().unwrap();
            assert_eq!(projects, vec!["app1", "app2"]);
        });
    }

    #[test]
    fn test_from_env_unset_is_an_error() {
        temp_env::with_var(PROJECTS_ENV, None::<&str>, || {
            let result = from_env();
            assert!(result.is_err());
            assert!(
                result
                    .unwrap_err()
                    .to_string()
                    .contains("No projects configured")
            );
        });
    }

    #[test]
    fn test_from_env_whitespace_only_is_an_error() {
        temp_env::with_var(PROJECTS_ENV, Some("  ,  "), || {
            assert!(from_env().is_err());
        });
    }
}

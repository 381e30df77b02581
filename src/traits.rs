use anyhow::Result;

/// Trait for the git operations the run flow needs, to enable mocking in tests
pub trait GitOperations {
    fn checkout(&self, branch: &str) -> Result<()>;
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;
    fn checkout_new_branch(&self, branch: &str) -> Result<()>;
}

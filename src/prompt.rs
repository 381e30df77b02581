use anyhow::Result;
use inquire::{Confirm, InquireError, Select, Text};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Trait for providing interactive prompt functionality
/// This allows us to abstract away the interactive prompts for testing
///
/// Every method returns `Ok(None)` when the user cancels the prompt (Esc or
/// Ctrl-C), so a clean stop stays distinguishable from a hard failure.
pub trait Prompter {
    /// Ask a yes/no question with a default answer
    ///
    /// # Errors
    /// Returns an error if the prompt fails for a reason other than cancellation
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>>;

    /// Ask for free-text input, optionally pre-filled with a default value
    ///
    /// # Errors
    /// Returns an error if the prompt fails for a reason other than cancellation
    fn input(&self, message: &str, default: Option<&str>) -> Result<Option<String>>;

    /// Present a selection menu and return the user's choice
    ///
    /// # Errors
    /// Returns an error if the prompt fails for a reason other than cancellation
    fn select(&self, message: &str, options: Vec<String>) -> Result<Option<String>>;
}

/// Real implementation using inquire for production use
pub struct RealPrompter;

impl Prompter for RealPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>> {
        cancellable(Confirm::new(message).with_default(default).prompt())
    }

    fn input(&self, message: &str, default: Option<&str>) -> Result<Option<String>> {
        let mut prompt = Text::new(message);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        cancellable(prompt.prompt())
    }

    fn select(&self, message: &str, options: Vec<String>) -> Result<Option<String>> {
        cancellable(
            Select::new(message, options)
                .with_page_size(10)
                .with_vim_mode(true)
                .prompt(),
        )
    }
}

/// Maps user-initiated cancellation to `None` and passes everything else through
fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(other) => Err(other.into()),
    }
}

/// A scripted answer for [`MockPrompter`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockAnswer {
    Confirm(bool),
    Input(String),
    Select(String),
    /// The user cancels at this prompt
    Cancel,
}

/// Mock implementation for testing that replays a scripted answer sequence
pub struct MockPrompter {
    answers: RefCell<VecDeque<MockAnswer>>,
}

impl MockPrompter {
    #[must_use]
    pub fn new(answers: Vec<MockAnswer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
        }
    }

    fn next_answer(&self, prompt_kind: &str, message: &str) -> Result<MockAnswer> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer left for {prompt_kind} '{message}'"))
    }
}

impl Prompter for MockPrompter {
    fn confirm(&self, message: &str, _default: bool) -> Result<Option<bool>> {
        match self.next_answer("confirm", message)? {
            MockAnswer::Confirm(answer) => Ok(Some(answer)),
            MockAnswer::Cancel => Ok(None),
            other => anyhow::bail!("Expected a confirm answer for '{message}', got {other:?}"),
        }
    }

    fn input(&self, message: &str, _default: Option<&str>) -> Result<Option<String>> {
        match self.next_answer("input", message)? {
            MockAnswer::Input(answer) => Ok(Some(answer)),
            MockAnswer::Cancel => Ok(None),
            other => anyhow::bail!("Expected an input answer for '{message}', got {other:?}"),
        }
    }

    fn select(&self, message: &str, options: Vec<String>) -> Result<Option<String>> {
        match self.next_answer("select", message)? {
            // Validate that the response is actually in the options
            MockAnswer::Select(answer) if options.contains(&answer) => Ok(Some(answer)),
            MockAnswer::Select(answer) => {
                anyhow::bail!("Mock answer '{answer}' not found in options")
            }
            MockAnswer::Cancel => Ok(None),
            other => anyhow::bail!("Expected a select answer for '{message}', got {other:?}"),
        }
    }
}

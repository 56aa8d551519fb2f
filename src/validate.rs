pub mod utils;

use crate::{error::Result, locator::Locator};
use regex::Regex;
use std::sync::OnceLock;

/// Whole-string shape of an issue or pull request url. Group 1 is the
/// resource keyword, group 2 the id. The wildcards stop at any line
/// terminator (`\n`, `\r`, NEL, LS, PS).
const ISSUE_URL_PATTERN: &str = r"^[^\n\r\x{85}\x{2028}\x{2029}]*/(issues|pull)/([0-9]+)(?:/|$)[^\n\r\x{85}\x{2028}\x{2029}]*$";

static ISSUE_URL_RE: OnceLock<Regex> = OnceLock::new();

/// Trait for validating platform-specific identifiers extracted from user
/// input.
///
/// Implementors check the input's format and return the numeric id it
/// carries, or an error describing why the input was rejected.
pub trait Validate {
    /// Validate the input and return the id embedded in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or does not have the expected shape.
    fn validate(&self, input: &str) -> Result<u64>;
}

/// Validator for issue and pull request urls.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueLocatorValidator;

impl Validate for IssueLocatorValidator {
    fn validate(&self, input: &str) -> Result<u64> {
        Locator::new(input)?.id()
    }
}

/// Compiled issue url pattern, shared by every caller.
///
/// # Panics
///
/// If the built-in pattern fails to compile.
pub fn issue_url_regex() -> &'static Regex {
    ISSUE_URL_RE.get_or_init(|| {
        Regex::new(ISSUE_URL_PATTERN).expect("failed to compile issue url regex")
    })
}

/// Check a raw string without building a [`Locator`]. Empty input is simply
/// not valid.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    issue_url_regex().is_match(input)
}

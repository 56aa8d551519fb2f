use crate::error::{Error, Result};

/// Rejects missing or empty input. Whitespace is kept as-is.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` for `None` or `""`.
pub fn validate_non_empty(input: Option<&str>) -> Result<&str> {
    match input {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::invalid_argument("URL should not be empty")),
    }
}

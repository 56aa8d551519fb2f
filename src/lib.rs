pub mod config;
pub mod error;
pub mod locator;
pub mod telemetry;
pub mod validate;

pub use error::{Error, Result};
pub use locator::{Locator, ResourceKind};
pub use validate::{IssueLocatorValidator, Validate, is_valid};

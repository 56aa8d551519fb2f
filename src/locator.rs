use crate::{
    error::{Error, Result},
    validate::{issue_url_regex, utils::validate_non_empty},
};
use regex::Captures;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::trace;

/// Which kind of resource a locator points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Issue,
    PullRequest,
}

impl ResourceKind {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "issues" => Some(Self::Issue),
            "pull" => Some(Self::PullRequest),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::PullRequest => "pull",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Url of an issue or pull request, e.g.
/// `https://github.com/owner/repo/issues/42`.
///
/// Only the raw text is stored. The id is matched out of it on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locator {
    url: String,
}

impl Locator {
    /// Wrap a url.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `url` is empty.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        validate_non_empty(Some(url.as_str()))?;
        Ok(Self { url })
    }

    /// Same as [`Locator::new`], treating `None` like a missing url.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `url` is `None` or empty.
    pub fn from_optional(url: Option<&str>) -> Result<Self> {
        let url = validate_non_empty(url)?;
        Ok(Self { url: url.to_owned() })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Whether the whole url has the issue/pull request shape.
    #[must_use]
    pub fn valid(&self) -> bool {
        issue_url_regex().is_match(&self.url)
    }

    /// Numeric id following `/issues/` or `/pull/`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidLocator` if the url is not [`valid`](Self::valid).
    /// - `Error::IdentifierOverflow` if the id does not fit into `u64`.
    pub fn id(&self) -> Result<u64> {
        let caps = self.captures()?;
        let digits = &caps[2];
        // only digits reach here, so the sole failure is overflow
        let id = digits
            .parse::<u64>()
            .map_err(|_| Error::IdentifierOverflow(self.url.clone()))?;
        trace!(url = %self.url, id, "extracted issue id");
        Ok(id)
    }

    /// Whether the url points at an issue or a pull request.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLocator` if the url is not [`valid`](Self::valid).
    pub fn kind(&self) -> Result<ResourceKind> {
        let caps = self.captures()?;
        ResourceKind::from_segment(&caps[1]).ok_or_else(|| Error::invalid_locator(&self.url))
    }

    fn captures(&self) -> Result<Captures<'_>> {
        issue_url_regex()
            .captures(&self.url)
            .ok_or_else(|| Error::invalid_locator(&self.url))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl FromStr for Locator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Locator {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Locator {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Locator> for String {
    fn from(value: Locator) -> Self {
        value.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn locator(url: &str) -> Locator {
        Locator::new(url).expect("non-empty url")
    }

    #[rstest]
    #[case("https://host/org/repo/issues/42", 42)]
    #[case("https://host/org/repo/pull/7/files", 7)]
    #[case("/issues/007/", 7)]
    #[case("https://github.com/yegor256/rultor/issues/5/pull/9", 9)]
    #[case("https://github.com/yegor256/rultor/pull/9/issues/5x", 9)]
    fn extracts_id(#[case] url: &str, #[case] expected: u64) {
        let locator = locator(url);
        assert!(locator.valid());
        assert_eq!(locator.id().ok(), Some(expected));
    }

    #[rstest]
    #[case("https://host/org/repo/issues/")]
    #[case("https://host/org/repo/commits/42")]
    #[case("https://host/org/repo/issues/42abc")]
    #[case("https://host/org/repo/issues/-1")]
    #[case("issues/42")]
    #[case("https://host/org/repo/Issues/42")]
    #[case("https://host/org/repo/pulls/42")]
    #[case("https://host/org/repo/issues/\u{0664}\u{0662}")]
    #[case("https://host/\n/issues/42")]
    #[case("https://host/\r/issues/42")]
    #[case("https://host/\u{85}/issues/42")]
    #[case("https://host/\u{2028}/issues/42")]
    #[case("/issues/42/\u{2029}")]
    #[case("/issues/42/\r")]
    #[case("https://github.com/yegor256/rultor/pull/1#issuecomment-1")]
    #[case("https://github.com/yegor256/rultor/issues/1?tab=files")]
    fn rejects_malformed(#[case] url: &str) {
        let locator = locator(url);
        assert!(!locator.valid());
        assert!(matches!(locator.id(), Err(Error::InvalidLocator(ref u)) if u == url));
        assert!(matches!(locator.kind(), Err(Error::InvalidLocator(_))));
    }

    #[test]
    fn reports_kind() {
        assert_eq!(
            locator("https://host/o/r/issues/3").kind().ok(),
            Some(ResourceKind::Issue)
        );
        assert_eq!(
            locator("https://host/o/r/pull/3/commits").kind().ok(),
            Some(ResourceKind::PullRequest)
        );
    }

    #[test]
    fn max_id_fits() {
        let url = format!("/pull/{}", u64::MAX);
        assert_eq!(locator(&url).id().ok(), Some(u64::MAX));
    }

    #[test]
    fn oversized_id_is_overflow() {
        let locator = locator("/issues/18446744073709551616");
        assert!(locator.valid());
        assert!(matches!(locator.id(), Err(Error::IdentifierOverflow(_))));
    }

    #[test]
    fn empty_url_is_invalid_argument() {
        assert!(matches!(Locator::new(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            Locator::from_optional(None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!("".parse::<Locator>(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn equality_follows_text() {
        assert_eq!(locator("/issues/1"), locator("/issues/1"));
        assert_ne!(locator("/issues/1"), locator("/issues/1/"));
        assert_eq!(locator("/pull/2").to_string(), "/pull/2");
        assert_eq!(locator("/pull/2").as_ref(), "/pull/2");
        assert_eq!(String::from(locator("/pull/2")), "/pull/2");
        assert_eq!(Locator::try_from("/pull/2").ok(), Some(locator("/pull/2")));
        assert!(matches!(Locator::try_from(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn repeated_calls_agree() {
        let locator = locator("https://host/org/repo/pull/77");
        let first = (locator.valid(), locator.id().ok());
        for _ in 0..3 {
            assert_eq!((locator.valid(), locator.id().ok()), first);
        }
        assert_eq!(locator.as_str(), "https://host/org/repo/pull/77");
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("url {0} is not a valid issue url")]
    InvalidLocator(String),

    #[error("issue id in {0} does not fit into 64 bits")]
    IdentifierOverflow(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("other: {0}")]
    Other(String),
}

impl Error {
    #[inline]
    pub fn invalid_argument(text: impl Into<String>) -> Self {
        Self::InvalidArgument(text.into())
    }

    #[inline]
    pub fn invalid_locator(url: impl Into<String>) -> Self {
        Self::InvalidLocator(url.into())
    }

    #[inline]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(text.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

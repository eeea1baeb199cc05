//! Error types for GData request construction.
//!
//! Construction is deliberately permissive: absent options degrade to
//! the remote defaults rather than erroring, so the surface here is
//! small. The one validated user-facing failure is an unrecognized
//! standard-feed name.

use thiserror::Error;

/// Main error type for GData request construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A standard-feed name outside the closed set of legal values.
    #[error("invalid standard feed type `{given}`, must be one of: {allowed}")]
    InvalidFeedType {
        /// The value that was received.
        given: String,
        /// Comma-separated list of the legal feed names.
        allowed: String,
    },

    /// A built request string that does not parse as a URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Specialized result type for GData request construction.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFeedType { .. } => "INVALID_FEED_TYPE",
            Self::InvalidUrl(_) => "INVALID_URL",
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::InvalidFeedType {
                given: "hot".to_string(),
                allowed: "most_viewed".to_string(),
            }
            .error_code(),
            "INVALID_FEED_TYPE"
        );
        assert_eq!(
            Error::InvalidUrl("test".to_string()).error_code(),
            "INVALID_URL"
        );
    }

    #[test]
    fn test_error_display_names_allowed_values() {
        let err = Error::InvalidFeedType {
            given: "hot".to_string(),
            allowed: "most_viewed, top_rated".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid standard feed type `hot`, must be one of: most_viewed, top_rated"
        );
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let gdata_err: Error = err.into();
        assert!(matches!(gdata_err, Error::InvalidUrl(_)));
    }
}

//! Error types for scope list decoding and configuration.
//!
//! Decoding a scope list is the only fallible scope operation. Everything
//! else works on values that are already canonical.

/// Error raised while decoding an escaped scope token or scope list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A `\` was not followed by a reserved character or two hex digits.
    #[error("malformed escape sequence at byte {position}")]
    MalformedEscape {
        /// Byte offset of the offending `\` within the token.
        position: usize,
    },

    /// Hex escapes decoded to bytes that are not valid UTF-8.
    #[error("escaped token is not valid UTF-8")]
    InvalidUtf8,
}

impl ParseError {
    /// Create a malformed escape error.
    pub fn malformed_escape(position: usize) -> Self {
        Self::MalformedEscape { position }
    }
}

/// Error raised while loading a [`ScopeConfig`](crate::config::ScopeConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid scope configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scope list: {0}")]
    Scopes(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::malformed_escape(3);
        assert_eq!(err.to_string(), "malformed escape sequence at byte 3");
        assert!(ParseError::InvalidUtf8.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_config_error_wraps_parse_error() {
        let err: ConfigError = ParseError::malformed_escape(0).into();
        assert!(err.to_string().starts_with("invalid scope list"));
    }
}

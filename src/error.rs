//! Error types for Canasta operations.
//!
//! Provides error context for library consumers. Rule loading and
//! recommendation deliberately degrade instead of failing (malformed rows
//! are dropped, invalid scores are demoted), so errors here surface only at
//! the caller-facing boundary.

use std::fmt;

/// Main error type for Canasta operations.
///
/// # Examples
///
/// ```
/// use canasta::error::CanastaError;
///
/// let err = CanastaError::EmptyBasket;
/// assert!(err.to_string().contains("no items selected"));
/// ```
#[derive(Debug)]
pub enum CanastaError {
    /// A recommendation was requested for an empty basket.
    EmptyBasket,

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for CanastaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanastaError::EmptyBasket => write!(f, "no items selected"),
            CanastaError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CanastaError {}

impl From<&str> for CanastaError {
    fn from(msg: &str) -> Self {
        CanastaError::Other(msg.to_string())
    }
}

impl From<String> for CanastaError {
    fn from(msg: String) -> Self {
        CanastaError::Other(msg)
    }
}

/// Result type alias for Canasta operations.
pub type Result<T> = std::result::Result<T, CanastaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_basket_display() {
        let err = CanastaError::EmptyBasket;
        assert_eq!(err.to_string(), "no items selected");
    }

    #[test]
    fn test_other_from_str() {
        let err: CanastaError = "something went wrong".into();
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn test_other_from_string() {
        let err: CanastaError = String::from("boom").into();
        assert!(matches!(err, CanastaError::Other(_)));
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(CanastaError::EmptyBasket);
        assert!(err.source().is_none());
    }
}

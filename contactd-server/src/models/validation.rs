//! Validation error types

use std::fmt;

/// Validation error for contact submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of the required fields is absent or empty.
    ///
    /// Reported generically; the client is not told which field failed.
    MissingFields,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => {
                write!(f, "All fields (name, email, and message) are required.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

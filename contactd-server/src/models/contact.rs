//! Contact submission validation

use super::ValidationError;

/// A validated contact submission: all three fields present and non-empty.
///
/// Construction is the only validation point; a value of this type is safe
/// to hand to the repository as-is. Presence is the whole check - no format
/// validation on the email, per the service contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    /// Create a submission, rejecting any absent or empty field.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ValidationError> {
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_present() {
        let s = ContactSubmission::new("Ada", "ada@example.com", "hi").expect("valid");
        assert_eq!(s.name(), "Ada");
        assert_eq!(s.email(), "ada@example.com");
        assert_eq!(s.message(), "hi");
    }

    #[test]
    fn empty_field_rejected() {
        assert_eq!(
            ContactSubmission::new("", "x@x.com", "hi").unwrap_err(),
            ValidationError::MissingFields
        );
        assert_eq!(
            ContactSubmission::new("Ada", "", "hi").unwrap_err(),
            ValidationError::MissingFields
        );
        assert_eq!(
            ContactSubmission::new("Ada", "x@x.com", "").unwrap_err(),
            ValidationError::MissingFields
        );
    }

    #[test]
    fn whitespace_is_presence() {
        // Presence check only - whitespace counts as content
        assert!(ContactSubmission::new(" ", "x@x.com", "hi").is_ok());
    }
}

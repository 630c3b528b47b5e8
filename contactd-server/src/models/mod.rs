//! Domain models and validation

pub mod contact;
pub mod validation;

pub use contact::ContactSubmission;
pub use validation::ValidationError;

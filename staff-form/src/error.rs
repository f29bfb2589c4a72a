//! Form error types

use staff_client::ClientError;
use thiserror::Error;

use crate::form::FieldErrors;

/// Why a form operation did not complete
#[derive(Debug, Error)]
pub enum FormError {
    /// Submit blocked by client-side validation
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),

    /// Request to the employee API failed
    #[error("Client error: {0}")]
    Client(#[from] ClientError),
}

impl FormError {
    /// Per-field messages, if this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Client(_) => None,
        }
    }
}

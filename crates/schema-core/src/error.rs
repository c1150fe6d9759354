//! Wizard Errors
//!
//! Every fallible public operation returns a `WizardResult`. Validation errors
//! are raised before any state is touched, so a failed call leaves the wizard
//! exactly as it was.

use thiserror::Error;

/// Common result type for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;

/// Wizard-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    /// Construction target could not be resolved to exactly one element
    #[error("schema wizard should be initialized with an element or a selector matching exactly one element: {0}")]
    InvalidTarget(String),

    /// Options failed validation
    #[error("invalid schema wizard options: {0}")]
    InvalidOptions(String),

    /// `loadItems` payload is not a list of well-formed items
    #[error("items should be an array of objects with non-empty string fields: id, title, type ({0})")]
    InvalidItems(String),

    /// Two items in one batch share an id
    #[error("items should contain objects with unique id, got duplicate: \"{0}\"")]
    DuplicateItemId(String),

    /// Schema root is malformed
    #[error("schema should be an object with array fields: info, items ({0})")]
    InvalidSchema(String),

    /// A schema item is malformed
    #[error("schema items should be objects with non-empty string fields: id, title, type and numeric fields: top, left ({0})")]
    InvalidSchemaItem(String),

    /// A schema info entry is malformed
    #[error("schema info should be objects with numeric fields: top, left and non-empty string fields: text, type, color ({0})")]
    InvalidSchemaInfo(String),

    /// Called from inside another wizard operation, e.g. a focus handler
    /// fired while an element is being focused
    #[error("schema wizard is busy with another operation")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_the_id() {
        let err = WizardError::DuplicateItemId("bench-1".to_string());
        assert_eq!(
            err.to_string(),
            "items should contain objects with unique id, got duplicate: \"bench-1\""
        );
    }
}

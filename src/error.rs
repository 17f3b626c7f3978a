//! Error types for the form collector.

use crate::field::FieldType;

/// Result type alias for form collector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while collecting form data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mutation operation implied a different type than the one the field
    /// was created with. This is a usage error; the field is left unchanged.
    #[error("Type conflict on field '{name}': field is {existing}, operation expects {requested}")]
    TypeConflict {
        /// Name of the conflicting field
        name: String,
        /// Type the field was created with
        existing: FieldType,
        /// Type the failing operation implies
        requested: FieldType,
    },
}

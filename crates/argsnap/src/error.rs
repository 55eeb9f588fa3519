//! Error types for default validation and strict accessors.

use thiserror::Error;

/// Errors surfaced by the typed accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// The supplied default is not a string, number, boolean, or unset
    #[error("invalid default: expected a string, number, boolean, or unset, got {found}")]
    InvalidDefault { found: &'static str },

    /// A stored value's type did not match the type of the supplied default
    #[error("argument '{name}' did not match default type: got {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type alias for argsnap operations
pub type Result<T> = std::result::Result<T, ArgError>;

//! Error types for association updates

use thiserror::Error;

use crate::strategy::Multiplicity;

/// Result type for link operations
pub type Result<T> = std::result::Result<T, LinkError>;

/// Association update errors
///
/// Removing a member that is not present is not an error; it is a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("object is already borrowed while updating end `{end}`")]
    Busy { end: &'static str },

    #[error("class `{class}` has no association end `{end}`")]
    UnknownEnd { class: &'static str, end: &'static str },

    #[error("association end `{end}` is not {expected}-valued")]
    Multiplicity {
        end: &'static str,
        expected: Multiplicity,
    },
}

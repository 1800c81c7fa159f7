//! Error types for key construction and parsing.

use thiserror::Error;

/// Errors that can occur when constructing or parsing a [`NamespacedKey`].
///
/// Every variant is an invalid-argument failure: the input can never become
/// valid by retrying.
///
/// [`NamespacedKey`]: crate::NamespacedKey
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The namespace does not match `[a-z0-9._-]+`.
    #[error("invalid namespace, must be [a-z0-9._-]: {namespace:?}")]
    InvalidNamespace { namespace: String },

    /// The key does not match `[a-z0-9/._-]+`.
    #[error("invalid key, must be [a-z0-9/._-]: {key:?}")]
    InvalidKey { key: String },

    /// The canonical `namespace:key` string reached the length ceiling.
    #[error("namespaced key must be less than {max} characters, got {length}: {canonical:?}", max = crate::MAX_LENGTH)]
    TooLong { canonical: String, length: usize },

    /// A string being parsed has no `:` between namespace and key.
    #[error("namespaced key missing ':' separator: {input:?}")]
    MissingSeparator { input: String },
}

impl KeyError {
    /// Returns true if the namespace component was rejected.
    pub fn is_namespace_error(&self) -> bool {
        matches!(self, KeyError::InvalidNamespace { .. })
    }

    /// Returns true if the key component was rejected.
    pub fn is_key_error(&self) -> bool {
        matches!(self, KeyError::InvalidKey { .. })
    }

    /// Returns true if the combined string hit the length ceiling.
    pub fn is_length_error(&self) -> bool {
        matches!(self, KeyError::TooLong { .. })
    }
}

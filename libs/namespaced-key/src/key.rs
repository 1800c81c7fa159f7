//! The [`NamespacedKey`] value type.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::KeyError;
use crate::grammar::{canonical_len, is_valid_key, is_valid_namespace, MAX_LENGTH};
use crate::owner::NamespaceOwner;

/// The namespace of all built-in keys.
pub const MINECRAFT: &str = "minecraft";

/// The namespace of keys generated for backwards compatibility.
pub const BUKKIT: &str = "bukkit";

/// A `namespace:key` identifier.
///
/// Both components are validated when the value is built and never change
/// afterwards. Equality and hashing compare the two strings exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacedKey {
    namespace: String,
    key: String,
}

impl NamespacedKey {
    /// Creates a key in an explicit namespace.
    ///
    /// Inputs are validated as given; nothing is lower-cased.
    ///
    /// Internal use only. Plugins should call [`NamespacedKey::from_owner`]
    /// so their keys land in their own namespace.
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Result<Self, KeyError> {
        Self::validated(namespace.into(), key.into())
    }

    /// Creates a key in the owner's namespace.
    ///
    /// The owner's name and `key` are lower-cased before validation, so
    /// `("MyPlugin", "Some/Key")` becomes `myplugin:some/key`. Only case is
    /// folded: any other character outside the grammar is still rejected,
    /// and errors report the lower-cased values.
    pub fn from_owner<O>(owner: &O, key: &str) -> Result<Self, KeyError>
    where
        O: NamespaceOwner + ?Sized,
    {
        Self::validated(owner.name().to_lowercase(), key.to_lowercase())
    }

    /// Creates a key in the [`MINECRAFT`] namespace.
    ///
    /// `key` is validated as typed.
    pub fn minecraft(key: impl Into<String>) -> Result<Self, KeyError> {
        Self::new(MINECRAFT, key)
    }

    /// Creates a key with a random UUID in the [`BUKKIT`] namespace.
    ///
    /// Internal use only.
    #[must_use]
    pub fn random() -> Self {
        let key = uuid::Uuid::new_v4().hyphenated().to_string();
        trace!(key = %key, "generated random key");

        // A hyphenated UUID is lowercase hex and '-', 36 characters long.
        Self {
            namespace: BUKKIT.to_string(),
            key,
        }
    }

    /// Parses a key from its canonical `namespace:key` form.
    ///
    /// The string is split on the first `:` and both halves go through the
    /// same checks as [`NamespacedKey::new`].
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        let Some((namespace, key)) = s.split_once(':') else {
            debug!(input = s, "rejected namespaced key without separator");
            return Err(KeyError::MissingSeparator {
                input: s.to_string(),
            });
        };

        Self::new(namespace, key)
    }

    /// Returns the namespace component.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the key component.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn validated(namespace: String, key: String) -> Result<Self, KeyError> {
        if !is_valid_namespace(&namespace) {
            debug!(namespace = %namespace, "rejected namespace");
            return Err(KeyError::InvalidNamespace { namespace });
        }

        if !is_valid_key(&key) {
            debug!(key = %key, "rejected key");
            return Err(KeyError::InvalidKey { key });
        }

        let length = canonical_len(&namespace, &key);
        if length >= MAX_LENGTH {
            debug!(length, max = MAX_LENGTH, "rejected namespaced key over length ceiling");
            return Err(KeyError::TooLong {
                canonical: format!("{namespace}:{key}"),
                length,
            });
        }

        Ok(Self { namespace, key })
    }
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl FromStr for NamespacedKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for NamespacedKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for NamespacedKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

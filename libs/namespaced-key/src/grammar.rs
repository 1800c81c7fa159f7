//! Character grammar for namespaces and keys.
//!
//! - Namespaces: `[a-z0-9._-]+`
//! - Keys: `[a-z0-9/._-]+`
//!
//! Both are full-string matches. The only difference is that keys may also
//! contain `/`. Neither admits `:`, which keeps the canonical `namespace:key`
//! form unambiguous.

/// Exclusive upper bound on the length of the canonical `namespace:key` string.
pub const MAX_LENGTH: usize = 256;

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-')
}

fn is_key_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

/// Returns true if `namespace` fully matches `[a-z0-9._-]+`.
pub fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty() && namespace.chars().all(is_namespace_char)
}

/// Returns true if `key` fully matches `[a-z0-9/._-]+`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_key_char)
}

/// Length of `namespace:key` once joined.
///
/// Valid components are ASCII, so byte length equals character length.
pub(crate) fn canonical_len(namespace: &str, key: &str) -> usize {
    namespace.len() + 1 + key.len()
}

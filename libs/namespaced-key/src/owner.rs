//! The capability a namespace owner must expose.

/// Anything that owns a namespace, typically a plugin.
///
/// Only the name is read, once, when a key is built with
/// [`NamespacedKey::from_owner`]. No reference to the owner is kept.
///
/// [`NamespacedKey::from_owner`]: crate::NamespacedKey::from_owner
pub trait NamespaceOwner {
    /// The owner's display name. Case is folded before use.
    fn name(&self) -> &str;
}

impl NamespaceOwner for str {
    fn name(&self) -> &str {
        self
    }
}

impl NamespaceOwner for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<T: NamespaceOwner + ?Sized> NamespaceOwner for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: NamespaceOwner + ?Sized> NamespaceOwner for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: NamespaceOwner + ?Sized> NamespaceOwner for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

//! # namespaced-key
//!
//! Validated `namespace:key` identifiers for resources owned by plugins.
//!
//! ## Design Principles
//!
//! - Keys are validated once, when built, and are immutable afterwards
//! - Plugins get their own namespace, derived from the plugin name
//! - Every key has one canonical string form with strict parsing
//! - Keys roundtrip through that form (parse → format → parse)
//!
//! ## Key Format
//!
//! A key is written `{namespace}:{key}`:
//! - namespace: `[a-z0-9._-]+`
//! - key: `[a-z0-9/._-]+`
//! - the whole string is shorter than [`MAX_LENGTH`] characters
//!
//! Examples:
//! - `minecraft:chest`
//! - `myplugin:items/ruby_sword`
//! - `bukkit:1b4e28ba-2fa1-4d2b-883f-0016d3cca427`
//!
//! ```
//! use namespaced_key::NamespacedKey;
//!
//! let key = NamespacedKey::from_owner("MyPlugin", "Items/Ruby_Sword")?;
//! assert_eq!(key.to_string(), "myplugin:items/ruby_sword");
//! # Ok::<(), namespaced_key::KeyError>(())
//! ```

mod error;
mod grammar;
mod key;
mod owner;

pub use error::KeyError;
pub use grammar::{is_valid_key, is_valid_namespace, MAX_LENGTH};
pub use key::{NamespacedKey, BUKKIT, MINECRAFT};
pub use owner::NamespaceOwner;

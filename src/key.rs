//! Binding keys for the dependency registry.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Key for binding storage and lookup.
///
/// A key combines the bound type's [`TypeId`] with an optional name, so the
/// same type can be registered more than once under different names. The
/// human-readable type name rides along for diagnostics only.
///
/// # Examples
///
/// ```rust
/// use bindery::Key;
///
/// // Unnamed key: just the type
/// let key = Key::of::<String>();
/// assert_eq!(key.display_name(), "alloc::string::String");
/// assert_eq!(key.service_name(), None);
///
/// // Named key: type plus binding name
/// let key = Key::named::<u32>("config_port");
/// assert_eq!(key.service_name(), Some("config_port"));
///
/// // Generic instantiations are distinct identities
/// assert_ne!(Key::of::<Vec<i32>>(), Key::of::<Vec<String>>());
/// ```
#[derive(Clone, Copy)]
pub struct Key {
    type_id: TypeId,
    type_name: &'static str,
    name: Option<&'static str>,
}

impl Key {
    /// Creates an unnamed key for type `T`.
    #[inline(always)]
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            name: None,
        }
    }

    /// Creates a named key for type `T`.
    #[inline(always)]
    pub fn named<T: 'static>(name: &'static str) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            name: Some(name),
        }
    }

    /// The bound type's [`TypeId`].
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Get the type name for display.
    ///
    /// Returns the human-readable type name for debugging and error
    /// messages. This is the `std::any::type_name` result.
    pub fn display_name(&self) -> &'static str {
        self.type_name
    }

    /// Get the binding name for named bindings, or `None` for unnamed ones.
    pub fn service_name(&self) -> Option<&'static str> {
        self.name
    }
}

// Equality and hashing use (TypeId, name) only; the display string is
// diagnostics-only and skipped on the hot path.
impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.name == other.name
    }
}

impl Eq for Key {}

impl Hash for Key {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("type", &self.type_name)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{} (named {:?})", self.type_name, name),
            None => f.write_str(self.type_name),
        }
    }
}

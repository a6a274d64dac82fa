//! Binding descriptors for introspection and diagnostics.

use crate::key::Key;
use crate::lifetime::Lifetime;

/// Binding descriptor for introspection and diagnostics
///
/// Contains metadata about registered bindings that can be used for
/// debugging, validation, and runtime inspection of the container's
/// configuration.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, Lifetime};
///
/// let container = Container::new();
/// container.register("postgres://localhost".to_string());
/// container.register_named("max_connections", 100u32);
/// container.register_singleton_factory(|| Ok(0u64));
///
/// let descriptors = container.descriptors();
/// assert_eq!(descriptors.len(), 3);
///
/// let named = descriptors.iter().find(|d| d.is_named()).unwrap();
/// assert_eq!(named.service_name(), Some("max_connections"));
/// assert_eq!(named.type_name(), "u32");
///
/// // The singleton factory has not run yet
/// let pending = descriptors.iter().find(|d| d.type_name() == "u64").unwrap();
/// assert_eq!(pending.lifetime, Lifetime::Singleton);
/// assert!(!pending.realized);
/// ```
#[derive(Debug, Clone)]
pub struct BindingDescriptor {
    /// The binding key (type with optional binding name)
    pub key: Key,
    /// Binding lifetime
    pub lifetime: Lifetime,
    /// Whether a value is already cached (eager registrations and promoted
    /// singletons)
    pub realized: bool,
}

impl BindingDescriptor {
    /// Get the binding name for named bindings, or `None` for unnamed ones
    pub fn service_name(&self) -> Option<&'static str> {
        self.key.service_name()
    }

    /// Get the type name
    pub fn type_name(&self) -> &'static str {
        self.key.display_name()
    }

    /// Check if this is a named binding
    pub fn is_named(&self) -> bool {
        self.service_name().is_some()
    }
}

//! Binding lifetime definitions.

/// Binding lifetimes controlling instance caching behavior
///
/// Defines how factory-backed bindings are invoked and cached by the
/// container. Value registrations are always [`Lifetime::Singleton`]; for
/// factory registrations the lifetime is chosen at registration time.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, Lifetime};
///
/// let container = Container::new();
/// container.register_singleton_factory(|| Ok("shared".to_string()));
/// container.register_factory(|| Ok(0u64));
///
/// let descriptors = container.descriptors();
/// assert!(descriptors.iter().any(|d| d.lifetime == Lifetime::Singleton));
/// assert!(descriptors.iter().any(|d| d.lifetime == Lifetime::Transient));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Lazily created at most effectively once, then served from a cache
    ///
    /// A singleton factory is invoked on the first successful resolution and
    /// its value is cached for the container's lifetime. Subsequent resolves
    /// return the cached instance without re-invoking the factory. Best for
    /// expensive-to-create values shared across the whole process.
    Singleton,
    /// New invocation per resolution, never cached
    ///
    /// A transient factory runs on every resolution. No caching is
    /// performed. Best for lightweight values where a fresh result per
    /// request is preferred over caching.
    Transient,
}

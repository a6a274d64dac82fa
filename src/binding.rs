//! Per-key binding states.

use std::any::Any;
use std::sync::Arc;

use crate::error::BoxError;
use crate::lifetime::Lifetime;

// Type-erased Arc for storage
pub(crate) type AnyArc = Arc<dyn Any + Send + Sync>;

/// Type-erased zero-argument fallible constructor.
pub(crate) type FactoryFn = Arc<dyn Fn() -> Result<AnyArc, BoxError> + Send + Sync>;

/// State machine for one key in the registry.
///
/// `PendingSingleton` exists only between a singleton-factory registration
/// and its first successful resolution; promotion replaces it with
/// `Instance`, after which the factory never runs again for this key.
pub(crate) enum BindingState {
    /// Ready value, served on every resolve.
    Instance(AnyArc),
    /// Factory invoked fresh on every resolve, never cached.
    Transient(FactoryFn),
    /// Singleton factory awaiting its first successful invocation.
    PendingSingleton(FactoryFn),
}

impl BindingState {
    pub(crate) fn lifetime(&self) -> Lifetime {
        match self {
            BindingState::Instance(_) | BindingState::PendingSingleton(_) => Lifetime::Singleton,
            BindingState::Transient(_) => Lifetime::Transient,
        }
    }

    /// True once a value is cached: eager registrations and promoted
    /// singletons, but not pending ones.
    pub(crate) fn is_realized(&self) -> bool {
        matches!(self, BindingState::Instance(_))
    }

    #[cfg(feature = "diagnostics")]
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            BindingState::Instance(_) => "Instance",
            BindingState::Transient(_) => "Transient",
            BindingState::PendingSingleton(_) => "PendingSingleton",
        }
    }
}

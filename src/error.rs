//! Error types for the dependency registry.

use std::fmt;
use std::sync::Arc;

use crate::key::Key;

/// Boxed error type returned by registered factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Dependency registry errors
///
/// Represents the error conditions that can occur while resolving a binding.
/// Registration itself never fails; a badly-behaved factory is only detected
/// when it runs.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, DiError};
///
/// // Resolving from an empty container fails with NotRegistered
/// let container = Container::new();
/// match container.resolve::<String>() {
///     Err(DiError::NotRegistered(key)) => {
///         assert_eq!(key.display_name(), "alloc::string::String");
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub enum DiError {
    /// No binding or pending singleton under the key
    NotRegistered(Key),
    /// A registered factory returned an error when invoked
    FactoryFailure(Key, Arc<BoxError>),
    /// Stored value's dynamic type does not match the requested type
    TypeMismatch(Key),
}

impl fmt::Display for DiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiError::NotRegistered(key) => write!(f, "dependency not registered: {}", key),
            DiError::FactoryFailure(key, source) => {
                write!(f, "factory for {} failed: {}", key, source)
            }
            DiError::TypeMismatch(key) => write!(f, "type mismatch for: {}", key),
        }
    }
}

impl std::error::Error for DiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiError::FactoryFailure(_, source) => Some(source.as_ref().as_ref()),
            _ => None,
        }
    }
}

/// Result type for registry operations
///
/// A convenience alias for `Result<T, DiError>` used throughout bindery.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, DiResult};
/// use std::sync::Arc;
///
/// fn load_port(container: &Container) -> DiResult<Arc<u16>> {
///     container.resolve_named::<u16>("port")
/// }
///
/// let container = Container::new();
/// container.register_named("port", 8080u16);
/// assert_eq!(*load_port(&container).unwrap(), 8080);
/// ```
pub type DiResult<T> = Result<T, DiError>;

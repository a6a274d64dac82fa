//! # bindery
//!
//! Process-wide dependency registry with lazy singleton promotion.
//!
//! ## Features
//!
//! - **Typed keys**: bindings addressed by type, optionally qualified by name
//! - **Three binding kinds**: ready-made values, transient factories, and
//!   lazily-promoted singleton factories
//! - **Thread-safe**: sharded storage, `&self` registration and resolution,
//!   no lock held across user factories
//! - **Fallible factories**: factory errors surface to the resolving caller
//!   instead of poisoning the cache
//! - **Recoverable errors**: missing bindings and type mismatches are error
//!   values, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use bindery::Container;
//!
//! struct Database {
//!     connection_string: String,
//! }
//!
//! struct UserService {
//!     db: std::sync::Arc<Database>,
//! }
//!
//! let container = Container::new();
//! container.register(Database {
//!     connection_string: "postgres://localhost".to_string(),
//! });
//!
//! // Factories can capture a container clone to resolve dependencies.
//! let deps = container.clone();
//! container.register_factory(move || {
//!     Ok(UserService {
//!         db: deps.resolve::<Database>()?,
//!     })
//! });
//!
//! let user_service = container.resolve::<UserService>().unwrap();
//! assert_eq!(user_service.db.connection_string, "postgres://localhost");
//! ```
//!
//! ## Binding Kinds
//!
//! - **Value**: registered ready-made, returned as-is on every resolve
//! - **Transient factory**: invoked fresh on every resolve, never cached
//! - **Singleton factory**: invoked lazily on first successful resolve, then
//!   promoted to a cached instance served to every later caller
//!
//! ## Named Bindings
//!
//! ```rust
//! use bindery::Container;
//!
//! let container = Container::new();
//! container.register_named("primary", "postgres://db1".to_string());
//! container.register_named("replica", "postgres://db2".to_string());
//!
//! assert_eq!(*container.resolve_named::<String>("primary").unwrap(), "postgres://db1");
//! assert_eq!(*container.resolve_named::<String>("replica").unwrap(), "postgres://db2");
//! ```
//!
//! ## Singleton Promotion
//!
//! A singleton factory runs at most effectively once: the first successful
//! invocation caches its value and evicts the factory. A failing invocation
//! leaves the factory in place, so transient start-up failures (a dependency
//! not yet reachable, say) can be retried by simply resolving again.
//!
//! ```rust
//! use bindery::Container;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//!
//! let calls = Arc::new(AtomicU32::new(0));
//! let counter = calls.clone();
//!
//! let container = Container::new();
//! container.register_singleton_factory(move || {
//!     Ok(counter.fetch_add(1, Ordering::SeqCst) + 1)
//! });
//!
//! assert_eq!(*container.resolve::<u32>().unwrap(), 1);
//! assert_eq!(*container.resolve::<u32>().unwrap(), 1);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

// Module declarations
pub mod container;
pub mod descriptors;
pub mod error;
pub mod key;
pub mod lifetime;
pub mod observer;

// Internal modules
mod binding;

// Re-export core types
pub use container::Container;
pub use descriptors::BindingDescriptor;
pub use error::{BoxError, DiError, DiResult};
pub use key::Key;
pub use lifetime::Lifetime;
pub use observer::{DiObserver, LoggingObserver, MetricsObserver};

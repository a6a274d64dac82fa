//! Diagnostic observers for resolution traceability.
//!
//! This module provides hooks for observing resolution events, enabling
//! structured tracing, performance monitoring, and debugging. The container
//! itself never logs; observers are the opt-in channel for visibility into
//! what is being resolved and how long it takes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::DiError;
use crate::key::Key;

/// Observer trait for resolution events.
///
/// Observers can track which bindings are resolved, timing information, and
/// failure conditions. Observer calls are made synchronously during
/// resolution, so implementations should stay lightweight.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, DiError, DiObserver, Key};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// struct TracingObserver {
///     trace_id: String,
/// }
///
/// impl DiObserver for TracingObserver {
///     fn resolving(&self, key: &Key) {
///         println!("[{}] Resolving: {}", self.trace_id, key.display_name());
///     }
///
///     fn resolved(&self, key: &Key, duration: Duration) {
///         println!("[{}] Resolved: {} in {:?}", self.trace_id, key.display_name(), duration);
///     }
///
///     fn resolution_failed(&self, key: &Key, error: &DiError) {
///         println!("[{}] FAILED {}: {}", self.trace_id, key.display_name(), error);
///     }
/// }
///
/// let container = Container::new();
/// container.add_observer(Arc::new(TracingObserver { trace_id: "run-123".to_string() }));
///
/// // All subsequent resolutions are traced
/// container.register(42usize);
/// let _ = container.resolve::<usize>();
/// ```
pub trait DiObserver: Send + Sync {
    /// Called when starting to resolve a binding.
    ///
    /// This is called before any factory function is invoked. Use this to
    /// start timing measurements and emit trace events.
    fn resolving(&self, key: &Key);

    /// Called when a binding is successfully resolved.
    ///
    /// `duration` is the time elapsed from `resolving` to `resolved`.
    fn resolved(&self, key: &Key, duration: Duration);

    /// Called when a resolution fails.
    ///
    /// Covers missing bindings, factory failures, and type mismatches. The
    /// error still propagates to the caller after this hook runs.
    fn resolution_failed(&self, key: &Key, error: &DiError);
}

/// Container for registered observers.
///
/// Holds all registered observers and fans out resolution events to them.
/// Designed to have minimal overhead when no observers are registered.
#[derive(Default)]
pub(crate) struct Observers {
    observers: RwLock<Vec<Arc<dyn DiObserver>>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn add(&self, observer: Arc<dyn DiObserver>) {
        self.observers.write().unwrap().push(observer);
    }

    /// Returns true if any observers are registered.
    #[inline]
    pub(crate) fn has_observers(&self) -> bool {
        !self.observers.read().unwrap().is_empty()
    }

    #[inline]
    pub(crate) fn resolving(&self, key: &Key) {
        for observer in self.observers.read().unwrap().iter() {
            observer.resolving(key);
        }
    }

    #[inline]
    pub(crate) fn resolved(&self, key: &Key, duration: Duration) {
        for observer in self.observers.read().unwrap().iter() {
            observer.resolved(key, duration);
        }
    }

    #[inline]
    pub(crate) fn resolution_failed(&self, key: &Key, error: &DiError) {
        for observer in self.observers.read().unwrap().iter() {
            observer.resolution_failed(key, error);
        }
    }
}

/// Built-in observer that logs events to stdout.
///
/// This is a simple implementation useful for development and debugging.
/// For production use, consider implementing a custom observer that
/// integrates with your logging/tracing infrastructure.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, LoggingObserver};
/// use std::sync::Arc;
///
/// let container = Container::new();
/// container.add_observer(Arc::new(LoggingObserver::new()));
///
/// // All resolutions will be logged to stdout
/// ```
pub struct LoggingObserver {
    prefix: String,
}

impl LoggingObserver {
    /// Creates a new logging observer with default prefix.
    pub fn new() -> Self {
        Self {
            prefix: "[bindery]".to_string(),
        }
    }

    /// Creates a new logging observer with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DiObserver for LoggingObserver {
    fn resolving(&self, key: &Key) {
        println!("{} Resolving: {}", self.prefix, key.display_name());
    }

    fn resolved(&self, key: &Key, duration: Duration) {
        println!("{} Resolved: {} in {:?}", self.prefix, key.display_name(), duration);
    }

    fn resolution_failed(&self, key: &Key, error: &DiError) {
        eprintln!("{} FAILED {}: {}", self.prefix, key.display_name(), error);
    }
}

/// Performance-focused observer that tracks aggregate metrics.
///
/// Collects resolution counts, timing data, and failure counts for
/// post-run analysis.
pub struct MetricsObserver {
    resolution_count: AtomicU64,
    total_resolution_time: AtomicU64,
    failure_count: AtomicU64,
}

impl MetricsObserver {
    /// Creates a new metrics observer.
    pub fn new() -> Self {
        Self {
            resolution_count: AtomicU64::new(0),
            total_resolution_time: AtomicU64::new(0),
            failure_count: AtomicU64::new(0),
        }
    }

    /// Gets the total number of successful resolutions observed.
    pub fn resolution_count(&self) -> u64 {
        self.resolution_count.load(Ordering::Relaxed)
    }

    /// Gets the average resolution time, or `None` before the first success.
    pub fn average_resolution_time(&self) -> Option<Duration> {
        let count = self.resolution_count();
        if count == 0 {
            return None;
        }

        let total_ns = self.total_resolution_time.load(Ordering::Relaxed);
        Some(Duration::from_nanos(total_ns / count))
    }

    /// Gets the total resolution time across all successful resolutions.
    pub fn total_resolution_time(&self) -> Duration {
        Duration::from_nanos(self.total_resolution_time.load(Ordering::Relaxed))
    }

    /// Gets the number of failed resolutions observed.
    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }

    /// Resets all metrics.
    pub fn reset(&self) {
        self.resolution_count.store(0, Ordering::Relaxed);
        self.total_resolution_time.store(0, Ordering::Relaxed);
        self.failure_count.store(0, Ordering::Relaxed);
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DiObserver for MetricsObserver {
    fn resolving(&self, _key: &Key) {
        // No action needed on start
    }

    fn resolved(&self, _key: &Key, duration: Duration) {
        self.resolution_count.fetch_add(1, Ordering::Relaxed);
        self.total_resolution_time
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    fn resolution_failed(&self, _key: &Key, _error: &DiError) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
    }
}

//! The container: registration, resolution, and singleton promotion.

use std::sync::Arc;
use std::time::Instant;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::binding::{AnyArc, BindingState, FactoryFn};
use crate::descriptors::BindingDescriptor;
use crate::error::{BoxError, DiError, DiResult};
use crate::key::Key;
use crate::lifetime::Lifetime;
use crate::observer::{DiObserver, Observers};

#[cfg(feature = "ahash")]
type BindingMap = DashMap<Key, BindingState, ahash::RandomState>;
#[cfg(not(feature = "ahash"))]
type BindingMap = DashMap<Key, BindingState>;

/// Process-wide dependency registry.
///
/// A `Container` maps keys (a type, optionally qualified by a name) to either
/// a ready-made value or a zero-argument fallible factory. Factories can be
/// registered as transient (invoked on every resolve) or singleton (invoked
/// lazily at most effectively once, then served from a cache).
///
/// # Thread Safety
///
/// The container is fully thread-safe: registration and resolution take
/// `&self` and can run from any number of threads with no external
/// synchronization. The store is sharded, so operations on different keys do
/// not block one another, and no internal lock is ever held across a factory
/// invocation. `Container` clones cheaply (it uses `Arc` internally), so a
/// factory can capture a clone and resolve its own dependencies reentrantly.
///
/// # Examples
///
/// ```rust
/// use bindery::Container;
///
/// let container = Container::new();
/// container.register(42i32);
/// container.register_factory_named("hw", || Ok("Hello, World!".to_string()));
///
/// assert_eq!(*container.resolve::<i32>().unwrap(), 42);
/// assert_eq!(*container.resolve_named::<String>("hw").unwrap(), "Hello, World!");
/// ```
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

struct ContainerInner {
    bindings: BindingMap,
    observers: Observers,
}

// Work snapshotted out of the store while the shard guard is held. Factories
// run only after the guard is dropped, so a slow or reentrant factory can
// never deadlock the map.
enum Planned {
    Ready(AnyArc),
    Transient(FactoryFn),
    Promote(FactoryFn),
}

impl Container {
    /// Creates a new empty container.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                bindings: BindingMap::default(),
                observers: Observers::new(),
            }),
        }
    }

    // ----- Registration -----

    /// Registers a ready-made value.
    ///
    /// The value is stored immediately and shared on every resolve. Any
    /// existing binding under the same key, including a pending singleton
    /// factory, is replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindery::Container;
    ///
    /// let container = Container::new();
    /// container.register(8080u16);
    /// assert_eq!(*container.resolve::<u16>().unwrap(), 8080);
    /// ```
    pub fn register<T: Send + Sync + 'static>(&self, value: T) {
        self.insert(Key::of::<T>(), BindingState::Instance(Arc::new(value)));
    }

    /// Registers a named ready-made value.
    ///
    /// Named bindings let the same type be registered more than once; each
    /// name addresses an independent binding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindery::Container;
    ///
    /// let container = Container::new();
    /// container.register_named("http", 8080u16);
    /// container.register_named("metrics", 9090u16);
    ///
    /// assert_eq!(*container.resolve_named::<u16>("http").unwrap(), 8080);
    /// assert_eq!(*container.resolve_named::<u16>("metrics").unwrap(), 9090);
    /// ```
    pub fn register_named<T: Send + Sync + 'static>(&self, name: &'static str, value: T) {
        self.insert(Key::named::<T>(name), BindingState::Instance(Arc::new(value)));
    }

    /// Registers a transient factory.
    ///
    /// The factory runs on every resolve; its result is never cached. A
    /// factory error is propagated to the resolving caller wrapped in
    /// [`DiError::FactoryFailure`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindery::Container;
    /// use std::sync::atomic::{AtomicU32, Ordering};
    /// use std::sync::Arc;
    ///
    /// let calls = Arc::new(AtomicU32::new(0));
    /// let counter = calls.clone();
    ///
    /// let container = Container::new();
    /// container.register_factory(move || Ok(counter.fetch_add(1, Ordering::SeqCst) + 1));
    ///
    /// assert_eq!(*container.resolve::<u32>().unwrap(), 1);
    /// assert_eq!(*container.resolve::<u32>().unwrap(), 2);
    /// assert_eq!(calls.load(Ordering::SeqCst), 2);
    /// ```
    pub fn register_factory<T, F>(&self, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.insert_factory(Key::of::<T>(), Lifetime::Transient, factory);
    }

    /// Registers a named transient factory.
    pub fn register_factory_named<T, F>(&self, name: &'static str, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.insert_factory(Key::named::<T>(name), Lifetime::Transient, factory);
    }

    /// Registers a singleton factory.
    ///
    /// The factory is invoked lazily on the first successful resolve; the
    /// produced value is then cached and every later resolve returns the
    /// same instance. A failing invocation leaves the factory in place so a
    /// later resolve can retry construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindery::Container;
    /// use std::sync::Arc;
    ///
    /// struct Pool {
    ///     url: String,
    /// }
    ///
    /// let container = Container::new();
    /// container.register_singleton_factory(|| {
    ///     Ok(Pool { url: "postgres://localhost".to_string() })
    /// });
    ///
    /// let a = container.resolve::<Pool>().unwrap();
    /// let b = container.resolve::<Pool>().unwrap();
    /// assert!(Arc::ptr_eq(&a, &b)); // Same instance
    /// assert_eq!(a.url, "postgres://localhost");
    /// ```
    pub fn register_singleton_factory<T, F>(&self, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.insert_factory(Key::of::<T>(), Lifetime::Singleton, factory);
    }

    /// Registers a named singleton factory.
    pub fn register_singleton_factory_named<T, F>(&self, name: &'static str, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.insert_factory(Key::named::<T>(name), Lifetime::Singleton, factory);
    }

    fn insert_factory<T, F>(&self, key: Key, lifetime: Lifetime, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        let ctor: FactoryFn = Arc::new(move || factory().map(|value| Arc::new(value) as AnyArc));
        let state = match lifetime {
            Lifetime::Singleton => BindingState::PendingSingleton(ctor),
            Lifetime::Transient => BindingState::Transient(ctor),
        };
        self.insert(key, state);
    }

    // Any registration replaces whatever occupied the key, including a stale
    // pending singleton left by an earlier factory registration.
    fn insert(&self, key: Key, state: BindingState) {
        self.inner.bindings.insert(key, state);
    }

    // ----- Resolution -----

    /// Resolves the unnamed binding for type `T`.
    ///
    /// Returns the bound value wrapped in an `Arc`. Instance bindings and
    /// promoted singletons return the same `Arc` on every call; transient
    /// factories produce a fresh value per call.
    ///
    /// # Errors
    ///
    /// * [`DiError::NotRegistered`] if nothing is bound under the key
    /// * [`DiError::FactoryFailure`] if a factory ran and failed
    /// * [`DiError::TypeMismatch`] if the stored value is not a `T`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindery::Container;
    ///
    /// let container = Container::new();
    /// container.register("configuration".to_string());
    ///
    /// let config = container.resolve::<String>().unwrap();
    /// assert_eq!(&*config, "configuration");
    /// ```
    pub fn resolve<T: Send + Sync + 'static>(&self) -> DiResult<Arc<T>> {
        self.resolve_key(Key::of::<T>())
    }

    /// Resolves the binding registered for type `T` under `name`.
    pub fn resolve_named<T: Send + Sync + 'static>(&self, name: &'static str) -> DiResult<Arc<T>> {
        self.resolve_key(Key::named::<T>(name))
    }

    fn resolve_key<T: Send + Sync + 'static>(&self, key: Key) -> DiResult<Arc<T>> {
        let any = self.resolve_any(&key)?;
        any.downcast::<T>().map_err(|_| DiError::TypeMismatch(key))
    }

    fn resolve_any(&self, key: &Key) -> DiResult<AnyArc> {
        if self.inner.observers.has_observers() {
            let start = Instant::now();
            self.inner.observers.resolving(key);

            let result = self.resolve_any_impl(key);

            match &result {
                Ok(_) => self.inner.observers.resolved(key, start.elapsed()),
                Err(error) => self.inner.observers.resolution_failed(key, error),
            }
            result
        } else {
            self.resolve_any_impl(key)
        }
    }

    fn resolve_any_impl(&self, key: &Key) -> DiResult<AnyArc> {
        let planned = match self.inner.bindings.get(key) {
            Some(entry) => match entry.value() {
                BindingState::Instance(value) => Planned::Ready(value.clone()),
                BindingState::Transient(factory) => Planned::Transient(factory.clone()),
                BindingState::PendingSingleton(factory) => Planned::Promote(factory.clone()),
            },
            None => return Err(DiError::NotRegistered(*key)),
        };

        match planned {
            Planned::Ready(value) => Ok(value),
            Planned::Transient(factory) => {
                factory().map_err(|err| DiError::FactoryFailure(*key, Arc::new(err)))
            }
            Planned::Promote(factory) => {
                // A failure propagates and leaves the pending entry intact,
                // so a later resolve retries construction.
                let value =
                    factory().map_err(|err| DiError::FactoryFailure(*key, Arc::new(err)))?;
                Ok(self.promote(key, value))
            }
        }
    }

    /// Installs a freshly constructed singleton value, resolving races with
    /// concurrent resolvers and re-registrations of the same key.
    fn promote(&self, key: &Key, value: AnyArc) -> AnyArc {
        match self.inner.bindings.entry(*key) {
            Entry::Occupied(mut slot) => match slot.get() {
                // Another resolver completed promotion first; serve its
                // cached instance so every caller observes one singleton.
                BindingState::Instance(existing) => existing.clone(),
                BindingState::PendingSingleton(_) => {
                    slot.insert(BindingState::Instance(value.clone()));
                    value
                }
                // The key was re-registered as transient while our factory
                // ran; leave the new registration alone.
                BindingState::Transient(_) => value,
            },
            Entry::Vacant(slot) => {
                slot.insert(BindingState::Instance(value.clone()));
                value
            }
        }
    }

    // ----- Introspection & diagnostics -----

    /// Adds an observer notified of every resolution on this container.
    pub fn add_observer(&self, observer: Arc<dyn DiObserver>) {
        self.inner.observers.add(observer);
    }

    /// Returns true if an unnamed binding exists for `T`.
    pub fn contains<T: 'static>(&self) -> bool {
        self.inner.bindings.contains_key(&Key::of::<T>())
    }

    /// Returns true if a binding exists for `T` under `name`.
    pub fn contains_named<T: 'static>(&self, name: &'static str) -> bool {
        self.inner.bindings.contains_key(&Key::named::<T>(name))
    }

    /// Number of registered bindings (pending singletons included).
    pub fn len(&self) -> usize {
        self.inner.bindings.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.inner.bindings.is_empty()
    }

    /// Snapshot of all registered bindings for inspection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindery::{Container, Lifetime};
    ///
    /// let container = Container::new();
    /// container.register(42u32);
    /// container.register_factory(|| Ok(String::new()));
    ///
    /// let descriptors = container.descriptors();
    /// let transient = descriptors
    ///     .iter()
    ///     .find(|d| d.lifetime == Lifetime::Transient)
    ///     .unwrap();
    /// assert!(transient.type_name().contains("String"));
    /// ```
    pub fn descriptors(&self) -> Vec<BindingDescriptor> {
        self.inner
            .bindings
            .iter()
            .map(|entry| BindingDescriptor {
                key: *entry.key(),
                lifetime: entry.value().lifetime(),
                realized: entry.value().is_realized(),
            })
            .collect()
    }

    #[cfg(feature = "diagnostics")]
    pub fn to_debug_string(&self) -> String {
        let mut s = String::new();
        s.push_str("=== Container Debug ===\n");
        for entry in self.inner.bindings.iter() {
            s.push_str(&format!("  {}: {}\n", entry.key(), entry.value().kind()));
        }
        s
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

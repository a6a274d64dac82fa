use bindery::{Container, DiError};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

#[test]
fn test_transient_factory_reinvoked() {
    let container = Container::new();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    container.register_factory(move || Ok(counter.fetch_add(1, Ordering::SeqCst) + 1));

    // Each resolve runs the factory and yields a strictly increasing value
    for expected in 1..=5u32 {
        assert_eq!(*container.resolve::<u32>().unwrap(), expected);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[test]
fn test_singleton_memoized() {
    let container = Container::new();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    container.register_singleton_factory(move || {
        Ok(counter.fetch_add(1, Ordering::SeqCst) + 1)
    });

    let first = container.resolve::<u32>().unwrap();
    assert_eq!(*first, 1);

    // Subsequent resolves serve the cached instance; the factory never reruns
    for _ in 0..10 {
        let again = container.resolve::<u32>().unwrap();
        assert_eq!(*again, 1);
        assert!(Arc::ptr_eq(&first, &again));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_named_singleton_memoized() {
    let container = Container::new();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    container.register_singleton_factory_named("id", move || {
        Ok(format!("conn-{}", counter.fetch_add(1, Ordering::SeqCst) + 1))
    });

    let a = container.resolve_named::<String>("id").unwrap();
    let b = container.resolve_named::<String>("id").unwrap();

    assert_eq!(&*a, "conn-1");
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_factory_failure_surfaces() {
    let container = Container::new();
    container.register_factory::<String, _>(|| Err("connection refused".into()));

    match container.resolve::<String>() {
        Err(DiError::FactoryFailure(key, source)) => {
            assert_eq!(key.display_name(), "alloc::string::String");
            assert_eq!(source.to_string(), "connection refused");
        }
        other => panic!("expected FactoryFailure, got {:?}", other),
    }

    // Still failing on the next call; no bad value was cached
    assert!(container.resolve::<String>().is_err());
}

#[test]
fn test_failed_singleton_retries() {
    let container = Container::new();
    let calls = Arc::new(AtomicU32::new(0));
    let healthy = Arc::new(AtomicBool::new(false));

    let counter = calls.clone();
    let flag = healthy.clone();
    container.register_singleton_factory(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        if flag.load(Ordering::SeqCst) {
            Ok("ready".to_string())
        } else {
            Err("dependency unavailable".into())
        }
    });

    // Failure propagates and the pending factory stays in place
    assert!(container.resolve::<String>().is_err());
    assert!(container.resolve::<String>().is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // Once construction can succeed, promotion happens and sticks
    healthy.store(true, Ordering::SeqCst);
    let first = container.resolve::<String>().unwrap();
    assert_eq!(&*first, "ready");

    let second = container.resolve::<String>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_value_registration_clears_pending_singleton() {
    let container = Container::new();
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    container.register_singleton_factory(move || {
        Ok(counter.fetch_add(1, Ordering::SeqCst) + 100)
    });

    // Registering a value before the first resolve replaces the pending
    // factory; the old factory can never resurface.
    container.register(7u32);

    assert_eq!(*container.resolve::<u32>().unwrap(), 7);
    assert_eq!(*container.resolve::<u32>().unwrap(), 7);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_reregistration_after_promotion_runs_again() {
    let container = Container::new();
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    container.register_singleton_factory(move || {
        Ok(counter.fetch_add(1, Ordering::SeqCst) + 1)
    });

    assert_eq!(*container.resolve::<u32>().unwrap(), 1);

    // Re-registering the key as singleton re-arms the factory
    let counter = calls.clone();
    container.register_singleton_factory(move || {
        Ok(counter.fetch_add(1, Ordering::SeqCst) + 1)
    });

    assert_eq!(*container.resolve::<u32>().unwrap(), 2);
    assert_eq!(*container.resolve::<u32>().unwrap(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_transient_failure_then_success() {
    let container = Container::new();
    let healthy = Arc::new(AtomicBool::new(false));

    let flag = healthy.clone();
    container.register_factory(move || {
        if flag.load(Ordering::SeqCst) {
            Ok(1u64)
        } else {
            Err("not yet".into())
        }
    });

    assert!(container.resolve::<u64>().is_err());
    healthy.store(true, Ordering::SeqCst);
    assert_eq!(*container.resolve::<u64>().unwrap(), 1);
}

#[test]
fn test_promotion_realizes_descriptor() {
    let container = Container::new();
    container.register_singleton_factory(|| Ok(0u64));

    let before = container.descriptors();
    assert!(!before[0].realized);

    container.resolve::<u64>().unwrap();

    let after = container.descriptors();
    assert!(after[0].realized);
}

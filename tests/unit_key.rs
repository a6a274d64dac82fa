/// Unit tests for Key construction, equality, and display

use bindery::Key;
use std::any::TypeId;
use std::collections::HashMap;

#[test]
fn test_key_of_display_name() {
    let key = Key::of::<String>();
    assert_eq!(key.display_name(), "alloc::string::String");
    assert!(!key.display_name().is_empty());
}

#[test]
fn test_key_of_has_no_service_name() {
    let key = Key::of::<String>();
    assert_eq!(key.service_name(), None);
}

#[test]
fn test_key_named_service_name() {
    let key = Key::named::<u32>("database_port");
    assert_eq!(key.display_name(), "u32");
    assert_eq!(key.service_name(), Some("database_port"));
}

#[test]
fn test_key_named_empty_string() {
    // An empty name is still a name, distinct from the unnamed key
    let key = Key::named::<u32>("");
    assert_eq!(key.service_name(), Some(""));
    assert_ne!(key, Key::of::<u32>());
}

#[test]
fn test_key_type_id() {
    assert_eq!(Key::of::<String>().type_id(), TypeId::of::<String>());
    assert_eq!(Key::named::<String>("x").type_id(), TypeId::of::<String>());
}

#[test]
fn test_key_equality() {
    assert_eq!(Key::of::<String>(), Key::of::<String>());
    assert_ne!(Key::of::<String>(), Key::of::<u32>());

    assert_eq!(Key::named::<u32>("a"), Key::named::<u32>("a"));
    assert_ne!(Key::named::<u32>("a"), Key::named::<u32>("b"));
    assert_ne!(Key::named::<u32>("a"), Key::of::<u32>());
}

#[test]
fn test_generic_instantiations_are_distinct() {
    assert_ne!(Key::of::<Vec<i32>>(), Key::of::<Vec<String>>());
    assert_ne!(Key::of::<Option<u8>>(), Key::of::<Option<u16>>());
}

#[test]
fn test_key_determinism() {
    // Key construction is a pure function of (type, name)
    let a = Key::named::<Vec<String>>("cache");
    let b = Key::named::<Vec<String>>("cache");
    assert_eq!(a, b);
    assert_eq!(a.display_name(), b.display_name());
}

#[test]
fn test_key_hash_lookup() {
    let mut map = HashMap::new();
    map.insert(Key::of::<String>(), "unnamed");
    map.insert(Key::named::<String>("a"), "named");

    assert_eq!(map.get(&Key::of::<String>()), Some(&"unnamed"));
    assert_eq!(map.get(&Key::named::<String>("a")), Some(&"named"));
    assert_eq!(map.get(&Key::named::<String>("b")), None);
}

#[test]
fn test_key_copy_clone() {
    let key = Key::named::<u32>("test_name");
    let copied = key;

    assert_eq!(key.display_name(), copied.display_name());
    assert_eq!(key.service_name(), copied.service_name());
}

#[test]
fn test_key_debug_format() {
    let debug_str = format!("{:?}", Key::of::<String>());
    assert!(debug_str.contains("Key"));
    assert!(debug_str.contains("alloc::string::String"));
}

#[test]
fn test_key_display_format() {
    assert_eq!(format!("{}", Key::of::<u32>()), "u32");
    assert_eq!(format!("{}", Key::named::<u32>("port")), "u32 (named \"port\")");
}

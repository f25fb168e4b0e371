#![cfg(feature = "auto_register")]

use std::sync::Arc;

use prop_access::driver::{Driver, DriverRegistry, FnDriver};
use prop_access::{Property, PropertyAccessor, PropertyError, Value};

struct Length;

impl Driver for Length {
    fn satisfies(&self, source: &dyn Property) -> bool {
        source.is::<String>()
    }

    fn get(&self, source: &dyn Property, key: &str) -> Result<Value, PropertyError> {
        match (key, source.downcast_ref::<String>()) {
            ("len", Some(text)) => Ok(Value::from(text.len() as i64)),
            _ => Err(PropertyError::nonexistent_key(
                source.to_value(),
                key,
                prop_access::KeyKind::Object,
            )),
        }
    }
}

prop_access::submit_driver!("length", || Arc::new(Length));
prop_access::submit_driver!("always", || {
    Arc::new(FnDriver::new(|_| true, |_, key| Ok(Value::from(key))))
});

#[test]
fn declared_drivers_are_collected() {
    let mut drivers = DriverRegistry::new();
    assert!(drivers.auto_register());

    // Sorted by name.
    assert_eq!(drivers.names().collect::<Vec<_>>(), ["always", "length"]);
    assert_eq!(drivers.get("length").map(|d| d.type_name()), Some(core::any::type_name::<Length>()));
}

#[test]
fn existing_names_are_kept() {
    let mut drivers = DriverRegistry::new();
    drivers
        .register("always", |_| false, |_, _| Ok(Value::Null), false)
        .unwrap();
    drivers.auto_register();

    assert_eq!(drivers.names().collect::<Vec<_>>(), ["always", "length"]);

    let accessor = PropertyAccessor::new().with_drivers(&drivers);
    let source = String::from("four");
    assert_eq!(accessor.get(&source, "len").unwrap(), Value::Int(4));
}

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::access::setter_name;
use crate::property::{Object, Property, PropertyMut};
use crate::{KeyKind, MemberError, PropertyError, Value};

#[inline]
fn owned_path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|&s| String::from(s)).collect()
}

/// Writes `value` at `segments` inside `target`, in place.
///
/// Intermediate segments are descended by mutable reference and never
/// created. Drivers are not consulted.
///
/// # Errors
///
/// - [`PropertyError::EmptyPath`] when `segments` is empty.
/// - [`PropertyError::InvalidTarget`] when a step reaches a value that
///   cannot hold keys, or an intermediate is missing. The error carries
///   `target` and the full path, and keeps the narrowed failure as its
///   [`previous`](PropertyError::previous).
/// - [`PropertyError::NonAccessibleProperty`] when writing or descending
///   into a non-public member without a setter.
/// - [`PropertyError::NonexistentKey`] when an object refuses a new member
///   or a list index is out of range.
/// - [`PropertyError::Mismatch`] when `value` does not fit the slot.
pub fn assign_path(
    target: &mut dyn Property,
    segments: &[&str],
    value: Value,
) -> Result<(), PropertyError> {
    let Some(last) = segments.last() else {
        return Err(PropertyError::EmptyPath);
    };

    let result = descend(target, segments).and_then(|slot| set_by_key(slot, last, value));

    result.map_err(|err| match err {
        PropertyError::InvalidTarget { .. } => PropertyError::InvalidTarget {
            target: target.to_value(),
            path: owned_path(segments),
            previous: Some(Box::new(err)),
        },
        other => other,
    })
}

/// Walks every segment but the last. Failures report the path still to
/// be walked, last segment included.
fn descend<'a>(
    mut target: &'a mut dyn Property,
    segments: &[&str],
) -> Result<&'a mut dyn Property, PropertyError> {
    for index in 0..segments.len().saturating_sub(1) {
        target = step_mut(target, &segments[index..])?;
    }
    Ok(target)
}

fn step_mut<'a>(
    target: &'a mut dyn Property,
    remaining: &[&str],
) -> Result<&'a mut dyn Property, PropertyError> {
    let key = remaining[0];
    let missing = || PropertyError::InvalidTarget {
        target: Value::Null,
        path: owned_path(remaining),
        previous: None,
    };

    match target.property_mut() {
        PropertyMut::Object(object) => {
            if object.has_member(key) && !object.is_member_public(key) {
                return Err(PropertyError::NonAccessibleProperty {
                    object: object.to_value(),
                    property: String::from(key),
                });
            }
            match object.member_mut(key) {
                Ok(member) => Ok(member),
                Err(MemberError::Undefined) => Err(missing()),
                Err(err) => Err(err.into()),
            }
        }
        PropertyMut::Map(map) => map.get_mut(key).ok_or_else(missing),
        PropertyMut::Opaque(value) => Err(PropertyError::InvalidTarget {
            target: value.to_value(),
            path: owned_path(remaining),
            previous: None,
        }),
    }
}

/// Writes `value` under a single `key` of `target`.
///
/// Objects go through the `set{Key}` setter, then the member. Maps insert,
/// creating absent keys.
///
/// # Errors
///
/// - [`PropertyError::InvalidTarget`] when `target` cannot hold keys. The
///   error is not re-wrapped, see [`assign_path`] for that.
/// - [`PropertyError::NonAccessibleProperty`] for a non-public member
///   without a setter.
/// - [`PropertyError::NonexistentKey`] when an object refuses a new member
///   or a list index is out of range.
/// - [`PropertyError::Mismatch`] when `value` does not fit the slot.
///
/// # Examples
///
/// ```
/// use prop_access::{Value, access::set_by_key};
///
/// let mut target = Value::map();
/// set_by_key(&mut target, "a.b", Value::Int(1)).unwrap();
/// assert_eq!(target, Value::from_iter([("a.b", 1)]));
///
/// assert!(set_by_key(&mut Value::Int(0), "a", Value::Null).is_err());
/// ```
pub fn set_by_key(target: &mut dyn Property, key: &str, value: Value) -> Result<(), PropertyError> {
    match target.property_mut() {
        PropertyMut::Object(object) => object_set(object, key, value),
        PropertyMut::Map(map) => map.insert(key, value),
        PropertyMut::Opaque(current) => Err(PropertyError::InvalidTarget {
            target: current.to_value(),
            path: owned_path(&[key]),
            previous: None,
        }),
    }
}

fn object_set(object: &mut dyn Object, key: &str, value: Value) -> Result<(), PropertyError> {
    let setter = setter_name(key);
    if object.has_method(&setter) {
        return object.call_setter(&setter, value);
    }

    if object.has_member(key) && !object.is_member_public(key) {
        return Err(PropertyError::NonAccessibleProperty {
            object: object.to_value(),
            property: String::from(key),
        });
    }

    match object.set_member(key, value) {
        Ok(()) => Ok(()),
        Err(MemberError::Undefined) => Err(PropertyError::nonexistent_key(
            object.to_value(),
            key,
            KeyKind::Object,
        )),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{assign_path, set_by_key};
    use crate::dynamic::{DynamicObject, Visibility};
    use crate::{Object, PropertyError, Value};

    #[test]
    fn writes_in_place() {
        let mut target = Value::from_iter([("a", Value::from_iter([("b", 1)]))]);
        assign_path(&mut target, &["a", "b"], Value::Int(2)).unwrap();
        assign_path(&mut target, &["a", "c"], Value::Int(3)).unwrap();

        let inner = target.as_map().and_then(|m| m.get("a")).and_then(Value::as_map).unwrap();
        assert_eq!(inner.get("b"), Some(&Value::Int(2)));
        assert_eq!(inner.get("c"), Some(&Value::Int(3)));
    }

    #[test]
    fn lists() {
        let mut target = Value::from(vec![1, 2]);
        assign_path(&mut target, &["0"], Value::Int(9)).unwrap();
        assign_path(&mut target, &["2"], Value::Int(3)).unwrap();
        assert_eq!(target, Value::from(vec![9, 2, 3]));

        assert!(matches!(
            assign_path(&mut target, &["7"], Value::Int(1)),
            Err(PropertyError::NonexistentKey { .. })
        ));
    }

    #[test]
    fn invalid_target_is_rewrapped() {
        let mut target = Value::from("");
        let err = assign_path(&mut target, &["a"], Value::Int(1)).unwrap_err();

        let PropertyError::InvalidTarget { target: outer, path, previous } = err else {
            panic!("expected InvalidTarget");
        };
        assert_eq!(outer, Value::from(""));
        assert_eq!(path, ["a"]);
        assert!(matches!(
            previous.as_deref(),
            Some(PropertyError::InvalidTarget { previous: None, .. })
        ));
    }

    #[test]
    fn deep_invalid_target_keeps_original_context() {
        let mut target = Value::from_iter([("a", 1)]);
        let err = assign_path(&mut target, &["a", "b", "c"], Value::Int(1)).unwrap_err();

        assert_eq!(err.path().unwrap(), ["a", "b", "c"]);
        match err.previous() {
            Some(PropertyError::InvalidTarget { target, path, .. }) => {
                assert_eq!(target, &Value::Int(1));
                assert_eq!(path, &["b", "c"]);
            }
            other => panic!("unexpected previous: {other:?}"),
        }
    }

    #[test]
    fn missing_intermediate() {
        let mut target = Value::map();
        let err = assign_path(&mut target, &["a", "b"], Value::Int(1)).unwrap_err();
        match err.previous() {
            Some(PropertyError::InvalidTarget { target, path, .. }) => {
                assert!(target.is_null());
                assert_eq!(path, &["a", "b"]);
            }
            other => panic!("unexpected previous: {other:?}"),
        }
        assert_eq!(target, Value::map());
    }

    #[test]
    fn objects() {
        let mut object = DynamicObject::new()
            .with_member("name", "a")
            .with_private_member("secret", 1)
            .with_private_member("age", 1)
            .with_setter("setAge", |this, value| {
                this.insert_with_visibility("age", value, Visibility::Private);
                Ok(())
            });

        assign_path(&mut object, &["name"], Value::from("b")).unwrap();
        assign_path(&mut object, &["age"], Value::Int(5)).unwrap();
        assign_path(&mut object, &["fresh"], Value::Int(1)).unwrap();

        assert_eq!(object.field("name"), Some(&Value::from("b")));
        assert_eq!(object.field("age"), Some(&Value::Int(5)));
        assert!(object.is_member_public("fresh"));

        assert!(matches!(
            assign_path(&mut object, &["secret"], Value::Int(2)),
            Err(PropertyError::NonAccessibleProperty { .. })
        ));

        let mut sealed = DynamicObject::new().sealed();
        assert!(matches!(
            assign_path(&mut sealed, &["x"], Value::Int(1)),
            Err(PropertyError::NonexistentKey { .. })
        ));
    }

    #[test]
    fn single_key_writes_are_not_rewrapped() {
        let mut target = Value::from_iter([("a", 1)]);
        set_by_key(&mut target, "b", Value::Int(2)).unwrap();
        assert_eq!(target, Value::from_iter([("a", 1), ("b", 2)]));

        let mut text = Value::from("x");
        let err = set_by_key(&mut text, "a", Value::Int(1)).unwrap_err();
        assert!(matches!(
            err,
            PropertyError::InvalidTarget { previous: None, ref path, .. } if path == &["a"]
        ));
    }
}

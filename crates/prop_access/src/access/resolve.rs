use alloc::string::String;
use alloc::vec::Vec;

use crate::access::getter_names;
use crate::driver::DriverRegistry;
use crate::property::{Map, Object, Property, PropertyRef};
use crate::{KeyKind, MemberError, PropertyError, Value};

/// The value reached so far: borrowed from the source while possible,
/// owned once a getter or driver produced it.
enum Cursor<'a> {
    Borrowed(&'a dyn Property),
    Owned(Value),
}

impl Cursor<'_> {
    #[inline]
    fn into_value(self) -> Value {
        match self {
            Cursor::Borrowed(property) => property.to_value(),
            Cursor::Owned(value) => value,
        }
    }

    #[inline]
    fn into_owned(self) -> Cursor<'static> {
        Cursor::Owned(self.into_value())
    }
}

/// Reads `segments` from `source`, one step per segment.
///
/// `drivers` are consulted before the built-in rules at every step.
///
/// # Errors
///
/// - [`PropertyError::EmptyPath`] when `segments` is empty.
/// - [`PropertyError::InvalidSource`] when a step reaches a value that
///   is neither an object nor a map and no driver accepts it.
/// - [`PropertyError::NonexistentKey`] when an object or map lacks a key.
/// - [`PropertyError::NonAccessibleProperty`] for non-public members.
/// - Whatever a driver or getter returns.
pub fn resolve_path(
    drivers: Option<&DriverRegistry>,
    source: &dyn Property,
    segments: &[&str],
) -> Result<Value, PropertyError> {
    if segments.is_empty() {
        return Err(PropertyError::EmptyPath);
    }

    let mut cursor = Cursor::Borrowed(source);
    for index in 0..segments.len() {
        let remaining = &segments[index..];
        cursor = match cursor {
            Cursor::Borrowed(current) => step(drivers, current, remaining)?,
            Cursor::Owned(current) => step(drivers, &current, remaining)?.into_owned(),
        };
    }
    Ok(cursor.into_value())
}

/// Resolves `remaining[0]` on `source`.
fn step<'a>(
    drivers: Option<&DriverRegistry>,
    source: &'a dyn Property,
    remaining: &[&str],
) -> Result<Cursor<'a>, PropertyError> {
    let key = remaining[0];

    if let Some((name, driver)) = drivers.and_then(|drivers| drivers.resolve(source)) {
        log::trace!("driver `{name}` reads key `{key}`");
        return driver.get(source, key).map(Cursor::Owned);
    }

    match source.property_ref() {
        PropertyRef::Object(object) => object_get(object, key),
        PropertyRef::Map(map) => map_get(map, key),
        PropertyRef::Opaque(value) => Err(PropertyError::InvalidSource {
            value: value.to_value(),
            path: remaining.iter().map(|&s| String::from(s)).collect::<Vec<_>>(),
        }),
    }
}

fn object_get<'a>(object: &'a dyn Object, key: &str) -> Result<Cursor<'a>, PropertyError> {
    for getter in getter_names(key) {
        if let Some(value) = object.call_getter(&getter) {
            return Ok(Cursor::Owned(value));
        }
    }

    if object.has_member(key) && !object.is_member_public(key) {
        return Err(PropertyError::NonAccessibleProperty {
            object: object.to_value(),
            property: String::from(key),
        });
    }

    match object.member(key) {
        Ok(member) => Ok(Cursor::Borrowed(member)),
        Err(MemberError::Undefined) => Err(PropertyError::nonexistent_key(
            object.to_value(),
            key,
            KeyKind::Object,
        )),
        Err(err) => Err(err.into()),
    }
}

fn map_get<'a>(map: &'a dyn Map, key: &str) -> Result<Cursor<'a>, PropertyError> {
    match map.get(key) {
        Some(entry) => Ok(Cursor::Borrowed(entry)),
        None => Err(PropertyError::nonexistent_key(map.to_value(), key, KeyKind::Map)),
    }
}

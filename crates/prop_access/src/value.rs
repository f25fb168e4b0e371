//! The dynamic value passed in and out of the accessor.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;

use prop_utils::hash::HashMap;

use crate::{Object, PropertyError};

/// The map type held by [`Value::Map`].
pub type ValueMap = HashMap<String, Value>;

/// A dynamically typed value.
///
/// Reads return a `Value`; writes accept anything convertible into one.
/// Typed structs travel as [`Value::Object`] and can be taken back out
/// with [`Value::take_object`].
///
/// # Examples
///
/// ```
/// use prop_access::Value;
///
/// let value = Value::from_iter([("a", Value::from(1)), ("b", Value::from("x"))]);
/// assert_eq!(value.kind_name(), "map");
/// assert_eq!(value.as_map().map(|m| m.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(ValueMap),
    Object(Box<dyn Object>),
}

impl Clone for Box<dyn Object> {
    #[inline]
    fn clone(&self) -> Self {
        self.clone_object()
    }
}

impl Value {
    /// Creates an empty [`Value::Map`].
    #[inline]
    pub fn map() -> Self {
        Value::Map(ValueMap::default())
    }

    /// A short lowercase name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&dyn Object> {
        match self {
            Value::Object(object) => Some(&**object),
            _ => None,
        }
    }

    /// Returns a reference to the wrapped object if it is a `T`.
    pub fn downcast_object_ref<T: Object>(&self) -> Option<&T> {
        let object: &dyn Any = self.as_object()?;
        object.downcast_ref::<T>()
    }

    /// Takes the wrapped object out if it is a `T`.
    ///
    /// # Errors
    ///
    /// [`PropertyError::Mismatch`] when the value is not a `T` object.
    /// The value is handed back inside the error.
    pub fn take_object<T: Object>(self) -> Result<T, PropertyError> {
        match self {
            Value::Object(object) if (&*object as &dyn Any).is::<T>() => {
                let object: Box<dyn Any> = object;
                object
                    .downcast::<T>()
                    .map(|object| *object)
                    .map_err(|_| PropertyError::mismatch::<T>(Value::Null))
            }
            other => Err(PropertyError::mismatch::<T>(other)),
        }
    }
}

impl PartialEq for Value {
    /// Objects compare through [`Object::object_eq`].
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.object_eq(&**b),
            _ => false,
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<ValueMap> for Value {
    #[inline]
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

impl From<Box<dyn Object>> for Value {
    #[inline]
    fn from(value: Box<dyn Object>) -> Self {
        Value::Object(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    /// Collects pairs into a [`Value::Map`].
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::dynamic::DynamicObject;

    #[test]
    fn conversions() {
        assert_eq!(Value::from(1_u8), Value::Int(1));
        assert_eq!(Value::from(1.5_f32), Value::Float(1.5));
        assert_eq!(Value::from(Some("a")), Value::String("a".into()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn variants_never_compare_across_kinds() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::String("1".into()), Value::Int(1));
        assert_ne!(Value::Null, Value::Bool(false));
    }

    #[test]
    fn take_object() {
        let object = DynamicObject::new().with_member("a", 1);
        let value = Value::Object(Box::new(object.clone()));

        assert_eq!(value.downcast_object_ref::<DynamicObject>(), Some(&object));
        assert_eq!(value.take_object::<DynamicObject>().ok(), Some(object));

        let err = Value::Int(1).take_object::<DynamicObject>().unwrap_err();
        assert!(matches!(
            err,
            PropertyError::Mismatch { found: Value::Int(1), .. }
        ));
    }
}

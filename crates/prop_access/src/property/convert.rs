use alloc::string::String;

use crate::property::Property;
use crate::{PropertyError, Value};

/// Strict conversion out of a [`Value`].
///
/// Only the matching variant converts. Integers narrow with a range check.
///
/// # Examples
///
/// ```
/// use prop_access::{FromValue, Value};
///
/// assert_eq!(u8::from_value(Value::Int(7)).unwrap(), 7);
/// assert!(u8::from_value(Value::Int(300)).is_err());
/// assert!(String::from_value(Value::Int(1)).is_err());
/// ```
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, PropertyError>;
}

/// Conversion into a [`Value`], used for getter results.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl<T: Property> IntoValue for T {
    #[inline]
    fn into_value(self) -> Value {
        Property::into_value(self)
    }
}

impl IntoValue for &str {
    #[inline]
    fn into_value(self) -> Value {
        Value::String(String::from(self))
    }
}

impl IntoValue for &String {
    #[inline]
    fn into_value(self) -> Value {
        Value::String(self.clone())
    }
}

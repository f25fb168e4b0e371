use crate::property::{FromValue, Property, PropertyMut, PropertyRef};
use crate::{PropertyError, Value};

// `None` is an opaque null. `Some` is transparent.
impl<T: Property + FromValue> Property for Option<T> {
    fn property_ref(&self) -> PropertyRef<'_> {
        match self {
            Some(inner) => inner.property_ref(),
            None => PropertyRef::Opaque(self),
        }
    }

    fn property_mut(&mut self) -> PropertyMut<'_> {
        match self {
            Some(inner) => inner.property_mut(),
            none @ None => PropertyMut::Opaque(none),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(inner) => inner.into_value(),
            None => Value::Null,
        }
    }

    fn assign(&mut self, value: Value) -> Result<(), PropertyError> {
        *self = Self::from_value(value)?;
        Ok(())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, PropertyError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

use crate::property::{FromValue, Property, PropertyMut, PropertyRef};
use crate::{PropertyError, Value};

// A `Value` steps exactly like the data it holds.
impl Property for Value {
    fn property_ref(&self) -> PropertyRef<'_> {
        match self {
            Value::List(list) => PropertyRef::Map(list),
            Value::Map(map) => PropertyRef::Map(map),
            Value::Object(object) => object.property_ref(),
            other => PropertyRef::Opaque(other),
        }
    }

    fn property_mut(&mut self) -> PropertyMut<'_> {
        match self {
            Value::List(list) => PropertyMut::Map(list),
            Value::Map(map) => PropertyMut::Map(map),
            Value::Object(object) => object.property_mut(),
            other => PropertyMut::Opaque(other),
        }
    }

    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }

    #[inline]
    fn into_value(self) -> Value {
        self
    }

    #[inline]
    fn assign(&mut self, value: Value) -> Result<(), PropertyError> {
        *self = value;
        Ok(())
    }
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Result<Self, PropertyError> {
        Ok(value)
    }
}

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;

use crate::property::{FromValue, Map, Property, PropertyMut, PropertyRef};
use crate::{KeyKind, PropertyError, Value};

// Lists are maps keyed by decimal indices. Writing one past the end appends.

#[inline]
fn parse_index(key: &str) -> Option<usize> {
    key.parse::<usize>().ok()
}

impl<T: Property + FromValue> Property for Vec<T> {
    #[inline]
    fn property_ref(&self) -> PropertyRef<'_> {
        PropertyRef::Map(self)
    }

    #[inline]
    fn property_mut(&mut self) -> PropertyMut<'_> {
        PropertyMut::Map(self)
    }

    fn to_value(&self) -> Value {
        Value::List(self.as_slice().iter().map(Property::to_value).collect())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(Property::into_value).collect())
    }

    fn assign(&mut self, value: Value) -> Result<(), PropertyError> {
        *self = Self::from_value(value)?;
        Ok(())
    }
}

impl<T: Property + FromValue> Map for Vec<T> {
    fn get(&self, key: &str) -> Option<&dyn Property> {
        let index = parse_index(key)?;
        self.as_slice().get(index).map(|item| item as &dyn Property)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Property> {
        let index = parse_index(key)?;
        self.as_mut_slice()
            .get_mut(index)
            .map(|item| item as &mut dyn Property)
    }

    fn insert(&mut self, key: &str, value: Value) -> Result<(), PropertyError> {
        match parse_index(key) {
            Some(index) if index < Vec::len(self) => {
                self[index] = T::from_value(value)?;
                Ok(())
            }
            Some(index) if index == Vec::len(self) => {
                self.push(T::from_value(value)?);
                Ok(())
            }
            _ => Err(PropertyError::nonexistent_key(
                self.to_value(),
                key,
                KeyKind::Map,
            )),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (Cow<'_, str>, &dyn Property)> + '_> {
        Box::new(
            self.as_slice()
                .iter()
                .enumerate()
                .map(|(index, item)| (Cow::Owned(format!("{index}")), item as &dyn Property)),
        )
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, PropertyError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(PropertyError::mismatch::<Self>(other)),
        }
    }
}

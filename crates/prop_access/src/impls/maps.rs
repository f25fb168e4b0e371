use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::hash::BuildHasher;

use prop_utils::hash::hashbrown;

use crate::property::{FromValue, Map, Property, PropertyMut, PropertyRef};
use crate::{PropertyError, Value};

// All string-keyed maps share one body; only the generics differ.
macro_rules! impl_string_map {
    (impl<$($param:ident),*> for $ty:ty where $($bound:tt)*) => {
        impl<$($param),*> Property for $ty
        where
            $($bound)*
        {
            #[inline]
            fn property_ref(&self) -> PropertyRef<'_> {
                PropertyRef::Map(self)
            }

            #[inline]
            fn property_mut(&mut self) -> PropertyMut<'_> {
                PropertyMut::Map(self)
            }

            fn to_value(&self) -> Value {
                Value::Map(
                    <$ty>::iter(self)
                        .map(|(key, item)| (key.clone(), item.to_value()))
                        .collect(),
                )
            }

            fn into_value(self) -> Value {
                Value::Map(
                    self.into_iter()
                        .map(|(key, item)| (key, item.into_value()))
                        .collect(),
                )
            }

            fn assign(&mut self, value: Value) -> Result<(), PropertyError> {
                *self = <$ty as FromValue>::from_value(value)?;
                Ok(())
            }
        }

        impl<$($param),*> Map for $ty
        where
            $($bound)*
        {
            #[inline]
            fn get(&self, key: &str) -> Option<&dyn Property> {
                <$ty>::get(self, key).map(|item| item as &dyn Property)
            }

            #[inline]
            fn get_mut(&mut self, key: &str) -> Option<&mut dyn Property> {
                <$ty>::get_mut(self, key).map(|item| item as &mut dyn Property)
            }

            fn insert(&mut self, key: &str, value: Value) -> Result<(), PropertyError> {
                <$ty>::insert(self, String::from(key), T::from_value(value)?);
                Ok(())
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (Cow<'_, str>, &dyn Property)> + '_> {
                Box::new(
                    <$ty>::iter(self)
                        .map(|(key, item)| (Cow::Borrowed(key.as_str()), item as &dyn Property)),
                )
            }
        }

        impl<$($param),*> FromValue for $ty
        where
            $($bound)*
        {
            fn from_value(value: Value) -> Result<Self, PropertyError> {
                match value {
                    Value::Map(map) => {
                        let mut out = <$ty>::default();
                        for (key, item) in map {
                            <$ty>::insert(&mut out, key, T::from_value(item)?);
                        }
                        Ok(out)
                    }
                    other => Err(PropertyError::mismatch::<Self>(other)),
                }
            }
        }
    };
}

impl_string_map!(
    impl<T, S> for hashbrown::HashMap<String, T, S>
    where
        T: Property + FromValue,
        S: BuildHasher + Default + Send + Sync + 'static,
);

#[cfg(feature = "std")]
impl_string_map!(
    impl<T, S> for std::collections::HashMap<String, T, S>
    where
        T: Property + FromValue,
        S: BuildHasher + Default + Send + Sync + 'static,
);

impl_string_map!(
    impl<T> for BTreeMap<String, T>
    where
        T: Property + FromValue,
);

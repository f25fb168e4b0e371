use crate::path::PropertyPath;
use crate::property::{FromValue, Map, Object, Property};
use crate::{PropertyAccessor, PropertyError, Value};

/// Path access on any [`Property`] with a default [`PropertyAccessor`]
/// (no drivers, no transformers).
///
/// # Examples
///
/// ```
/// use prop_access::{Value, access::PropertyAccess};
///
/// let mut value = Value::from_iter([("a", Value::from_iter([("b", 1)]))]);
///
/// value.set_path("a.b", 2).unwrap();
/// assert_eq!(value.get_path("a.b").unwrap(), Value::Int(2));
/// assert_eq!(value.get_path_as::<i64>("a.b").unwrap(), 2);
/// assert!(!value.can_get_path("a.c"));
/// ```
pub trait PropertyAccess {
    /// See [`PropertyAccessor::get`].
    fn get_path(&self, path: impl PropertyPath) -> Result<Value, PropertyError>;

    /// See [`PropertyAccessor::get_as`].
    fn get_path_as<T: FromValue>(&self, path: impl PropertyPath) -> Result<T, PropertyError>;

    /// See [`PropertyAccessor::can_get`].
    fn can_get_path(&self, path: impl PropertyPath) -> bool;

    /// See [`PropertyAccessor::set`].
    fn set_path(&mut self, path: impl PropertyPath, value: impl Into<Value>)
    -> Result<(), PropertyError>;
}

impl PropertyAccess for dyn Property {
    #[inline(never)]
    fn get_path(&self, path: impl PropertyPath) -> Result<Value, PropertyError> {
        PropertyAccessor::new().get(self, path)
    }

    #[inline]
    fn get_path_as<T: FromValue>(&self, path: impl PropertyPath) -> Result<T, PropertyError> {
        T::from_value(PropertyAccess::get_path(self, path)?)
    }

    #[inline]
    fn can_get_path(&self, path: impl PropertyPath) -> bool {
        PropertyAccess::get_path(self, path).is_ok()
    }

    #[inline(never)]
    fn set_path(
        &mut self,
        path: impl PropertyPath,
        value: impl Into<Value>,
    ) -> Result<(), PropertyError> {
        PropertyAccessor::new().set(self, path, value)
    }
}

macro_rules! impl_property_access {
    () => {
        #[inline(always)]
        fn get_path(&self, path: impl PropertyPath) -> Result<Value, PropertyError> {
            <dyn Property as PropertyAccess>::get_path(self, path)
        }

        #[inline(always)]
        fn get_path_as<T: FromValue>(&self, path: impl PropertyPath) -> Result<T, PropertyError> {
            <dyn Property as PropertyAccess>::get_path_as::<T>(self, path)
        }

        #[inline(always)]
        fn can_get_path(&self, path: impl PropertyPath) -> bool {
            <dyn Property as PropertyAccess>::can_get_path(self, path)
        }

        #[inline(always)]
        fn set_path(
            &mut self,
            path: impl PropertyPath,
            value: impl Into<Value>,
        ) -> Result<(), PropertyError> {
            <dyn Property as PropertyAccess>::set_path(self, path, value)
        }
    };
}

impl<P: Property> PropertyAccess for P {
    impl_property_access!();
}

impl PropertyAccess for dyn Object {
    impl_property_access!();
}

impl PropertyAccess for dyn Map {
    impl_property_access!();
}

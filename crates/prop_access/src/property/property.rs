use core::any::Any;
use core::fmt::Debug;

use crate::property::PropertyRef;
use crate::property::{PropertyKind, PropertyMut};
use crate::{PropertyError, Value};

/// A value the accessor can read from, write to, or step through.
///
/// Implemented for primitives, strings, `Option`, `Vec`, string-keyed maps,
/// [`Value`] and [`DynamicObject`](crate::dynamic::DynamicObject).
/// Structs get it from `#[derive(Property)]`, which also implements
/// [`Object`](crate::Object).
///
/// # Examples
///
/// ```
/// use prop_access::{Property, PropertyKind, Value};
///
/// assert_eq!(1_i32.property_ref().kind(), PropertyKind::Opaque);
/// assert_eq!(vec![1, 2].property_ref().kind(), PropertyKind::Map);
///
/// let mut x = 1_i32;
/// x.assign(Value::Int(5)).unwrap();
/// assert_eq!(x, 5);
/// ```
pub trait Property: Any + Send + Sync + Debug {
    /// Returns an immutable view by kind.
    fn property_ref(&self) -> PropertyRef<'_>;

    /// Returns a mutable view by kind.
    fn property_mut(&mut self) -> PropertyMut<'_>;

    /// Clones the property into a [`Value`].
    fn to_value(&self) -> Value;

    /// Moves the property into a [`Value`].
    #[inline]
    fn into_value(self) -> Value
    where
        Self: Sized,
    {
        self.to_value()
    }

    /// Replaces the property with a converted `value`.
    ///
    /// # Errors
    ///
    /// [`PropertyError::Mismatch`] when `value` does not fit this type.
    fn assign(&mut self, value: Value) -> Result<(), PropertyError>;

    #[inline]
    fn property_kind(&self) -> PropertyKind {
        self.property_ref().kind()
    }
}

impl dyn Property {
    /// Returns `true` if the property is a `T`, see [`downcast_ref`](Self::downcast_ref).
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Downcasts the property to `T`.
    ///
    /// A [`Value::Object`] is looked through, so a driver sees the
    /// concrete type whether the step was reached by reference or
    /// through an owned value returned by a getter.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        if let Some(found) = any.downcast_ref::<T>() {
            return Some(found);
        }
        match any.downcast_ref::<Value>() {
            Some(Value::Object(object)) => {
                let inner: &dyn Any = &**object;
                inner.downcast_ref::<T>()
            }
            _ => None,
        }
    }

    /// Downcasts the property to `T`. Wrapped objects are not looked through.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

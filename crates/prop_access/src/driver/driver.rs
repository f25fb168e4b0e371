use core::fmt;

use crate::{Property, PropertyError, Value};

/// A read strategy for values the built-in rules do not cover.
///
/// # Examples
///
/// ```
/// use prop_access::{Property, PropertyAccessor, PropertyError, Value};
/// use prop_access::driver::{Driver, DriverRegistry};
///
/// #[derive(Debug, Clone)]
/// struct Point(i32, i32);
///
/// # impl Property for Point {
/// #     fn property_ref(&self) -> prop_access::PropertyRef<'_> { prop_access::PropertyRef::Opaque(self) }
/// #     fn property_mut(&mut self) -> prop_access::PropertyMut<'_> { prop_access::PropertyMut::Opaque(self) }
/// #     fn to_value(&self) -> Value { Value::Null }
/// #     fn assign(&mut self, _: Value) -> Result<(), PropertyError> { Ok(()) }
/// # }
/// struct PointDriver;
///
/// impl Driver for PointDriver {
///     fn satisfies(&self, source: &dyn Property) -> bool {
///         source.is::<Point>()
///     }
///
///     fn get(&self, source: &dyn Property, key: &str) -> Result<Value, PropertyError> {
///         let Some(point) = source.downcast_ref::<Point>() else {
///             return Err(PropertyError::mismatch::<Point>(source.to_value()));
///         };
///         match key {
///             "x" => Ok(Value::from(point.0)),
///             "y" => Ok(Value::from(point.1)),
///             _ => Ok(Value::Null),
///         }
///     }
/// }
///
/// let mut drivers = DriverRegistry::new();
/// drivers.add("point", PointDriver, false).unwrap();
///
/// let accessor = PropertyAccessor::new().with_drivers(&drivers);
/// assert_eq!(accessor.get(&Point(1, 2), "y").unwrap(), Value::Int(2));
/// ```
pub trait Driver: Send + Sync + 'static {
    /// Returns `true` if this driver handles `source`.
    fn satisfies(&self, source: &dyn Property) -> bool;

    /// Reads `key` from `source`.
    ///
    /// Only called after [`satisfies`](Self::satisfies) returned `true`.
    fn get(&self, source: &dyn Property, key: &str) -> Result<Value, PropertyError>;

    /// The driver's type name, for diagnostics.
    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl fmt::Debug for dyn Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Driver").field(&self.type_name()).finish()
    }
}

/// A [`Driver`] made of a predicate and a getter closure.
#[derive(Clone)]
pub struct FnDriver<P, G> {
    predicate: P,
    getter: G,
}

impl<P, G> FnDriver<P, G> {
    /// Creates a driver from closures.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_access::{Value, driver::{Driver, FnDriver}};
    ///
    /// let driver = FnDriver::new(
    ///     |source| source.is::<i64>(),
    ///     |_source, key| Ok(Value::from(key.len() as i64)),
    /// );
    ///
    /// assert!(driver.satisfies(&1_i64));
    /// assert!(!driver.satisfies(&1_i32));
    /// assert_eq!(driver.get(&1_i64, "abc").unwrap(), Value::Int(3));
    /// ```
    #[inline]
    pub fn new(predicate: P, getter: G) -> Self
    where
        P: Fn(&dyn Property) -> bool + Send + Sync + 'static,
        G: Fn(&dyn Property, &str) -> Result<Value, PropertyError> + Send + Sync + 'static,
    {
        Self { predicate, getter }
    }
}

impl<P, G> Driver for FnDriver<P, G>
where
    P: Fn(&dyn Property) -> bool + Send + Sync + 'static,
    G: Fn(&dyn Property, &str) -> Result<Value, PropertyError> + Send + Sync + 'static,
{
    #[inline]
    fn satisfies(&self, source: &dyn Property) -> bool {
        (self.predicate)(source)
    }

    #[inline]
    fn get(&self, source: &dyn Property, key: &str) -> Result<Value, PropertyError> {
        (self.getter)(source, key)
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        "FnDriver"
    }
}

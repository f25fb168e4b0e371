use alloc::borrow::Cow;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use prop_utils::hash::HashMap;

use crate::driver::{Driver, FnDriver};
use crate::{Property, PropertyError, Value};

/// An ordered, named collection of [`Driver`]s.
///
/// Resolution picks the first driver, in registration order, that
/// satisfies the value. Overwriting a name keeps its position.
#[derive(Clone, Default)]
pub struct DriverRegistry {
    drivers: Vec<(Cow<'static, str>, Arc<dyn Driver>)>,
    indices: HashMap<Cow<'static, str>, usize>,
}

impl DriverRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a driver under `name`.
    ///
    /// # Errors
    ///
    /// [`PropertyError::DriverRewriting`] when `name` is taken and
    /// `overwrite` is `false`. The registry is left unchanged.
    #[inline]
    pub fn add(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        driver: impl Driver,
        overwrite: bool,
    ) -> Result<(), PropertyError> {
        self.add_arc(name, Arc::new(driver), overwrite)
    }

    /// Adds a shared driver under `name`, see [`add`](Self::add).
    pub fn add_arc(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        driver: Arc<dyn Driver>,
        overwrite: bool,
    ) -> Result<(), PropertyError> {
        let name: Cow<'static, str> = name.into();
        match self.indices.get(&name) {
            Some(_) if !overwrite => Err(PropertyError::DriverRewriting {
                name: name.into_owned(),
                driver,
            }),
            Some(&index) => {
                log::debug!("driver `{name}` overwritten");
                self.drivers[index].1 = driver;
                Ok(())
            }
            None => {
                self.indices.insert(name.clone(), self.drivers.len());
                self.drivers.push((name, driver));
                Ok(())
            }
        }
    }

    /// Builds a [`FnDriver`] from `predicate` and `getter` and adds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_access::{PropertyAccessor, Value, driver::DriverRegistry};
    ///
    /// let mut drivers = DriverRegistry::new();
    /// drivers
    ///     .register(
    ///         "upper",
    ///         |source| matches!(source.to_value(), Value::String(_)),
    ///         |source, key| {
    ///             let text = source.to_value();
    ///             let text = text.as_str().unwrap_or_default().to_uppercase();
    ///             Ok(Value::from(format!("{key}:{text}")))
    ///         },
    ///         false,
    ///     )
    ///     .unwrap();
    ///
    /// let accessor = PropertyAccessor::new().with_drivers(&drivers);
    /// let source = Value::from_iter([("s", "abc")]);
    /// assert_eq!(accessor.get(&source, "s.k").unwrap(), Value::from("k:ABC"));
    /// ```
    pub fn register<P, G>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        predicate: P,
        getter: G,
        overwrite: bool,
    ) -> Result<(), PropertyError>
    where
        P: Fn(&dyn Property) -> bool + Send + Sync + 'static,
        G: Fn(&dyn Property, &str) -> Result<Value, PropertyError> + Send + Sync + 'static,
    {
        self.add(name, FnDriver::new(predicate, getter), overwrite)
    }

    /// Returns `true` if a driver is registered under `name`.
    #[inline]
    pub fn has(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Driver>> {
        self.indices.get(name).map(|&index| &self.drivers[index].1)
    }

    /// Returns the first driver that satisfies `source`, with its name.
    pub fn resolve(&self, source: &dyn Property) -> Option<(&str, &dyn Driver)> {
        self.drivers
            .iter()
            .find(|(_, driver)| driver.satisfies(source))
            .map(|(name, driver)| (&**name, &**driver))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.drivers.iter().map(|(name, _)| &**name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Registers every driver declared with `submit_driver!`, in name order.
    /// Names already present are skipped.
    ///
    /// Returns `false` without doing anything when the `auto_register`
    /// feature is disabled.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use prop_access::driver::{DriverRegistry, FnDriver};
    ///
    /// prop_access::submit_driver!("null", || {
    ///     std::sync::Arc::new(FnDriver::new(|_| true, |_, _| Ok(prop_access::Value::Null)))
    /// });
    ///
    /// let mut drivers = DriverRegistry::new();
    /// assert!(drivers.auto_register());
    /// assert!(drivers.has("null"));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            crate::driver::auto_register::register_all(self);
            true
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }
}

impl fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.drivers.iter().map(|(name, driver)| (name, driver)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::DriverRegistry;
    use crate::{Property, PropertyError, Value};

    fn constant(value: i64) -> impl Fn(&dyn Property, &str) -> Result<Value, PropertyError> {
        move |_: &dyn Property, _: &str| Ok(Value::Int(value))
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut drivers = DriverRegistry::new();
        drivers.register("a", |_| true, constant(1), false).unwrap();

        let err = drivers.register("a", |_| true, constant(2), false).unwrap_err();
        assert!(matches!(&err, PropertyError::DriverRewriting { name, .. } if name == "a"));
        assert!(err.to_string().contains("'a'"));

        let (_, driver) = drivers.resolve(&0_i32).unwrap();
        assert_eq!(driver.get(&0_i32, "k").unwrap(), Value::Int(1));
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut drivers = DriverRegistry::new();
        drivers.register("a", |_| true, constant(1), false).unwrap();
        drivers.register("b", |_| true, constant(2), false).unwrap();
        drivers.register("a", |_| true, constant(3), true).unwrap();

        assert_eq!(drivers.names().collect::<Vec<_>>(), ["a", "b"]);
        let (name, driver) = drivers.resolve(&0_i32).unwrap();
        assert_eq!(name, "a");
        assert_eq!(driver.get(&0_i32, "k").unwrap(), Value::Int(3));
    }

    #[test]
    fn first_satisfying_driver_wins() {
        let mut drivers = DriverRegistry::new();
        drivers.register("ints", |s| s.is::<i32>(), constant(1), false).unwrap();
        drivers.register("any", |_| true, constant(2), false).unwrap();

        assert_eq!(drivers.resolve(&0_i32).map(|(name, _)| name), Some("ints"));
        assert_eq!(drivers.resolve(&true).map(|(name, _)| name), Some("any"));
        assert!(drivers.has("any"));
        assert!(!drivers.has("none"));
        assert_eq!(drivers.len(), 2);
    }

    #[test]
    fn auto_register_without_feature() {
        let mut drivers = DriverRegistry::new();
        assert_eq!(drivers.auto_register(), cfg!(feature = "auto_register"));
    }
}

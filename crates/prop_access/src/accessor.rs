use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::access::{assign_path, resolve_path};
use crate::driver::DriverRegistry;
use crate::path::{PathTarget, PropertyPath, parse_value_path};
use crate::property::{FromValue, Property};
use crate::transform::{TransformError, TransformerList, TransformerPipeline};
use crate::{PropertyError, Value};

/// Reads and writes values at property paths.
///
/// The accessor itself is a cheap, copyable bundle of optional
/// collaborators: a [`DriverRegistry`] consulted on every read step and a
/// [`TransformerPipeline`] for `|name` suffixes and extra transformer
/// names. Both are borrowed, so one registry can serve many accessors.
///
/// # Examples
///
/// ```
/// use prop_access::{PropertyAccessor, Value};
///
/// let mut data = Value::from_iter([
///     ("user", Value::from_iter([("name", "Ann")])),
///     ("tags", Value::from(vec!["a", "b"])),
/// ]);
/// let accessor = PropertyAccessor::new();
///
/// assert_eq!(accessor.get(&data, "user.name").unwrap(), Value::from("Ann"));
/// assert_eq!(accessor.get(&data, ["tags", "1"]).unwrap(), Value::from("b"));
/// assert_eq!(accessor.get(&data, "value:5:int").unwrap(), Value::Int(5));
/// assert!(!accessor.can_get(&data, "user.age"));
///
/// accessor.set(&mut data, "user.age", 30).unwrap();
/// assert_eq!(accessor.get_as::<i64>(&data, "user.age").unwrap(), 30);
/// ```
#[derive(Clone, Copy, Default)]
pub struct PropertyAccessor<'r> {
    drivers: Option<&'r DriverRegistry>,
    transformers: Option<&'r dyn TransformerPipeline>,
}

impl<'r> PropertyAccessor<'r> {
    /// Creates an accessor with no drivers and no transformers.
    #[inline]
    pub const fn new() -> Self {
        Self {
            drivers: None,
            transformers: None,
        }
    }

    #[inline]
    pub fn with_drivers(mut self, drivers: &'r DriverRegistry) -> Self {
        self.drivers = Some(drivers);
        self
    }

    #[inline]
    pub fn with_transformers(mut self, transformers: &'r dyn TransformerPipeline) -> Self {
        self.transformers = Some(transformers);
        self
    }

    #[inline]
    pub fn drivers(&self) -> Option<&'r DriverRegistry> {
        self.drivers
    }

    #[inline]
    pub fn transformers(&self) -> Option<&'r dyn TransformerPipeline> {
        self.transformers
    }

    /// Reads the value at `path`.
    ///
    /// Textual paths may end in `|name` transformer suffixes and may be
    /// `value:` literals, in which case `source` is not consulted.
    ///
    /// # Errors
    ///
    /// See [`resolve_path`] for step failures. Transformer names with no
    /// configured pipeline fail with [`TransformError::Unknown`].
    #[inline]
    pub fn get(&self, source: &dyn Property, path: impl PropertyPath) -> Result<Value, PropertyError> {
        self.get_with(source, path, ())
    }

    /// Reads the value at `path`, then applies the inline transformers
    /// followed by `transformers`.
    pub fn get_with(
        &self,
        source: &dyn Property,
        path: impl PropertyPath,
        transformers: impl TransformerList,
    ) -> Result<Value, PropertyError> {
        let parsed = path.path_input().parse()?;

        let value = match parsed.target {
            PathTarget::Literal(literal) => parse_value_path(literal)?,
            PathTarget::Segments(segments) => resolve_path(self.drivers, source, &segments)?,
        };

        let mut names = parsed.transformers;
        names.extend(transformers.names());
        self.transform(value, &names)
    }

    /// Reads the value at `path` and converts it with [`FromValue`].
    #[inline]
    pub fn get_as<T: FromValue>(
        &self,
        source: &dyn Property,
        path: impl PropertyPath,
    ) -> Result<T, PropertyError> {
        T::from_value(self.get(source, path)?)
    }

    /// Returns `true` if [`get`](Self::get) would succeed.
    ///
    /// Drivers and getters run as for a real read.
    #[inline]
    pub fn can_get(&self, source: &dyn Property, path: impl PropertyPath) -> bool {
        self.get(source, path).is_ok()
    }

    /// Writes `value` at `path` inside `target`.
    ///
    /// Textual paths are only split on `.`: `|` and `value:` carry no
    /// meaning here.
    ///
    /// # Errors
    ///
    /// See [`assign_path`].
    pub fn set(
        &self,
        target: &mut dyn Property,
        path: impl PropertyPath,
        value: impl Into<Value>,
    ) -> Result<(), PropertyError> {
        let segments = path.path_input().to_segments()?;
        assign_path(target, &segments, value.into())
    }

    fn transform(&self, value: Value, names: &[&str]) -> Result<Value, PropertyError> {
        let Some(first) = names.first() else {
            return Ok(value);
        };
        match self.transformers {
            Some(pipeline) => Ok(pipeline.apply(value, names)?),
            None => Err(TransformError::Unknown(String::from(*first)).into()),
        }
    }
}

impl fmt::Debug for PropertyAccessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyAccessor")
            .field("drivers", &self.drivers.map(|d| d.names().collect::<Vec<_>>()))
            .field("transformers", &self.transformers.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use crate::driver::DriverRegistry;
    use crate::dynamic::DynamicObject;
    use crate::transform::{TransformError, TransformerRegistry};
    use crate::{PropertyAccessor, PropertyError, Value};

    fn first() -> TransformerRegistry {
        TransformerRegistry::new().with("first", |value| match value {
            Value::List(items) => Ok(items.into_iter().next().unwrap_or_default()),
            Value::String(s) => Ok(Value::String(s.chars().take(1).collect::<String>())),
            other => Ok(other),
        })
    }

    #[test]
    fn value_paths_ignore_the_source() {
        let accessor = PropertyAccessor::new();
        assert_eq!(accessor.get(&0_i32, "value:1").unwrap(), Value::from("1"));
        assert_eq!(accessor.get(&0_i32, "value:a.b").unwrap(), Value::from("a.b"));
        assert_eq!(
            accessor.get(&0_i32, "value:1:array").unwrap(),
            Value::from(vec!["1"])
        );
    }

    #[test]
    fn invalid_source_at_the_root() {
        let err = PropertyAccessor::new().get(&String::new(), "b").unwrap_err();
        assert_eq!(err.path().unwrap(), ["b"]);
        assert!(matches!(err, PropertyError::InvalidSource { value, .. } if value == Value::from("")));
    }

    #[test]
    fn empty_path() {
        let accessor = PropertyAccessor::new();
        let source = Value::map();
        assert!(matches!(accessor.get(&source, ""), Err(PropertyError::EmptyPath)));
        assert!(matches!(
            accessor.get(&source, [] as [&str; 0]),
            Err(PropertyError::EmptyPath)
        ));
        let mut target = Value::map();
        assert!(matches!(accessor.set(&mut target, "", 1), Err(PropertyError::EmptyPath)));
    }

    #[test]
    fn transformers_inline_then_extra() {
        let transformers = first();
        let accessor = PropertyAccessor::new().with_transformers(&transformers);
        let source = Value::from_iter([("a", Value::from(vec!["xy", "z"]))]);

        assert_eq!(accessor.get(&source, "a|first").unwrap(), Value::from("xy"));
        assert_eq!(
            accessor.get_with(&source, "a|first", "first").unwrap(),
            Value::from("x")
        );
        assert_eq!(
            accessor.get_with(&source, "value:abc", ["first"]).unwrap(),
            Value::from("a")
        );

        let err = accessor.get(&source, "a|nope").unwrap_err();
        assert!(matches!(
            err,
            PropertyError::Transform(TransformError::Unknown(ref name)) if name == "nope"
        ));
    }

    #[test]
    fn transformers_require_a_pipeline() {
        let source = Value::from_iter([("a", 1)]);
        let accessor = PropertyAccessor::new();
        assert!(matches!(
            accessor.get(&source, "a|first"),
            Err(PropertyError::Transform(TransformError::Unknown(_)))
        ));
        assert_eq!(accessor.get_with(&source, "a", ()).unwrap(), Value::Int(1));
    }

    #[test]
    fn drivers_run_first() {
        let mut drivers = DriverRegistry::new();
        drivers
            .register(
                "objects",
                |source| source.is::<DynamicObject>(),
                |_, key| Ok(Value::from(key)),
                false,
            )
            .unwrap();
        let accessor = PropertyAccessor::new().with_drivers(&drivers);

        let source = Value::from_iter([("o", DynamicObject::new().with_member("k", 1))]);
        assert_eq!(accessor.get(&source, "o.k").unwrap(), Value::from("k"));
        assert_eq!(accessor.get(&source, "o.zzz").unwrap(), Value::from("zzz"));

        // Writes never consult drivers.
        let mut target = source.clone();
        accessor.set(&mut target, "o.k", 2).unwrap();
        assert_eq!(PropertyAccessor::new().get(&target, "o.k").unwrap(), Value::Int(2));
    }

    #[test]
    fn get_as_is_strict() {
        let source = Value::from_iter([("a", 1)]);
        let accessor = PropertyAccessor::new();
        assert_eq!(accessor.get_as::<u8>(&source, "a").unwrap(), 1);
        assert!(matches!(
            accessor.get_as::<String>(&source, "a"),
            Err(PropertyError::Mismatch { .. })
        ));
    }

    #[test]
    fn set_ignores_pipes_and_literals() {
        let accessor = PropertyAccessor::new();
        let mut target = Value::map();
        accessor.set(&mut target, "a|b", 1).unwrap();
        accessor.set(&mut target, "value:1", 2).unwrap();

        let map = target.as_map().unwrap();
        assert_eq!(map.get("a|b"), Some(&Value::Int(1)));
        assert_eq!(map.get("value:1"), Some(&Value::Int(2)));
    }
}

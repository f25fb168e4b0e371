use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use prop_utils::hash::HashMap;

use crate::transform::{TransformError, TransformerPipeline};
use crate::{BoxError, Value};

/// A single named transformation.
pub type Transformer = Box<dyn Fn(Value) -> Result<Value, BoxError> + Send + Sync>;

/// A [`TransformerPipeline`] backed by named closures.
///
/// # Examples
///
/// ```
/// use prop_access::{PropertyAccessor, Value};
/// use prop_access::transform::TransformerRegistry;
///
/// let mut transformers = TransformerRegistry::new();
/// transformers.register("first", |value| match value {
///     Value::List(items) => Ok(items.into_iter().next().unwrap_or_default()),
///     other => Ok(other),
/// });
///
/// let source = Value::from_iter([("a", Value::from(vec![1, 2]))]);
/// let accessor = PropertyAccessor::new().with_transformers(&transformers);
///
/// assert_eq!(accessor.get(&source, "a|first").unwrap(), Value::Int(1));
/// assert_eq!(accessor.get_with(&source, "a", "first").unwrap(), Value::Int(1));
/// ```
#[derive(Default)]
pub struct TransformerRegistry {
    transformers: HashMap<Cow<'static, str>, Transformer>,
}

impl TransformerRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a transformer, replacing any previous one of that name.
    pub fn register<F>(&mut self, name: impl Into<Cow<'static, str>>, transformer: F) -> &mut Self
    where
        F: Fn(Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.transformers.insert(name.clone(), Box::new(transformer)).is_some() {
            log::debug!("transformer `{name}` replaced");
        }
        self
    }

    #[inline]
    pub fn with<F>(mut self, name: impl Into<Cow<'static, str>>, transformer: F) -> Self
    where
        F: Fn(Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.register(name, transformer);
        self
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.transformers.contains_key(name)
    }

    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<Transformer> {
        self.transformers.remove(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl TransformerPipeline for TransformerRegistry {
    fn apply(&self, mut value: Value, names: &[&str]) -> Result<Value, TransformError> {
        for &name in names {
            let transformer = self
                .transformers
                .get(name)
                .ok_or_else(|| TransformError::Unknown(String::from(name)))?;
            value = transformer(value).map_err(|error| TransformError::Failed {
                name: String::from(name),
                error,
            })?;
        }
        Ok(value)
    }
}

impl fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.transformers.keys().map(|k| &**k).collect();
        names.sort_unstable();
        f.debug_struct("TransformerRegistry")
            .field("transformers", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TransformerRegistry;
    use crate::transform::{TransformError, TransformerPipeline};
    use crate::{BoxError, Value};

    fn registry() -> TransformerRegistry {
        TransformerRegistry::new()
            .with("double", |value| match value {
                Value::Int(i) => Ok(Value::Int(i * 2)),
                other => Err(BoxError::from(alloc::format!("not an int: {}", other.kind_name()))),
            })
            .with("string", |value| match value {
                Value::Int(i) => Ok(Value::String(alloc::format!("{i}"))),
                other => Ok(other),
            })
    }

    #[test]
    fn applies_in_order() {
        let registry = registry();
        let value = registry
            .apply(Value::Int(2), &["double", "double", "string"])
            .unwrap();
        assert_eq!(value, Value::from("8"));

        let value = registry.apply(Value::Int(2), &["string", "double"]);
        assert!(matches!(value, Err(TransformError::Failed { name, .. }) if name == "double"));
    }

    #[test]
    fn unknown_name() {
        let err = registry().apply(Value::Int(1), &["double", "nope"]).unwrap_err();
        assert!(matches!(err, TransformError::Unknown(name) if name == "nope"));
    }

    #[test]
    fn replace_and_remove() {
        let mut registry = registry();
        registry.register("double", |value| Ok(value));
        assert_eq!(registry.apply(Value::Int(2), &["double"]).unwrap(), Value::Int(2));

        assert!(registry.remove("double").is_some());
        assert!(!registry.contains("double"));
        assert_eq!(registry.len(), 1);
    }
}

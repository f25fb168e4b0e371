use alloc::borrow::Cow;
use alloc::boxed::Box;

use crate::property::Property;
use crate::{PropertyError, Value};

/// A property with string-keyed entries.
///
/// Lists are maps too: their keys are decimal indices.
pub trait Map: Property {
    fn get(&self, key: &str) -> Option<&dyn Property>;

    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Property>;

    /// Inserts or replaces the entry at `key`.
    ///
    /// # Errors
    ///
    /// - [`PropertyError::Mismatch`] when `value` does not fit the entry type.
    /// - [`PropertyError::NonexistentKey`] when the map cannot hold `key`,
    ///   such as an index past the end of a list.
    fn insert(&mut self, key: &str, value: Value) -> Result<(), PropertyError>;

    fn len(&self) -> usize;

    fn iter(&self) -> Box<dyn Iterator<Item = (Cow<'_, str>, &dyn Property)> + '_>;

    #[inline]
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::driver::DriverRegistry;

/// A [`DriverRegistry`] shared between threads.
///
/// # Examples
///
/// ```
/// use prop_access::{PropertyAccessor, Value, driver::DriverRegistryArc};
///
/// let shared = DriverRegistryArc::default();
/// shared
///     .write()
///     .register("seven", |_| true, |_, _| Ok(Value::Int(7)), false)
///     .unwrap();
///
/// let drivers = shared.read();
/// let accessor = PropertyAccessor::new().with_drivers(&drivers);
/// assert_eq!(accessor.get(&1_i32, "any").unwrap(), Value::Int(7));
/// ```
#[derive(Clone, Default)]
pub struct DriverRegistryArc {
    /// The wrapped [`DriverRegistry`].
    pub internal: Arc<RwLock<DriverRegistry>>,
}

impl DriverRegistryArc {
    /// Takes a read lock on the underlying [`DriverRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, DriverRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`DriverRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, DriverRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<DriverRegistry> for DriverRegistryArc {
    #[inline]
    fn from(registry: DriverRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }
}

impl core::fmt::Debug for DriverRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.read().names()).finish()
    }
}

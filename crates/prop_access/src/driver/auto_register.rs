use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::driver::{Driver, DriverRegistry};

/// A driver declared with [`submit_driver!`](crate::submit_driver).
pub struct AutoDriver {
    name: &'static str,
    create: fn() -> Arc<dyn Driver>,
}

impl AutoDriver {
    #[inline]
    pub const fn new(name: &'static str, create: fn() -> Arc<dyn Driver>) -> Self {
        Self { name, create }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

inventory::collect!(AutoDriver);

pub(crate) fn register_all(registry: &mut DriverRegistry) {
    let mut declared: Vec<&AutoDriver> = inventory::iter::<AutoDriver>.into_iter().collect();
    declared.sort_by_key(|entry| entry.name);

    for entry in declared {
        if registry.has(entry.name) {
            continue;
        }
        // Names were checked just above, so this cannot be a rewrite.
        if registry.add_arc(entry.name, (entry.create)(), false).is_ok() {
            log::debug!("driver `{}` auto-registered", entry.name);
        }
    }
}

/// Declares a driver for [`DriverRegistry::auto_register`].
///
/// Takes the driver name and a non-capturing constructor closure.
#[macro_export]
macro_rules! submit_driver {
    ($name:expr, $create:expr $(,)?) => {
        $crate::__macro_exports::inventory::submit! {
            $crate::driver::AutoDriver::new($name, $create)
        }
    };
}

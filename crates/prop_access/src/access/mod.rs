//! The read and write engines behind [`PropertyAccessor`](crate::PropertyAccessor).
//!
//! ## Reading
//!
//! Each segment is one step. A step tries, in order:
//!
//! 1. The first satisfying driver of the configured registry.
//! 2. Objects: the getter `get{Key}`, then `is{Key}`, then the member
//!    itself. A member that exists but is not public is an error.
//! 3. Maps: the entry under the key.
//! 4. Anything else fails with [`PropertyError::InvalidSource`].
//!
//! ## Writing
//!
//! All segments but the last are descended by mutable reference, so the
//! final write lands in the caller's structure. The last segment goes
//! through the setter `set{Key}`, the member, or the map entry.
//!
//! [`PropertyError::InvalidSource`]: crate::PropertyError::InvalidSource

// -----------------------------------------------------------------------------
// Modules

mod mutate;
mod path_access;
mod resolve;

// -----------------------------------------------------------------------------
// Exports

pub use mutate::{assign_path, set_by_key};
pub use path_access::PropertyAccess;
pub use resolve::resolve_path;

use alloc::format;
use alloc::string::String;

/// The getter names tried for `key`, in order.
#[inline]
pub(crate) fn getter_names(key: &str) -> [String; 2] {
    let name = prop_utils::camelize(key);
    [format!("get{name}"), format!("is{name}")]
}

/// The setter name for `key`.
#[inline]
pub(crate) fn setter_name(key: &str) -> String {
    format!("set{}", prop_utils::camelize(key))
}

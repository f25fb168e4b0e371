//! The traits a type implements to be navigated by the accessor.
//!
//! - [`Property`]: every accessible value. Tells the accessor which
//!   [`PropertyKind`] it is dealing with at each step.
//! - [`Object`]: named members plus `getX`/`isX`/`setX` accessor methods.
//! - [`Map`]: string-keyed entries.
//! - [`FromValue`] / [`IntoValue`]: conversions to and from [`Value`](crate::Value).

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod kind;
mod map;
mod object;
mod property;

// -----------------------------------------------------------------------------
// Exports

pub use convert::{FromValue, IntoValue};
pub use kind::{PropertyKind, PropertyMut, PropertyRef};
pub use map::Map;
pub use object::Object;
pub use property::Property;

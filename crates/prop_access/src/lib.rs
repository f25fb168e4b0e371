#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate as `prop_access`, which must also
// resolve inside the crate itself and its doc tests.
extern crate self as prop_access;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

pub extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod impls;
mod value;

#[cfg(feature = "serde")]
mod serde;

pub mod access;
pub mod driver;
pub mod dynamic;
pub mod path;
pub mod property;
pub mod transform;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use accessor::PropertyAccessor;
pub use error::{BoxError, KeyKind, MemberError, PropertyError};
pub use property::{FromValue, IntoValue, Map, Object, Property, PropertyKind, PropertyMut, PropertyRef};
pub use value::{Value, ValueMap};

#[cfg(feature = "derive")]
pub use prop_access_derive as derive;

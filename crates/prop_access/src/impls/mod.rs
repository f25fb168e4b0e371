//! [`Property`](crate::Property) implementations for foreign types.

mod list;
mod maps;
mod option;
mod primitives;
mod value;

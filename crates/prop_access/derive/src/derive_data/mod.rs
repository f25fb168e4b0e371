//! Parsed form of a `#[derive(Property)]` input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod methods;
mod property_struct;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use methods::{AccessorMethod, MethodKind};
pub(crate) use property_struct::{MemberField, PropertyStruct};

//! Objects whose members and accessor methods are defined at runtime.

mod dynamic_object;

pub use dynamic_object::{DynamicObject, Getter, Setter, Visibility};

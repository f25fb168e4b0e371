use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::property::Property;
use crate::{MemberError, PropertyError, Value};

/// A property with named members and accessor methods.
///
/// Reading key `k` tries the getters `get{K}` then `is{K}` (with `K` the
/// [camelized](prop_utils::camelize) key) before the member itself.
/// Writing tries the setter `set{K}` first. Members that exist but are
/// not public are only reachable through those methods.
///
/// Implemented by `#[derive(Property)]` and by
/// [`DynamicObject`](crate::dynamic::DynamicObject).
pub trait Object: Property {
    /// The name of the object's type, for diagnostics.
    fn type_name(&self) -> &str;

    /// Returns `true` if a getter or setter with this exact name exists.
    fn has_method(&self, method: &str) -> bool;

    /// Invokes the zero-argument getter `method`, `None` if there is none.
    fn call_getter(&self, method: &str) -> Option<Value>;

    /// Invokes the one-argument setter `method`.
    ///
    /// Only called after [`has_method`](Self::has_method) returned `true`.
    fn call_setter(&mut self, method: &str, value: Value) -> Result<(), PropertyError>;

    /// Returns `true` if a member with this name exists, public or not.
    fn has_member(&self, name: &str) -> bool;

    fn is_member_public(&self, name: &str) -> bool;

    /// Names of all members, in declaration order.
    fn member_names(&self) -> Vec<&str>;

    fn member(&self, name: &str) -> Result<&dyn Property, MemberError>;

    fn member_mut(&mut self, name: &str) -> Result<&mut dyn Property, MemberError>;

    /// Writes a member, creating it when the object allows that.
    ///
    /// Returns [`MemberError::Undefined`] when the member does not exist
    /// and cannot be created.
    fn set_member(&mut self, name: &str, value: Value) -> Result<(), MemberError>;

    fn clone_object(&self) -> Box<dyn Object>;

    /// Structural equality: same type name and equal members.
    fn object_eq(&self, other: &dyn Object) -> bool {
        if self.type_name() != other.type_name() {
            return false;
        }
        let names = self.member_names();
        if names != other.member_names() {
            return false;
        }
        names.into_iter().all(|name| {
            match (self.member(name), other.member(name)) {
                (Ok(a), Ok(b)) => a.to_value() == b.to_value(),
                _ => false,
            }
        })
    }
}

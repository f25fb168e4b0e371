use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use prop_utils::hash::{FixedHashState, HashMap};

use crate::property::{FromValue, Object, Property, PropertyMut, PropertyRef};
use crate::{KeyKind, MemberError, PropertyError, Value};

/// A getter of a [`DynamicObject`], invoked as `getX` or `isX`.
pub type Getter = Arc<dyn Fn(&DynamicObject) -> Value + Send + Sync>;

/// A setter of a [`DynamicObject`], invoked as `setX`.
pub type Setter = Arc<dyn Fn(&mut DynamicObject, Value) -> Result<(), PropertyError> + Send + Sync>;

/// Visibility of a [`DynamicObject`] member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    /// Only reachable through accessor methods.
    Private,
}

/// An [`Object`] built at runtime.
///
/// Members keep their insertion order. Writing an unknown member adds it
/// as public unless the object is [sealed](DynamicObject::sealed).
///
/// # Examples
///
/// ```
/// use prop_access::{PropertyAccessor, Value, dynamic::DynamicObject};
///
/// let user = DynamicObject::named("User")
///     .with_member("name", "Ann")
///     .with_private_member("secret", 42)
///     .with_getter("getSecret", |this| this.field("secret").cloned().unwrap_or_default());
///
/// let accessor = PropertyAccessor::new();
/// assert_eq!(accessor.get(&user, "name").unwrap(), Value::from("Ann"));
/// assert_eq!(accessor.get(&user, "secret").unwrap(), Value::Int(42));
/// ```
#[derive(Clone)]
pub struct DynamicObject {
    type_name: Cow<'static, str>,
    members: Vec<Value>,
    member_names: Vec<Cow<'static, str>>,
    member_visibility: Vec<Visibility>,
    member_indices: HashMap<Cow<'static, str>, usize>,
    getters: HashMap<Cow<'static, str>, Getter>,
    setters: HashMap<Cow<'static, str>, Setter>,
    sealed: bool,
}

impl DynamicObject {
    /// Creates an empty object named `DynamicObject`.
    #[inline]
    pub const fn new() -> Self {
        Self::named_static("DynamicObject")
    }

    const fn named_static(type_name: &'static str) -> Self {
        Self {
            type_name: Cow::Borrowed(type_name),
            members: Vec::new(),
            member_names: Vec::new(),
            member_visibility: Vec::new(),
            member_indices: HashMap::with_hasher(FixedHashState),
            getters: HashMap::with_hasher(FixedHashState),
            setters: HashMap::with_hasher(FixedHashState),
            sealed: false,
        }
    }

    /// Creates an empty object with the given type name.
    pub fn named(type_name: impl Into<Cow<'static, str>>) -> Self {
        let mut object = Self::new();
        object.type_name = type_name.into();
        object
    }

    /// Inserts a member, overwriting the value and visibility of an
    /// existing one in place.
    pub fn insert_with_visibility(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
        visibility: Visibility,
    ) {
        let name: Cow<'static, str> = name.into();
        let value = value.into();
        if let Some(&index) = self.member_indices.get(&name) {
            self.members[index] = value;
            self.member_visibility[index] = visibility;
        } else {
            self.members.push(value);
            self.member_visibility.push(visibility);
            self.member_indices
                .insert(name.clone(), self.members.len() - 1);
            self.member_names.push(name);
        }
    }

    /// Inserts a public member.
    #[inline]
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) {
        self.insert_with_visibility(name, value, Visibility::Public);
    }

    #[inline]
    pub fn with_member(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    #[inline]
    pub fn with_private_member(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        self.insert_with_visibility(name, value, Visibility::Private);
        self
    }

    /// Registers a getter. `method` is the full dispatch name, e.g. `getFullName`.
    pub fn insert_getter<F>(&mut self, method: impl Into<Cow<'static, str>>, getter: F)
    where
        F: Fn(&DynamicObject) -> Value + Send + Sync + 'static,
    {
        self.getters.insert(method.into(), Arc::new(getter));
    }

    /// Registers a setter. `method` is the full dispatch name, e.g. `setName`.
    pub fn insert_setter<F>(&mut self, method: impl Into<Cow<'static, str>>, setter: F)
    where
        F: Fn(&mut DynamicObject, Value) -> Result<(), PropertyError> + Send + Sync + 'static,
    {
        self.setters.insert(method.into(), Arc::new(setter));
    }

    #[inline]
    pub fn with_getter<F>(mut self, method: impl Into<Cow<'static, str>>, getter: F) -> Self
    where
        F: Fn(&DynamicObject) -> Value + Send + Sync + 'static,
    {
        self.insert_getter(method, getter);
        self
    }

    #[inline]
    pub fn with_setter<F>(mut self, method: impl Into<Cow<'static, str>>, setter: F) -> Self
    where
        F: Fn(&mut DynamicObject, Value) -> Result<(), PropertyError> + Send + Sync + 'static,
    {
        self.insert_setter(method, setter);
        self
    }

    /// Forbids adding members through [`Object::set_member`].
    #[inline]
    pub fn sealed(mut self) -> Self {
        self.sealed = true;
        self
    }

    #[inline]
    pub fn set_sealed(&mut self, sealed: bool) {
        self.sealed = sealed;
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Returns a member regardless of its visibility.
    ///
    /// Meant for getters and setters that expose private state.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.index_of(name).map(|index| &self.members[index])
    }

    /// Returns a member mutably regardless of its visibility.
    #[inline]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.index_of(name).map(|index| &mut self.members[index])
    }

    #[inline]
    pub fn visibility(&self, name: &str) -> Option<Visibility> {
        self.index_of(name).map(|index| self.member_visibility[index])
    }

    /// Gets the index of the member with the given name.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_access::dynamic::DynamicObject;
    ///
    /// let object = DynamicObject::new().with_member("a", 1).with_member("b", 2);
    ///
    /// assert_eq!(object.index_of("a"), Some(0));
    /// assert_eq!(object.index_of("b"), Some(1));
    /// assert_eq!(object.index_of("c"), None);
    /// ```
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.member_indices.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for DynamicObject {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DynamicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Members<'a>(&'a DynamicObject);

        impl fmt::Debug for Members<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(self.0.member_names.iter().zip(self.0.members.iter()))
                    .finish()
            }
        }

        let mut getters: Vec<&str> = self.getters.keys().map(|k| &**k).collect();
        let mut setters: Vec<&str> = self.setters.keys().map(|k| &**k).collect();
        getters.sort_unstable();
        setters.sort_unstable();

        f.debug_struct("DynamicObject")
            .field("type_name", &self.type_name)
            .field("members", &Members(self))
            .field("getters", &getters)
            .field("setters", &setters)
            .field("sealed", &self.sealed)
            .finish()
    }
}

impl PartialEq for DynamicObject {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.object_eq(other)
    }
}

impl<N: Into<Cow<'static, str>>, V: Into<Value>> FromIterator<(N, V)> for DynamicObject {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(members: T) -> Self {
        let mut object = DynamicObject::new();
        for (name, value) in members {
            object.insert(name, value);
        }
        object
    }
}

// -----------------------------------------------------------------------------
// Property

impl Property for DynamicObject {
    #[inline]
    fn property_ref(&self) -> PropertyRef<'_> {
        PropertyRef::Object(self)
    }

    #[inline]
    fn property_mut(&mut self) -> PropertyMut<'_> {
        PropertyMut::Object(self)
    }

    #[inline]
    fn to_value(&self) -> Value {
        Value::Object(Box::new(self.clone()))
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Object(Box::new(self))
    }

    fn assign(&mut self, value: Value) -> Result<(), PropertyError> {
        *self = value.take_object::<Self>()?;
        Ok(())
    }
}

impl FromValue for DynamicObject {
    #[inline]
    fn from_value(value: Value) -> Result<Self, PropertyError> {
        value.take_object::<Self>()
    }
}

impl From<DynamicObject> for Value {
    #[inline]
    fn from(value: DynamicObject) -> Self {
        Value::Object(Box::new(value))
    }
}

impl Object for DynamicObject {
    #[inline]
    fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    fn has_method(&self, method: &str) -> bool {
        self.getters.contains_key(method) || self.setters.contains_key(method)
    }

    fn call_getter(&self, method: &str) -> Option<Value> {
        self.getters.get(method).map(|getter| getter(self))
    }

    fn call_setter(&mut self, method: &str, value: Value) -> Result<(), PropertyError> {
        // The setter needs `&mut self`, so release the map borrow first.
        let Some(setter) = self.setters.get(method).cloned() else {
            return Err(PropertyError::nonexistent_key(
                self.to_value(),
                method,
                KeyKind::Object,
            ));
        };
        setter(self, value)
    }

    #[inline]
    fn has_member(&self, name: &str) -> bool {
        self.member_indices.contains_key(name)
    }

    #[inline]
    fn is_member_public(&self, name: &str) -> bool {
        self.visibility(name) == Some(Visibility::Public)
    }

    fn member_names(&self) -> Vec<&str> {
        self.member_names.iter().map(|name| &**name).collect()
    }

    fn member(&self, name: &str) -> Result<&dyn Property, MemberError> {
        self.field(name)
            .map(|value| value as &dyn Property)
            .ok_or(MemberError::Undefined)
    }

    fn member_mut(&mut self, name: &str) -> Result<&mut dyn Property, MemberError> {
        self.field_mut(name)
            .map(|value| value as &mut dyn Property)
            .ok_or(MemberError::Undefined)
    }

    fn set_member(&mut self, name: &str, value: Value) -> Result<(), MemberError> {
        if let Some(slot) = self.field_mut(name) {
            *slot = value;
            return Ok(());
        }
        if self.sealed {
            return Err(MemberError::Undefined);
        }
        self.insert(Cow::Owned(name.into()), value);
        Ok(())
    }

    #[inline]
    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{DynamicObject, Visibility};
    use crate::{MemberError, Object, PropertyError, Value};

    #[test]
    fn insertion_order_and_overwrite() {
        let mut object = DynamicObject::new().with_member("a", 1).with_member("b", 2);
        object.insert_with_visibility("a", 3, Visibility::Private);

        assert_eq!(object.member_names(), ["a", "b"]);
        assert_eq!(object.field("a"), Some(&Value::Int(3)));
        assert!(!object.is_member_public("a"));
        assert!(object.is_member_public("b"));
    }

    #[test]
    fn set_member_creates_unless_sealed() {
        let mut open = DynamicObject::new();
        open.set_member("x", Value::Int(1)).unwrap();
        assert!(open.is_member_public("x"));

        let mut sealed = DynamicObject::new().sealed();
        assert!(matches!(
            sealed.set_member("x", Value::Int(1)),
            Err(MemberError::Undefined)
        ));
        assert!(sealed.is_empty());
    }

    #[test]
    fn methods() {
        let mut object = DynamicObject::new()
            .with_private_member("name", "a")
            .with_getter("getName", |this| this.field("name").cloned().unwrap_or_default())
            .with_setter("setName", |this, value| {
                let name = String::from(value.as_str().unwrap_or_default()) + "!";
                this.insert_with_visibility("name", name, Visibility::Private);
                Ok(())
            });

        assert!(object.has_method("getName"));
        assert!(!object.has_method("getAge"));
        assert_eq!(object.call_getter("getName"), Some(Value::from("a")));
        assert_eq!(object.call_getter("getAge"), None);

        object.call_setter("setName", Value::from("b")).unwrap();
        assert_eq!(object.field("name"), Some(&Value::from("b!")));

        assert!(matches!(
            object.call_setter("setAge", Value::Int(1)),
            Err(PropertyError::NonexistentKey { .. })
        ));
    }

    #[test]
    fn structural_equality() {
        let a: DynamicObject = [("x", 1), ("y", 2)].into_iter().collect();
        let b: DynamicObject = [("x", 1), ("y", 2)].into_iter().collect();
        let c: DynamicObject = [("x", 1), ("y", 3)].into_iter().collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, DynamicObject::named("Other").with_member("x", 1).with_member("y", 2));
    }
}

use core::fmt;

use crate::property::{Map, Object, Property};

/// The shape of a [`Property`] as seen by one access step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Named members and accessor methods, see [`Object`].
    Object,
    /// String-keyed entries, see [`Map`].
    Map,
    /// A leaf value that cannot be stepped into.
    Opaque,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Object => f.write_str("Object"),
            PropertyKind::Map => f.write_str("Map"),
            PropertyKind::Opaque => f.write_str("Opaque"),
        }
    }
}

/// An immutable view of a [`Property`] by kind.
#[derive(Debug, Clone, Copy)]
pub enum PropertyRef<'a> {
    Object(&'a dyn Object),
    Map(&'a dyn Map),
    Opaque(&'a dyn Property),
}

/// A mutable view of a [`Property`] by kind.
#[derive(Debug)]
pub enum PropertyMut<'a> {
    Object(&'a mut dyn Object),
    Map(&'a mut dyn Map),
    Opaque(&'a mut dyn Property),
}

impl PropertyRef<'_> {
    #[inline]
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyRef::Object(_) => PropertyKind::Object,
            PropertyRef::Map(_) => PropertyKind::Map,
            PropertyRef::Opaque(_) => PropertyKind::Opaque,
        }
    }
}

impl PropertyMut<'_> {
    #[inline]
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyMut::Object(_) => PropertyKind::Object,
            PropertyMut::Map(_) => PropertyKind::Map,
            PropertyMut::Opaque(_) => PropertyKind::Opaque,
        }
    }
}

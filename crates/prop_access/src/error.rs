//! Error types of property access.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::Value;
use crate::driver::Driver;
use crate::transform::TransformError;

/// A type-erased error, used for failures raised by user code
/// (member lookups, transformers).
pub type BoxError = Box<dyn core::error::Error + Send + Sync>;

// -----------------------------------------------------------------------------
// KeyKind

/// The kind of container a missing key was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Object,
    Map,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Object => f.write_str("Object"),
            KeyKind::Map => f.write_str("Map"),
        }
    }
}

/// Displays path segments joined by `.`.
struct Segments<'a>(&'a [String]);

impl fmt::Display for Segments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// PropertyError

/// An error raised by reading or writing a property path.
///
/// Every variant carries enough context to tell which step failed:
/// the offending value, the key or the path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PropertyError {
    /// The path had no segments, or its first segment was empty.
    #[error("Empty path was given")]
    EmptyPath,

    /// A read step reached a value that is neither an object nor a map,
    /// and no driver accepted it.
    ///
    /// `path` holds the segments that were still to be resolved,
    /// starting with the failing one.
    #[error("Invalid type of source `{}` for path '{}'", .value.kind_name(), Segments(.path))]
    InvalidSource { value: Value, path: Vec<String> },

    /// A write reached a value that cannot hold keys.
    ///
    /// Errors returned from `set` carry the original target and the
    /// full path; the narrowed failure is kept in `previous`.
    #[error("Invalid type of target `{}` for path '{}'", .target.kind_name(), Segments(.path))]
    InvalidTarget {
        target: Value,
        path: Vec<String>,
        #[source]
        previous: Option<Box<PropertyError>>,
    },

    /// An object or map does not contain the requested key.
    #[error("{kind} does not contain key '{key}'")]
    NonexistentKey {
        value: Value,
        key: String,
        kind: KeyKind,
    },

    /// The member exists on the object but is not public,
    /// and no accessor method covers it.
    #[error("The property '{property}' is not accessible in the given object `{}`", .object.kind_name())]
    NonAccessibleProperty { object: Value, property: String },

    /// A literal was requested from a path without the `value:` prefix.
    #[error("Path '{path}' is not a value path")]
    NonValuePath { path: String },

    /// A driver name is already taken and overwriting was not requested.
    ///
    /// `driver` is the rejected driver.
    #[error("Driver registry already has a driver named '{name}'")]
    DriverRewriting { name: String, driver: Arc<dyn Driver> },

    /// A value could not be converted into the requested type.
    #[error("Expected a value of type `{expected}`, found `{}`", .found.kind_name())]
    Mismatch {
        expected: &'static str,
        found: Value,
    },

    /// A transformer was unknown or failed.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// An error raised by user code during a member lookup.
    #[error(transparent)]
    Opaque(BoxError),
}

impl PropertyError {
    /// Creates a [`PropertyError::NonexistentKey`].
    #[inline]
    pub fn nonexistent_key(value: Value, key: impl Into<String>, kind: KeyKind) -> Self {
        Self::NonexistentKey {
            value,
            key: key.into(),
            kind,
        }
    }

    /// Creates a [`PropertyError::Mismatch`] naming `T` as the expected type.
    #[inline]
    pub fn mismatch<T: ?Sized>(found: Value) -> Self {
        Self::Mismatch {
            expected: core::any::type_name::<T>(),
            found,
        }
    }

    /// Returns the path carried by the error, if any.
    pub fn path(&self) -> Option<&[String]> {
        match self {
            Self::InvalidSource { path, .. } | Self::InvalidTarget { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Returns the failure an [`PropertyError::InvalidTarget`] was wrapped around.
    pub fn previous(&self) -> Option<&PropertyError> {
        match self {
            Self::InvalidTarget { previous, .. } => previous.as_deref(),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// MemberError

/// An error returned by [`Object`](crate::Object) member lookups.
///
/// The accessor maps [`MemberError::Undefined`] to a missing key and
/// passes everything else through.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MemberError {
    /// The object has no member with this name.
    #[error("undefined member")]
    Undefined,

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Other(BoxError),
}

impl From<MemberError> for PropertyError {
    /// Unwraps [`MemberError::Property`] and [`MemberError::Other`] as they are.
    ///
    /// `Undefined` carries no context, so it becomes a [`PropertyError::Opaque`].
    /// Callers that know the object and key report it as a missing key instead.
    fn from(err: MemberError) -> Self {
        match err {
            MemberError::Property(err) => err,
            MemberError::Other(err) => PropertyError::Opaque(err),
            MemberError::Undefined => PropertyError::Opaque(Box::new(MemberError::Undefined)),
        }
    }
}

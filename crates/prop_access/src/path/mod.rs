//! Path syntax.
//!
//! A textual path is `seg.seg.seg`, optionally followed by `|name|name`
//! transformer names. A path starting with [`VALUE_PATH_PREFIX`] is a
//! literal instead: `value:<text>` or `value:<text>:<type>`.
//!
//! Paths given as segment sequences are taken verbatim: no `.` splitting,
//! no `|` parsing and no literal detection.

// -----------------------------------------------------------------------------
// Modules

mod property_path;
mod value_path;

// -----------------------------------------------------------------------------
// Exports

pub use property_path::{ParsedPath, PathInput, PathTarget, PropertyPath};
pub use value_path::{LiteralType, VALUE_PATH_PREFIX, is_value_path, parse_value_path};

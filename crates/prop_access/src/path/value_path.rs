use alloc::string::String;
use alloc::vec;

use crate::{PropertyError, Value};

/// The prefix marking a path as a literal.
pub const VALUE_PATH_PREFIX: &str = "value:";

/// The type tag of a literal path, the part after the second `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralType {
    Bool,
    Int,
    Float,
    /// A one-element list holding the literal text.
    Array,
    String,
}

impl LiteralType {
    /// Parses a type tag, `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bool" => Some(Self::Bool),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "array" => Some(Self::Array),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// Converts the literal text to this type.
    ///
    /// - `bool`: `""` and `"0"` are false, everything else is true.
    /// - `int`, `float`: the leading numeric prefix, `0` if there is none.
    /// - `array`: the text wrapped in a list.
    pub fn coerce(self, text: &str) -> Value {
        match self {
            LiteralType::Bool => Value::Bool(!(text.is_empty() || text == "0")),
            LiteralType::Int => Value::Int(parse_int(text)),
            LiteralType::Float => Value::Float(parse_float(text)),
            LiteralType::Array => Value::List(vec![Value::String(String::from(text))]),
            LiteralType::String => Value::String(String::from(text)),
        }
    }
}

/// Returns `true` if `path` is a literal path.
///
/// # Examples
///
/// ```
/// use prop_access::path::is_value_path;
///
/// assert!(is_value_path("value:1"));
/// assert!(!is_value_path("a.b"));
/// assert!(!is_value_path("Value:1"));
/// ```
#[inline]
pub fn is_value_path(path: &str) -> bool {
    path.starts_with(VALUE_PATH_PREFIX)
}

/// Parses a literal path into a [`Value`].
///
/// The literal text ends at the next `:`. A third part, when present,
/// is a [`LiteralType`] tag. Unknown tags leave the text as a string.
///
/// # Errors
///
/// [`PropertyError::NonValuePath`] when `path` lacks the `value:` prefix.
///
/// # Examples
///
/// ```
/// use prop_access::{Value, path::parse_value_path};
///
/// assert_eq!(parse_value_path("value:1").unwrap(), Value::from("1"));
/// assert_eq!(parse_value_path("value:1:int").unwrap(), Value::Int(1));
/// assert_eq!(parse_value_path("value:1.5:float").unwrap(), Value::Float(1.5));
/// assert_eq!(parse_value_path("value:0:bool").unwrap(), Value::Bool(false));
/// assert!(parse_value_path("1").is_err());
/// ```
pub fn parse_value_path(path: &str) -> Result<Value, PropertyError> {
    let Some(rest) = path.strip_prefix(VALUE_PATH_PREFIX) else {
        return Err(PropertyError::NonValuePath {
            path: String::from(path),
        });
    };

    let mut parts = rest.split(':');
    let text = parts.next().unwrap_or_default();

    let Some(tag) = parts.next() else {
        return Ok(Value::String(String::from(text)));
    };

    match LiteralType::from_tag(tag) {
        Some(ty) => Ok(ty.coerce(text)),
        None => {
            log::warn!("unknown literal type `{tag}` in path `{path}`, keeping it as a string");
            Ok(Value::String(String::from(text)))
        }
    }
}

// -----------------------------------------------------------------------------
// Numeric prefixes

/// Returns the longest leading part of `text` that reads as a decimal number,
/// after skipping leading whitespace.
fn numeric_prefix(text: &str) -> &str {
    let text = text.trim_start_matches([' ', '\t', '\n', '\r', '\x0B', '\x0C']);
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac = end + 1;
        while bytes.get(frac).is_some_and(u8::is_ascii_digit) {
            frac += 1;
        }
        if has_digits || frac > end + 1 {
            has_digits = true;
            end = frac;
        }
    }

    if !has_digits {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_start = exp;
        while bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            exp += 1;
        }
        if exp > exp_start {
            end = exp;
        }
    }

    &text[..end]
}

fn parse_int(text: &str) -> i64 {
    let prefix = numeric_prefix(text);
    if let Ok(int) = prefix.parse::<i64>() {
        return int;
    }
    // Fractions and exponents truncate toward zero, out of range saturates.
    prefix.parse::<f64>().map_or(0, |float| float as i64)
}

fn parse_float(text: &str) -> f64 {
    numeric_prefix(text).parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{numeric_prefix, parse_value_path};
    use crate::{PropertyError, Value};

    #[test]
    fn untyped_literals_are_strings() {
        assert_eq!(parse_value_path("value:").unwrap(), Value::from(""));
        assert_eq!(parse_value_path("value:a.b").unwrap(), Value::from("a.b"));
        assert_eq!(parse_value_path("value:1:string").unwrap(), Value::from("1"));
        assert_eq!(parse_value_path("value:1:bogus").unwrap(), Value::from("1"));
    }

    #[test]
    fn typed_literals() {
        assert_eq!(parse_value_path("value:1:bool").unwrap(), Value::Bool(true));
        assert_eq!(parse_value_path("value::bool").unwrap(), Value::Bool(false));
        assert_eq!(parse_value_path("value:no:bool").unwrap(), Value::Bool(true));
        assert_eq!(parse_value_path("value:12abc:int").unwrap(), Value::Int(12));
        assert_eq!(parse_value_path("value:1.9:int").unwrap(), Value::Int(1));
        assert_eq!(parse_value_path("value:abc:int").unwrap(), Value::Int(0));
        assert_eq!(parse_value_path("value:-2.5:float").unwrap(), Value::Float(-2.5));
        assert_eq!(parse_value_path("value:x:float").unwrap(), Value::Float(0.0));
        assert_eq!(
            parse_value_path("value:1:array").unwrap(),
            Value::List(vec![Value::from("1")])
        );
    }

    #[test]
    fn non_value_path() {
        let err = parse_value_path("a.b").unwrap_err();
        assert!(matches!(err, PropertyError::NonValuePath { path } if path == "a.b"));
    }

    #[test]
    fn numeric_prefixes() {
        assert_eq!(numeric_prefix("  42 apples"), "42");
        assert_eq!(numeric_prefix("+1.5e3x"), "+1.5e3");
        assert_eq!(numeric_prefix("1e"), "1");
        assert_eq!(numeric_prefix(".5"), ".5");
        assert_eq!(numeric_prefix("-"), "");
        assert_eq!(numeric_prefix("."), "");
    }
}

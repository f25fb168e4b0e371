//! Identifier casing helpers.
//!
//! The accessor synthesizes method names such as `getFullName` from a path
//! segment like `full_name`. Both the runtime and the derive macro go through
//! these functions, so the names they produce always agree.

use alloc::string::String;

#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | ' ')
}

fn convert(name: &str, upper_first: bool) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = upper_first;
    let mut first = true;

    for c in name.chars() {
        if is_separator(c) {
            // Separators never produce output, but the next word is capitalized
            // unless nothing has been written yet in lower-camel mode.
            upper_next = upper_first || !first;
            continue;
        }
        if first && !upper_first {
            out.extend(c.to_lowercase());
        } else if upper_next {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        first = false;
        upper_next = false;
    }

    out
}

/// Converts `snake_case`, `kebab-case` or `camelCase` names to `UpperCamel`.
///
/// Characters inside a word are kept as they are.
///
/// # Examples
///
/// ```
/// use prop_utils::camelize;
///
/// assert_eq!(camelize("full_name"), "FullName");
/// assert_eq!(camelize("fullName"), "FullName");
/// assert_eq!(camelize("a"), "A");
/// ```
#[inline]
pub fn camelize(name: &str) -> String {
    convert(name, true)
}

/// Converts `snake_case`, `kebab-case` or `UpperCamel` names to `lowerCamel`.
///
/// # Examples
///
/// ```
/// use prop_utils::lower_camelize;
///
/// assert_eq!(lower_camelize("get_full_name"), "getFullName");
/// assert_eq!(lower_camelize("IsActive"), "isActive");
/// ```
#[inline]
pub fn lower_camelize(name: &str) -> String {
    convert(name, false)
}

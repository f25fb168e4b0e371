use alloc::string::String;
use alloc::vec::Vec;

use crate::PropertyError;
use crate::path::is_value_path;

/// A borrowed path, either textual or pre-split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathInput<'a> {
    /// `a.b.c`, possibly with `|transformer` suffixes or a `value:` literal.
    Text(&'a str),
    Segments(&'a [&'a str]),
    OwnedSegments(&'a [String]),
}

/// What a read path points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTarget<'a> {
    /// A `value:` literal, kept whole.
    Literal(&'a str),
    Segments(Vec<&'a str>),
}

/// A read path split into its target and inline transformer names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    pub target: PathTarget<'a>,
    pub transformers: Vec<&'a str>,
}

/// A falsy first segment (`""` or `"0"`) makes the path empty.
fn check_segments(segments: Vec<&str>) -> Result<Vec<&str>, PropertyError> {
    if segments.first().is_none_or(|&first| first.is_empty() || first == "0") {
        return Err(PropertyError::EmptyPath);
    }
    Ok(segments)
}

impl<'a> PathInput<'a> {
    /// Splits the path into segments, ignoring `|` and `value:`.
    ///
    /// # Errors
    ///
    /// [`PropertyError::EmptyPath`] when there are no segments or the
    /// first one is `""` or `"0"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_access::path::PathInput;
    ///
    /// assert_eq!(PathInput::Text("a.b").to_segments().unwrap(), ["a", "b"]);
    /// assert_eq!(PathInput::Segments(&["a.b"]).to_segments().unwrap(), ["a.b"]);
    /// assert!(PathInput::Text("").to_segments().is_err());
    /// ```
    pub fn to_segments(&self) -> Result<Vec<&'a str>, PropertyError> {
        let segments: Vec<&'a str> = match *self {
            PathInput::Text(text) => text.split('.').collect(),
            PathInput::Segments(segments) => segments.to_vec(),
            PathInput::OwnedSegments(segments) => segments.iter().map(String::as_str).collect(),
        };
        check_segments(segments)
    }

    /// Parses the path for reading.
    ///
    /// Textual paths are split on `|` first: the head is the real path and
    /// the rest are transformer names. A head starting with `value:` is a
    /// literal and is not split on `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_access::path::{PathInput, PathTarget};
    ///
    /// let parsed = PathInput::Text("a.b|first|upper").parse().unwrap();
    /// assert_eq!(parsed.target, PathTarget::Segments(vec!["a", "b"]));
    /// assert_eq!(parsed.transformers, ["first", "upper"]);
    ///
    /// let parsed = PathInput::Text("value:1.5:float").parse().unwrap();
    /// assert_eq!(parsed.target, PathTarget::Literal("value:1.5:float"));
    /// ```
    pub fn parse(&self) -> Result<ParsedPath<'a>, PropertyError> {
        let PathInput::Text(text) = *self else {
            return Ok(ParsedPath {
                target: PathTarget::Segments(self.to_segments()?),
                transformers: Vec::new(),
            });
        };

        let mut parts = text.split('|');
        let head = parts.next().unwrap_or_default();
        let transformers = parts.collect();

        let target = if is_value_path(head) {
            PathTarget::Literal(head)
        } else {
            PathTarget::Segments(check_segments(head.split('.').collect())?)
        };

        Ok(ParsedPath {
            target,
            transformers,
        })
    }

    /// Returns `true` for a textual path starting with `value:`.
    #[inline]
    pub fn is_value_path(&self) -> bool {
        matches!(self, PathInput::Text(text) if is_value_path(text))
    }
}

// -----------------------------------------------------------------------------
// PropertyPath

/// Anything usable as a property path.
///
/// Implemented for strings (parsed) and for sequences of segments
/// (taken verbatim).
///
/// # Examples
///
/// ```
/// use prop_access::path::{PathInput, PropertyPath};
///
/// assert_eq!("a.b".path_input(), PathInput::Text("a.b"));
/// assert_eq!(["a", "b"].path_input(), PathInput::Segments(&["a", "b"]));
/// ```
pub trait PropertyPath {
    fn path_input(&self) -> PathInput<'_>;
}

impl PropertyPath for str {
    #[inline]
    fn path_input(&self) -> PathInput<'_> {
        PathInput::Text(self)
    }
}

impl PropertyPath for String {
    #[inline]
    fn path_input(&self) -> PathInput<'_> {
        PathInput::Text(self)
    }
}

impl<'s> PropertyPath for [&'s str] {
    #[inline]
    fn path_input(&self) -> PathInput<'_> {
        PathInput::Segments(self)
    }
}

impl<'s, const N: usize> PropertyPath for [&'s str; N] {
    #[inline]
    fn path_input(&self) -> PathInput<'_> {
        PathInput::Segments(self)
    }
}

impl<'s> PropertyPath for Vec<&'s str> {
    #[inline]
    fn path_input(&self) -> PathInput<'_> {
        PathInput::Segments(self)
    }
}

impl PropertyPath for [String] {
    #[inline]
    fn path_input(&self) -> PathInput<'_> {
        PathInput::OwnedSegments(self)
    }
}

impl<const N: usize> PropertyPath for [String; N] {
    #[inline]
    fn path_input(&self) -> PathInput<'_> {
        PathInput::OwnedSegments(self)
    }
}

impl PropertyPath for Vec<String> {
    #[inline]
    fn path_input(&self) -> PathInput<'_> {
        PathInput::OwnedSegments(self)
    }
}

impl<T: PropertyPath + ?Sized> PropertyPath for &T {
    #[inline]
    fn path_input(&self) -> PathInput<'_> {
        (**self).path_input()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::{PathInput, PathTarget, PropertyPath};
    use crate::PropertyError;

    #[test]
    fn empty_paths() {
        for path in ["", ".a", "|first"] {
            assert!(matches!(
                PathInput::Text(path).parse(),
                Err(PropertyError::EmptyPath)
            ));
        }
        assert!(matches!(
            PathInput::Segments(&[]).to_segments(),
            Err(PropertyError::EmptyPath)
        ));
        assert!(matches!(
            PathInput::Segments(&["", "a"]).to_segments(),
            Err(PropertyError::EmptyPath)
        ));
    }

    #[test]
    fn zero_first_segment_is_empty() {
        for path in ["0", "0.a", "0|first"] {
            assert!(matches!(
                PathInput::Text(path).parse(),
                Err(PropertyError::EmptyPath)
            ));
        }
        assert!(matches!(
            PathInput::Segments(&["0"]).to_segments(),
            Err(PropertyError::EmptyPath)
        ));

        assert_eq!(PathInput::Text("a.0").to_segments().unwrap(), ["a", "0"]);
        assert_eq!(PathInput::Text("00").to_segments().unwrap(), ["00"]);
    }

    #[test]
    fn later_empty_segments_are_kept() {
        assert_eq!(PathInput::Text("a..b").to_segments().unwrap(), ["a", "", "b"]);
        assert_eq!(PathInput::Text("a.").to_segments().unwrap(), ["a", ""]);
    }

    #[test]
    fn sequences_are_verbatim() {
        let path = vec![String::from("a|first"), String::from("value:1")];
        let parsed = path.path_input().parse().unwrap();
        assert_eq!(parsed.target, PathTarget::Segments(vec!["a|first", "value:1"]));
        assert!(parsed.transformers.is_empty());
        assert!(!path.path_input().is_value_path());
    }

    #[test]
    fn writes_ignore_pipes_and_literals() {
        assert_eq!(PathInput::Text("a|b").to_segments().unwrap(), ["a|b"]);
        assert_eq!(PathInput::Text("value:1").to_segments().unwrap(), ["value:1"]);
    }
}

use alloc::string::String;
use alloc::vec::Vec;

/// Transformer names passed next to a path.
///
/// `()` means none.
pub trait TransformerList {
    fn names(&self) -> Vec<&str>;
}

impl TransformerList for () {
    #[inline]
    fn names(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl TransformerList for str {
    #[inline]
    fn names(&self) -> Vec<&str> {
        alloc::vec![self]
    }
}

impl TransformerList for String {
    #[inline]
    fn names(&self) -> Vec<&str> {
        alloc::vec![self.as_str()]
    }
}

impl<'s> TransformerList for [&'s str] {
    #[inline]
    fn names(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl<'s, const N: usize> TransformerList for [&'s str; N] {
    #[inline]
    fn names(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl<'s> TransformerList for Vec<&'s str> {
    #[inline]
    fn names(&self) -> Vec<&str> {
        self.clone()
    }
}

impl TransformerList for [String] {
    #[inline]
    fn names(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl TransformerList for Vec<String> {
    #[inline]
    fn names(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl<T: TransformerList + ?Sized> TransformerList for &T {
    #[inline]
    fn names(&self) -> Vec<&str> {
        (**self).names()
    }
}

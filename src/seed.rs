//! Seeds a list can be built from.
//!
//! Construction is atomic: the whole seed is validated before any list is
//! built, so a bad item never leaves a half-filled list behind.

use crate::error::Result;
use crate::validate::IntoElement;

/// A value that can seed a new list.
///
/// # Examples
///
/// ```
/// use char_list::{ArrayCharList, CharList};
///
/// let from_str = ArrayCharList::from_seed("abc").unwrap();
/// let from_items = ArrayCharList::from_seed(vec!["a", "b", "c"]).unwrap();
/// assert_eq!(from_str, from_items);
///
/// assert!(ArrayCharList::from_seed(["aa", "b"]).is_err());
/// ```
pub trait Seed {
    /// Validates every item and returns the elements in order.
    fn into_elements(self) -> Result<Vec<char>>;
}

impl Seed for &str {
    fn into_elements(self) -> Result<Vec<char>> {
        Ok(self.chars().collect())
    }
}

impl Seed for String {
    fn into_elements(self) -> Result<Vec<char>> {
        self.as_str().into_elements()
    }
}

impl Seed for &[char] {
    fn into_elements(self) -> Result<Vec<char>> {
        Ok(self.to_vec())
    }
}

impl Seed for Vec<char> {
    fn into_elements(self) -> Result<Vec<char>> {
        Ok(self)
    }
}

impl Seed for &[&str] {
    fn into_elements(self) -> Result<Vec<char>> {
        self.iter().map(|item| item.into_element()).collect()
    }
}

impl Seed for Vec<&str> {
    fn into_elements(self) -> Result<Vec<char>> {
        self.as_slice().into_elements()
    }
}

impl Seed for &[String] {
    fn into_elements(self) -> Result<Vec<char>> {
        self.iter().map(IntoElement::into_element).collect()
    }
}

impl Seed for Vec<String> {
    fn into_elements(self) -> Result<Vec<char>> {
        self.into_iter().map(IntoElement::into_element).collect()
    }
}

impl<const N: usize> Seed for [&str; N] {
    fn into_elements(self) -> Result<Vec<char>> {
        self[..].into_elements()
    }
}

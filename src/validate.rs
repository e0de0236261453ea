//! Validation shared by both list types.
//!
//! Elements reach a list through [`IntoElement`]. A `char` is valid by
//! construction, while string input is checked to hold exactly one
//! character. Index checks come in two flavors: *access* (`0..len`) for
//! reading or removing, and *insertion* (`0..=len`) for inserting.
//!
//! Every check here runs before a list is mutated.

use crate::error::{Bound, CharListError, Operation, Result};

/// Conversion into a single list element.
///
/// # Examples
///
/// ```
/// use char_list::IntoElement;
///
/// assert_eq!('a'.into_element(), Ok('a'));
/// assert_eq!("b".into_element(), Ok('b'));
/// assert!("bc".into_element().is_err());
/// assert!("".into_element().is_err());
/// ```
pub trait IntoElement {
    /// Returns the character, or [`CharListError::InvalidElement`] if `self`
    /// is not exactly one character.
    fn into_element(self) -> Result<char>;
}

impl IntoElement for char {
    #[inline]
    fn into_element(self) -> Result<char> {
        Ok(self)
    }
}

impl IntoElement for &char {
    #[inline]
    fn into_element(self) -> Result<char> {
        Ok(*self)
    }
}

impl IntoElement for &str {
    fn into_element(self) -> Result<char> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CharListError::InvalidElement(self.to_owned())),
        }
    }
}

impl IntoElement for &String {
    #[inline]
    fn into_element(self) -> Result<char> {
        self.as_str().into_element()
    }
}

impl IntoElement for String {
    #[inline]
    fn into_element(self) -> Result<char> {
        self.as_str().into_element()
    }
}

/// Checks `index` against the access range `0..len`.
///
/// An empty list reports [`CharListError::EmptyContainer`] for `operation`
/// instead of a plain out-of-range error.
pub(crate) fn check_access(index: usize, len: usize, operation: Operation) -> Result<()> {
    if len == 0 {
        return Err(CharListError::EmptyContainer { operation });
    }
    if index >= len {
        return Err(CharListError::IndexOutOfRange {
            index,
            len,
            bound: Bound::Access,
        });
    }
    Ok(())
}

/// Checks `index` against the insertion range `0..=len`.
pub(crate) fn check_insertion(index: usize, len: usize) -> Result<()> {
    if index > len {
        return Err(CharListError::IndexOutOfRange {
            index,
            len,
            bound: Bound::Insertion,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_from_str() {
        assert_eq!("x".into_element(), Ok('x'));
        assert_eq!("é".into_element(), Ok('é'));
        assert_eq!(
            "xy".into_element(),
            Err(CharListError::InvalidElement("xy".to_owned()))
        );
        assert_eq!(
            "".into_element(),
            Err(CharListError::InvalidElement(String::new()))
        );
        assert_eq!(String::from("z").into_element(), Ok('z'));
    }

    #[test]
    fn access_bounds() {
        assert!(check_access(0, 1, Operation::Get).is_ok());
        assert!(check_access(2, 3, Operation::Get).is_ok());
        assert_eq!(
            check_access(0, 0, Operation::Get),
            Err(CharListError::EmptyContainer {
                operation: Operation::Get
            })
        );
        assert_eq!(
            check_access(3, 3, Operation::Delete),
            Err(CharListError::IndexOutOfRange {
                index: 3,
                len: 3,
                bound: Bound::Access
            })
        );
    }

    #[test]
    fn insertion_bounds() {
        assert!(check_insertion(0, 0).is_ok());
        assert!(check_insertion(3, 3).is_ok());
        assert_eq!(
            check_insertion(5, 2),
            Err(CharListError::IndexOutOfRange {
                index: 5,
                len: 2,
                bound: Bound::Insertion
            })
        );
    }
}

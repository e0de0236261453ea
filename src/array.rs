use std::fmt::{self, Debug, Display, Formatter};
use std::iter::{Copied, FromIterator};
use std::slice;

#[cfg(feature = "logging")]
use tracing::trace;

use crate::contract::{fmt_named_list, CharList};
use crate::error::{Operation, Result};
use crate::validate::{check_access, check_insertion, IntoElement};

/// An array-backed list of characters.
///
/// Elements are kept contiguously in a `Vec<char>`, in order.
///
/// # Complexity
///
/// - [`get`] and [`append`]: *O*(1) (append is amortized);
/// - [`insert`] and [`delete`]: *O*(*n*), elements after the index shift.
///
/// # Examples
///
/// ```
/// use char_list::{ArrayCharList, CharList};
///
/// let mut list = ArrayCharList::from_seed("ad").unwrap();
/// list.insert(1, 'c').unwrap();
/// assert_eq!(list, "acd");
/// assert_eq!(list.to_string(), "ArrayCharList(['a', 'c', 'd'])");
/// ```
///
/// [`get`]: CharList::get
/// [`append`]: CharList::append
/// [`insert`]: CharList::insert
/// [`delete`]: CharList::delete
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ArrayCharList {
    data: Vec<char>,
}

impl ArrayCharList {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.data
    }

    /// Provides a forward iterator over the elements.
    #[inline]
    pub fn iter(&self) -> Copied<slice::Iter<'_, char>> {
        self.data.iter().copied()
    }
}

impl CharList for ArrayCharList {
    #[inline]
    fn length(&self) -> usize {
        self.data.len()
    }

    fn append<E: IntoElement>(&mut self, element: E) -> Result<()> {
        let element = element.into_element()?;
        self.data.push(element);
        Ok(())
    }

    fn insert<E: IntoElement>(&mut self, index: usize, element: E) -> Result<()> {
        let element = element.into_element()?;
        check_insertion(index, self.data.len())?;
        self.data.insert(index, element);
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<char> {
        check_access(index, self.data.len(), Operation::Delete)?;
        Ok(self.data.remove(index))
    }

    fn delete_all<E: IntoElement>(&mut self, element: E) -> Result<()> {
        let element = element.into_element()?;
        #[cfg(feature = "logging")]
        let before = self.data.len();
        self.data.retain(|&c| c != element);
        #[cfg(feature = "logging")]
        trace!(
            ?element,
            removed = before - self.data.len(),
            "deleted all occurrences"
        );
        Ok(())
    }

    fn get(&self, index: usize) -> Result<char> {
        check_access(index, self.data.len(), Operation::Get)?;
        Ok(self.data[index])
    }

    fn reverse(&mut self) {
        self.data.reverse();
    }

    fn find_first<E: IntoElement>(&self, element: E) -> Result<Option<usize>> {
        let element = element.into_element()?;
        Ok(self.data.iter().position(|&c| c == element))
    }

    fn find_last<E: IntoElement>(&self, element: E) -> Result<Option<usize>> {
        let element = element.into_element()?;
        Ok(self.data.iter().rposition(|&c| c == element))
    }

    fn clear(&mut self) {
        #[cfg(feature = "logging")]
        trace!(len = self.data.len(), "clearing array list");
        self.data.clear();
    }

    fn extend_from(&mut self, other: &Self) {
        self.data.extend_from_slice(&other.data);
    }

    fn to_chars(&self) -> Vec<char> {
        self.data.clone()
    }
}

impl Debug for ArrayCharList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl Display for ArrayCharList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_named_list(f, "ArrayCharList", self.iter())
    }
}

impl PartialEq<str> for ArrayCharList {
    fn eq(&self, other: &str) -> bool {
        self.iter().eq(other.chars())
    }
}

impl PartialEq<&str> for ArrayCharList {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl FromIterator<char> for ArrayCharList {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for ArrayCharList {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl IntoIterator for ArrayCharList {
    type Item = char;
    type IntoIter = std::vec::IntoIter<char>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArrayCharList {
    type Item = char;
    type IntoIter = Copied<slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayCharList;
    use crate::contract::CharList;
    use crate::error::{Bound, CharListError, Operation};

    #[test]
    fn list_create() {
        let mut list = ArrayCharList::new();
        assert!(list.is_empty());
        list.append('a').unwrap();
        assert!(!list.is_empty());
        assert_eq!(list.delete(0), Ok('a'));
        assert!(list.is_empty());
    }

    #[test]
    fn list_insert_and_delete() {
        let mut list = ArrayCharList::from_seed("abcd").unwrap();
        list.insert(2, 'x').unwrap();
        assert_eq!(list, "abxcd");
        assert_eq!(list.delete(4), Ok('d'));
        assert_eq!(list.delete(0), Ok('a'));
        assert_eq!(list, "bxc");
        list.insert(3, "z").unwrap();
        assert_eq!(list, "bxcz");
    }

    #[test]
    fn failed_calls_leave_list_unchanged() {
        let mut list = ArrayCharList::from_seed("ab").unwrap();
        assert_eq!(
            list.insert(5, 'a'),
            Err(CharListError::IndexOutOfRange {
                index: 5,
                len: 2,
                bound: Bound::Insertion
            })
        );
        assert_eq!(
            list.insert(5, "aa"),
            Err(CharListError::InvalidElement("aa".to_owned()))
        );
        assert_eq!(list, "ab");

        list.clear();
        assert_eq!(
            list.get(0),
            Err(CharListError::EmptyContainer {
                operation: Operation::Get
            })
        );
    }

    #[test]
    fn list_find() {
        let list = ArrayCharList::from_seed(["x", "y", "z", "y"]).unwrap();
        assert_eq!(list.find_first('y'), Ok(Some(1)));
        assert_eq!(list.find_last('y'), Ok(Some(3)));
        assert_eq!(list.find_last('q'), Ok(None));
        assert!(list.find_first("yy").is_err());
    }

    #[test]
    fn list_format() {
        let list = ArrayCharList::from_seed("ab").unwrap();
        assert_eq!(format!("{:?}", list), "['a', 'b']");
        assert_eq!(list.to_string(), "ArrayCharList(['a', 'b'])");
        assert_eq!(ArrayCharList::new().to_string(), "ArrayCharList([])");
        assert_eq!(format!("{:#}", list), "ArrayCharList([\n    'a',\n    'b',\n])");
    }
}

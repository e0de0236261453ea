use std::fmt;
use std::iter::FusedIterator;

use crate::contract::CharList;
use crate::linked::{Handle, LinkedCharList};

/// An iterator over the elements of a `LinkedCharList`.
///
/// It uses a pair of handles `front..=back` to represent the closed
/// subrange not yet yielded, and `len` to tell when the two ends meet.
///
/// # Examples
///
/// ```compile_fail
/// use char_list::{CharList, LinkedCharList};
///
/// let mut list = LinkedCharList::from_seed("abc").unwrap();
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.append('d').unwrap();
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    list: &'a LinkedCharList,
    front: Option<Handle>,
    back: Option<Handle>,
    len: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(list: &'a LinkedCharList) -> Self {
        Self {
            list,
            front: list.head(),
            back: list.tail(),
            len: list.length(),
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = char;

    /// Return the element at `front` and advance `front` to its `next`, or
    /// return `None` if the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.len -= 1;
        Some(node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    /// Return the element at `back` and move `back` to its `prev`, or
    /// return `None` if the range is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.len -= 1;
        Some(node.element)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// An owning iterator over the elements of a `LinkedCharList`.
///
/// # Examples
///
/// ```
/// use char_list::{CharList, LinkedCharList};
///
/// let list = LinkedCharList::from_seed("abc").unwrap();
/// let mut iter = list.into_iter();
/// assert_eq!(iter.next_back(), Some('c'));
/// assert_eq!(iter.collect::<String>(), "ab");
/// ```
pub struct IntoIter {
    list: LinkedCharList,
}

impl IntoIter {
    pub(crate) fn new(list: LinkedCharList) -> Self {
        Self { list }
    }
}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl Iterator for IntoIter {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.length();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a LinkedCharList {
    type Item = char;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::contract::CharList;
    use crate::linked::LinkedCharList;

    #[test]
    fn iter_meets_in_the_middle() {
        let list = LinkedCharList::from_seed("abcde").unwrap();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some('a'));
        assert_eq!(iter.next_back(), Some('e'));
        assert_eq!(iter.next(), Some('b'));
        assert_eq!(iter.next_back(), Some('d'));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some('c'));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None); // Fused
    }

    #[test]
    fn iter_empty() {
        let list = LinkedCharList::new();
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().last(), None);
        assert_eq!(list.into_iter().next_back(), None);
    }

    #[test]
    fn into_iter_drains_both_ends() {
        let list = LinkedCharList::from_seed("wxyz").unwrap();
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some('w'));
        assert_eq!(iter.next_back(), Some('z'));
        assert_eq!(iter.collect::<Vec<_>>(), vec!['x', 'y']);
    }
}

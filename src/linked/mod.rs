use std::mem;

use slab::Slab;
#[cfg(feature = "logging")]
use tracing::{error, trace};

use crate::contract::CharList;
use crate::error::{CharListError, Operation, Result};
use crate::validate::{check_access, check_insertion, IntoElement};
use crate::{IntoIter, Iter};

mod algorithms;
pub mod iterator;

/// The `LinkedCharList` is a doubly-linked list of characters with nodes
/// owned by an arena.
///
/// Appending is *O*(1). Reaching a position walks from whichever end is
/// closer, so `get`, `insert` and `delete` take *O*(min(*i*, *n* - *i*))
/// time plus a constant-time splice.
///
/// The `LinkedCharList` contains:
/// - a slab `nodes` owning every node of the list;
/// - the handles `head` and `tail` of the first and last node (`None` when
///   the list is empty);
/// - a length field `len`, so that length queries never walk the links.
///
/// Nodes refer to their neighbors by handle (a slab key), never by
/// ownership, so a node's lifetime is decided by the slab alone.
///
/// # Examples
///
/// ```
/// use char_list::{CharList, LinkedCharList};
///
/// let mut list = LinkedCharList::from_seed(vec!["x", "y", "z", "y"]).unwrap();
/// assert_eq!(list.find_last('y').unwrap(), Some(3));
///
/// list.delete_all('y').unwrap();
/// assert_eq!(list, "xz");
/// assert_eq!(list.front(), Some('x'));
/// assert_eq!(list.back(), Some('z'));
/// ```
pub struct LinkedCharList {
    nodes: Slab<Node>,
    head: Option<Handle>,
    tail: Option<Handle>,
    /// the length of the list
    len: usize,
}

/// A stable, non-owning reference to a node in a [`LinkedCharList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Handle(usize);

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) element: char,
    pub(crate) prev: Option<Handle>,
    pub(crate) next: Option<Handle>,
}

// private methods
impl LinkedCharList {
    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node {
        &self.nodes[handle.0]
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node {
        &mut self.nodes[handle.0]
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<Handle> {
        self.head
    }

    #[inline]
    pub(crate) fn tail(&self) -> Option<Handle> {
        self.tail
    }

    /// Finds the node at `index`, walking from the nearer end.
    ///
    /// `index` must already be checked against `0..len`. Running out of
    /// links before arriving means the list is ill-formed, which is
    /// reported as [`CharListError::InternalConsistencyFault`].
    fn node_at(&self, index: usize) -> Result<Handle> {
        let fault = || {
            #[cfg(feature = "logging")]
            error!(index, len = self.len, "node traversal failed");
            CharListError::InternalConsistencyFault {
                index,
                len: self.len,
            }
        };
        if index < self.len / 2 {
            let mut current = self.head.ok_or_else(fault)?;
            for _ in 0..index {
                current = self.node(current).next.ok_or_else(fault)?;
            }
            Ok(current)
        } else {
            let mut current = self.tail.ok_or_else(fault)?;
            for _ in 0..self.len - 1 - index {
                current = self.node(current).prev.ok_or_else(fault)?;
            }
            Ok(current)
        }
    }

    /// Attach a new node holding `element` right before `next`, or at the
    /// back if `next` is `None`, and return its handle.
    fn attach_before(&mut self, next: Option<Handle>, element: char) -> Handle {
        let prev = match next {
            Some(next) => self.node(next).prev,
            None => self.tail,
        };
        let handle = Handle(self.nodes.insert(Node {
            element,
            prev,
            next,
        }));
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(handle),
            None => self.head = Some(handle),
        }
        match next {
            Some(next) => self.node_mut(next).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(handle));
            self.assert_adjacent(Some(handle), next);
        }
        handle
    }

    /// Detach the node `handle` from the list, connect its neighbors, and
    /// return its element.
    ///
    /// `handle` must belong to this list.
    fn detach(&mut self, handle: Handle) -> char {
        let node = self.nodes.remove(handle.0);
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        #[cfg(debug_assertions)]
        self.assert_adjacent(node.prev, node.next);
        node.element
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<Handle>, next: Option<Handle>) {
        match prev {
            Some(prev) => assert_eq!(self.node(prev).next, next),
            None => assert_eq!(self.head, next),
        }
        match next {
            Some(next) => assert_eq!(self.node(next).prev, prev),
            None => assert_eq!(self.tail, prev),
        }
    }
}

impl LinkedCharList {
    /// Creates an empty `LinkedCharList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::{CharList, LinkedCharList};
    /// let list = LinkedCharList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Provides the first element, or `None` if the list is empty.
    #[inline]
    pub fn front(&self) -> Option<char> {
        self.head.map(|head| self.node(head).element)
    }

    /// Provides the last element, or `None` if the list is empty.
    #[inline]
    pub fn back(&self) -> Option<char> {
        self.tail.map(|tail| self.node(tail).element)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, element: char) {
        self.attach_before(self.head, element);
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, element: char) {
        self.attach_before(None, element);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::LinkedCharList;
    ///
    /// let mut list = LinkedCharList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front('a');
    /// list.push_front('b');
    /// assert_eq!(list.pop_front(), Some('b'));
    /// assert_eq!(list.pop_front(), Some('a'));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<char> {
        let head = self.head?;
        Some(self.detach(head))
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<char> {
        let tail = self.tail?;
        Some(self.detach(tail))
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_list::{CharList, LinkedCharList};
    ///
    /// let list = LinkedCharList::from_seed("abc").unwrap();
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some('a'));
    /// assert_eq!(iter.next_back(), Some('c'));
    /// assert_eq!(iter.next(), Some('b'));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl CharList for LinkedCharList {
    #[inline]
    fn length(&self) -> usize {
        self.len
    }

    fn append<E: IntoElement>(&mut self, element: E) -> Result<()> {
        let element = element.into_element()?;
        self.push_back(element);
        Ok(())
    }

    fn insert<E: IntoElement>(&mut self, index: usize, element: E) -> Result<()> {
        let element = element.into_element()?;
        check_insertion(index, self.len)?;
        let next = if index == self.len {
            None
        } else {
            Some(self.node_at(index)?)
        };
        self.attach_before(next, element);
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<char> {
        check_access(index, self.len, Operation::Delete)?;
        let handle = self.node_at(index)?;
        Ok(self.detach(handle))
    }

    fn delete_all<E: IntoElement>(&mut self, element: E) -> Result<()> {
        let element = element.into_element()?;
        #[cfg(feature = "logging")]
        let before = self.len;
        let mut current = self.head;
        while let Some(handle) = current {
            let node = self.node(handle);
            current = node.next;
            if node.element == element {
                self.detach(handle);
            }
        }
        #[cfg(feature = "logging")]
        trace!(
            ?element,
            removed = before - self.len,
            "deleted all occurrences"
        );
        Ok(())
    }

    fn get(&self, index: usize) -> Result<char> {
        check_access(index, self.len, Operation::Get)?;
        let handle = self.node_at(index)?;
        Ok(self.node(handle).element)
    }

    fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut current = self.head;
        while let Some(handle) = current {
            let node = self.node_mut(handle);
            mem::swap(&mut node.prev, &mut node.next);
            // `prev` now holds the old `next`
            current = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
        #[cfg(feature = "logging")]
        trace!(len = self.len, "reversed linked list");
    }

    fn find_first<E: IntoElement>(&self, element: E) -> Result<Option<usize>> {
        let element = element.into_element()?;
        Ok(self.iter().position(|c| c == element))
    }

    fn find_last<E: IntoElement>(&self, element: E) -> Result<Option<usize>> {
        let element = element.into_element()?;
        Ok(self.iter().rposition(|c| c == element))
    }

    fn clear(&mut self) {
        #[cfg(feature = "logging")]
        trace!(len = self.len, "clearing linked list");
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn extend_from(&mut self, other: &Self) {
        #[cfg(feature = "logging")]
        trace!(appended = other.len, "extending linked list");
        for element in other {
            self.push_back(element);
        }
    }

    fn to_chars(&self) -> Vec<char> {
        self.iter().collect()
    }
}

impl Default for LinkedCharList {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for LinkedCharList {
    type Item = char;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter::new(self)
    }
}

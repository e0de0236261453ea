use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;

use crate::error::Result;
use crate::seed::Seed;
use crate::validate::IntoElement;

/// The operation contract shared by [`ArrayCharList`] and [`LinkedCharList`].
///
/// Code written against `CharList` behaves the same with either backing
/// structure; only the cost of each operation differs.
///
/// Every fallible method validates its arguments before touching the list,
/// so an `Err` always leaves the list unchanged.
///
/// # Examples
///
/// ```
/// use char_list::{ArrayCharList, CharList, LinkedCharList};
///
/// fn scenario<L: CharList>() -> char_list::Result<()> {
///     let mut list = L::from_seed("abc")?;
///     list.insert(0, "x")?;
///     assert_eq!(list.delete(0)?, 'x');
///     list.reverse();
///     assert_eq!(list.to_chars(), vec!['c', 'b', 'a']);
///     assert_eq!(list.find_first('b')?, Some(1));
///     Ok(())
/// }
///
/// scenario::<ArrayCharList>().unwrap();
/// scenario::<LinkedCharList>().unwrap();
/// ```
///
/// [`ArrayCharList`]: crate::ArrayCharList
/// [`LinkedCharList`]: crate::LinkedCharList
pub trait CharList:
    Clone + Default + Debug + Display + FromIterator<char> + Extend<char>
{
    /// Builds a list from a seed, validating all of it first.
    fn from_seed<S: Seed>(seed: S) -> Result<Self> {
        Ok(seed.into_elements()?.into_iter().collect())
    }

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Adds `element` as the new last element.
    fn append<E: IntoElement>(&mut self, element: E) -> Result<()>;

    /// Inserts `element` so that it ends up at position `index`.
    ///
    /// `index` may equal the length, which appends.
    fn insert<E: IntoElement>(&mut self, index: usize, element: E) -> Result<()>;

    /// Removes and returns the element at `index`.
    fn delete(&mut self, index: usize) -> Result<char>;

    /// Removes every occurrence of `element`, keeping the order of the rest.
    fn delete_all<E: IntoElement>(&mut self, element: E) -> Result<()>;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<char>;

    /// Reverses the order of the elements in place.
    fn reverse(&mut self);

    /// Returns the lowest index holding `element`.
    fn find_first<E: IntoElement>(&self, element: E) -> Result<Option<usize>>;

    /// Returns the highest index holding `element`.
    fn find_last<E: IntoElement>(&self, element: E) -> Result<Option<usize>>;

    /// Removes all elements.
    fn clear(&mut self);

    /// Appends a copy of every element of `other`, in order.
    ///
    /// `other` is left untouched and shares no storage with `self` afterwards.
    fn extend_from(&mut self, other: &Self);

    /// Returns the elements in order.
    fn to_chars(&self) -> Vec<char>;
}

/// Writes `name([..])`, honouring `{:#}` for the element list.
pub(crate) fn fmt_named_list<I>(f: &mut Formatter<'_>, name: &str, elements: I) -> fmt::Result
where
    I: IntoIterator<Item = char>,
{
    f.write_str(name)?;
    f.write_str("(")?;
    f.debug_list().entries(elements).finish()?;
    f.write_str(")")
}

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::array::ArrayCharList;
use crate::contract::{fmt_named_list, CharList};
use crate::linked::LinkedCharList;

impl PartialEq for LinkedCharList {
    fn eq(&self, other: &Self) -> bool {
        self.length() == other.length() && self.iter().eq(other)
    }
}

impl Eq for LinkedCharList {}

impl PartialEq<str> for LinkedCharList {
    fn eq(&self, other: &str) -> bool {
        self.iter().eq(other.chars())
    }
}

impl PartialEq<&str> for LinkedCharList {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<ArrayCharList> for LinkedCharList {
    fn eq(&self, other: &ArrayCharList) -> bool {
        self.length() == other.length() && self.iter().eq(other)
    }
}

impl PartialEq<LinkedCharList> for ArrayCharList {
    fn eq(&self, other: &LinkedCharList) -> bool {
        other == self
    }
}

impl Hash for LinkedCharList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

/// Cloning walks the links and rebuilds a compact arena, so the clone
/// shares nothing with `self`.
impl Clone for LinkedCharList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend_from(other);
    }
}

impl FromIterator<char> for LinkedCharList {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<char> for LinkedCharList {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| self.push_back(element));
    }
}

struct Elements<'a>(&'a LinkedCharList);

impl Debug for Elements<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl Debug for LinkedCharList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedCharList")
            .field("elements", &Elements(self))
            .field("len", &self.len)
            .field("front", &self.front())
            .field("back", &self.back())
            .finish()
    }
}

impl Display for LinkedCharList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_named_list(f, "LinkedCharList", self.iter())
    }
}

//! This crate provides two interchangeable lists of single characters: an
//! array-backed [`ArrayCharList`] and a doubly-linked [`LinkedCharList`].
//!
//! Both implement the [`CharList`] contract, so code written against the
//! trait works with either one. Only the cost of each operation differs.
//!
//! Here is a quick example showing how the lists work.
//!
//! ```
//! use char_list::{ArrayCharList, CharList, CharListError, LinkedCharList};
//!
//! fn exercise<L: CharList>() -> char_list::Result<L> {
//!     let mut list = L::from_seed("abc")?;
//!     assert_eq!(list.length(), 3);
//!
//!     list.insert(0, 'x')?; // becomes "xabc"
//!     assert_eq!(list.delete(0)?, 'x'); // back to "abc"
//!
//!     list.reverse(); // becomes "cba"
//!     assert_eq!(list.find_first('b')?, Some(1));
//!     assert_eq!(list.find_last('b')?, Some(1));
//!     Ok(list)
//! }
//!
//! let array: ArrayCharList = exercise().unwrap();
//! let linked: LinkedCharList = exercise().unwrap();
//! assert_eq!(array, linked);
//!
//! // Elements given as strings are checked to be exactly one character.
//! let mut list = LinkedCharList::new();
//! assert_eq!(
//!     list.append("ab"),
//!     Err(CharListError::InvalidElement("ab".to_owned()))
//! );
//! ```
//!
//! # Memory Layout
//!
//! [`ArrayCharList`] is a thin wrapper over a `Vec<char>`.
//!
//! [`LinkedCharList`] keeps its nodes in a slab and links them by handle
//! (slab key) instead of by pointer:
//! ```text
//!   LinkedCharList                      Slab<Node>
//! ╔═══════════╗         ┌──────────┬──────────┬──────────┬──────────┐
//! ║   nodes   ║ ──────→ │  key 0   │  key 1   │  key 2   │  key 3   │
//! ╟───────────╢         │ elem 'b' │ (vacant) │ elem 'a' │ elem 'c' │
//! ║ head = 2  ║         │ prev 2   │          │ prev -   │ prev 0   │
//! ║ tail = 3  ║         │ next 3   │          │ next 0   │ next -   │
//! ║ len  = 3  ║         └──────────┴──────────┴──────────┴──────────┘
//! ╚═══════════╝
//! ```
//! The list above holds `"abc"`: walking `next` from `head` visits keys
//! 2, 0, 3, and walking `prev` from `tail` visits them in reverse. Vacant
//! keys are reused by later insertions.
//!
//! # Validation
//!
//! - Elements pass through [`IntoElement`]: a `char` is always valid, a
//!   string must hold exactly one character.
//! - `get` and `delete` accept indices in `0..len`; on an empty list they
//!   report [`CharListError::EmptyContainer`].
//! - `insert` accepts indices in `0..=len`; `len` appends.
//!
//! A call that fails leaves the list unchanged.
//!
//! # Features
//!
//! - `logging` (default): emit `tracing` events for structural changes and
//!   for internal consistency faults.
//! - `serde`: `Serialize`/`Deserialize` for both lists.

pub use array::ArrayCharList;
pub use contract::CharList;
pub use error::{Bound, CharListError, Operation, Result};
#[doc(inline)]
pub use linked::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use linked::LinkedCharList;
pub use seed::Seed;
pub use validate::IntoElement;

pub mod array;
pub mod contract;
pub mod error;
pub mod linked;
pub mod seed;
pub mod validate;

#[cfg(feature = "serde")]
mod serde_impl;

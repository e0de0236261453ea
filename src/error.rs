//! Error types for list operations

use std::fmt;

/// Which index range an out-of-range index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `0..len`, used by `get` and `delete`.
    Access,
    /// `0..=len`, used by `insert`.
    Insertion,
}

/// The indexed operation that found the list empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Get => f.write_str("get from"),
            Operation::Delete => f.write_str("delete from"),
        }
    }
}

/// Errors that can occur during list operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CharListError {
    /// A value offered as an element is not exactly one character
    #[error("Element {0:?} must be a single character")]
    InvalidElement(String),

    /// The index is outside the range allowed for the operation
    #[error("{}", out_of_range_message(.index, .len, .bound))]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
        /// The range the index was checked against.
        bound: Bound,
    },

    /// An argument of the wrong kind, e.g. an unsupported seed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `get` or `delete` on a list with no elements
    #[error("Cannot {operation} an empty list")]
    EmptyContainer {
        /// The operation that was attempted.
        operation: Operation,
    },

    /// A linked list traversal ran off the end of its links
    #[error("Node traversal failed while seeking index {index} in a list of length {len}")]
    InternalConsistencyFault {
        /// The index being sought.
        index: usize,
        /// The cached length of the list.
        len: usize,
    },
}

fn out_of_range_message(index: &usize, len: &usize, bound: &Bound) -> String {
    match bound {
        Bound::Insertion => format!(
            "Index {} out of bounds for insertion. List length is {}",
            index, len
        ),
        Bound::Access if *len == 0 => format!("Index {} out of bounds. List is empty", index),
        Bound::Access => format!(
            "Index {} out of bounds. Valid range is 0 to {}",
            index,
            len - 1
        ),
    }
}

/// Result type alias for list operations
pub type Result<T> = std::result::Result<T, CharListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_distinguish_bounds() {
        let access = CharListError::IndexOutOfRange {
            index: 3,
            len: 3,
            bound: Bound::Access,
        };
        let insertion = CharListError::IndexOutOfRange {
            index: 5,
            len: 2,
            bound: Bound::Insertion,
        };
        assert_eq!(
            access.to_string(),
            "Index 3 out of bounds. Valid range is 0 to 2"
        );
        assert_eq!(
            insertion.to_string(),
            "Index 5 out of bounds for insertion. List length is 2"
        );
    }

    #[test]
    fn empty_container_message() {
        let err = CharListError::EmptyContainer {
            operation: Operation::Delete,
        };
        assert_eq!(err.to_string(), "Cannot delete from an empty list");
    }
}

//! Recoverable operation errors
//!
//! Every error an engine can report is expected and recoverable: it becomes a
//! single `Error`-kind step in the result, never a panic or an early unwind.
//! `Display` supplies the step's short message; [`OpError::explanation`]
//! supplies the long-form prose shown in the explanation panel.

use thiserror::Error;

/// Errors surfaced as `Error`-kind steps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    /// Array insert index outside `0..=len`.
    #[error("Cannot insert at index {index}. Valid range: 0-{max}")]
    InsertOutOfRange { index: i64, max: i64 },

    /// Array remove index outside `0..len`.
    #[error("Cannot remove at index {index}. Valid range: 0-{max}")]
    RemoveOutOfRange { index: i64, max: i64 },

    /// Pop on an empty stack.
    #[error("Cannot pop from an empty stack")]
    StackUnderflow,

    /// Dequeue on an empty queue.
    #[error("Cannot dequeue from an empty queue")]
    QueueUnderflow,

    /// BST insert of a value already present.
    #[error("Value {value} already exists in the tree")]
    DuplicateValue { value: i64 },

    /// BST remove/search miss.
    #[error("Value {value} not found in the tree")]
    ValueNotFound { value: i64 },

    /// BST remove on an empty tree.
    #[error("Cannot remove from an empty tree")]
    RemoveFromEmptyTree,

    /// BST search on an empty tree.
    #[error("Cannot search in an empty tree")]
    SearchInEmptyTree,
}

impl OpError {
    /// Long-form prose for the explanation panel.
    pub fn explanation(&self) -> String {
        match self {
            OpError::InsertOutOfRange { .. } => {
                "Array indices must be within the valid range. Attempting to insert at an \
                 invalid index would cause an error."
                    .to_string()
            }
            OpError::RemoveOutOfRange { .. } => {
                "Array indices must be within the valid range. Attempting to remove from an \
                 invalid index would cause an error."
                    .to_string()
            }
            OpError::StackUnderflow => {
                "A stack must have at least one element to perform a pop operation. This is \
                 called a \"stack underflow\" error."
                    .to_string()
            }
            OpError::QueueUnderflow => {
                "A queue must have at least one element to perform a dequeue operation. This \
                 is called a \"queue underflow\" error."
                    .to_string()
            }
            OpError::DuplicateValue { value } => format!(
                "The value {} is already present in the BST. Binary search trees typically \
                 don't allow duplicate values.",
                value
            ),
            OpError::ValueNotFound { value } => format!(
                "We've reached a null node while searching for {}, which means the value \
                 doesn't exist in the BST.",
                value
            ),
            OpError::RemoveFromEmptyTree => {
                "The binary search tree is empty, so there are no elements to remove."
                    .to_string()
            }
            OpError::SearchInEmptyTree => {
                "The binary search tree is empty, so the search value cannot be found."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_out_of_range_names_index_and_range() {
        let err = OpError::InsertOutOfRange { index: 7, max: 3 };
        assert_eq!(err.to_string(), "Cannot insert at index 7. Valid range: 0-3");
    }

    #[test]
    fn remove_range_on_empty_array_reads_zero_to_minus_one() {
        // len - 1 underflows to -1 for an empty array; the message keeps the
        // original "0--1" rendering.
        let err = OpError::RemoveOutOfRange { index: 0, max: -1 };
        assert_eq!(err.to_string(), "Cannot remove at index 0. Valid range: 0--1");
    }

    #[test]
    fn every_error_has_an_explanation() {
        let errors = [
            OpError::InsertOutOfRange { index: -1, max: 0 },
            OpError::RemoveOutOfRange { index: 5, max: 2 },
            OpError::StackUnderflow,
            OpError::QueueUnderflow,
            OpError::DuplicateValue { value: 10 },
            OpError::ValueNotFound { value: 99 },
            OpError::RemoveFromEmptyTree,
            OpError::SearchInEmptyTree,
        ];
        for err in errors {
            assert!(!err.explanation().is_empty());
        }
    }
}

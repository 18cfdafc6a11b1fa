//! Array engine
//!
//! Arbitrary-position insert and remove over a `Vec<i64>` snapshot.  Both
//! operations emit three steps (current state, highlighted position, mutated
//! result); an out-of-range index emits a single `Error` step and leaves the
//! snapshot untouched.

use tracing::debug;

use crate::complexity::Complexity;
use crate::error::OpError;
use crate::step::{LinearResult, OperationResult, StepKind, StepList};

/// A fresh array with no step history.
pub fn create(initial: &[i64]) -> LinearResult {
    OperationResult::initial(initial.to_vec())
}

/// Insert `value` at `index`, or append when `index` is `None`.
///
/// The index is taken as `i64` so out-of-range input from the presentation
/// layer, negative included, is reported rather than unrepresentable.
pub fn insert(elements: &[i64], value: i64, index: Option<i64>) -> LinearResult {
    let mut steps = StepList::new();

    // Appending is inserting at the current length.
    let insert_index = index.unwrap_or(elements.len() as i64);
    debug!(value, index = insert_index, "array insert");

    if insert_index < 0 || insert_index > elements.len() as i64 {
        steps.push_error(
            elements.to_vec(),
            vec![],
            &OpError::InsertOutOfRange {
                index: insert_index,
                max: elements.len() as i64,
            },
        );
        return OperationResult::new(elements.to_vec(), steps, "insert");
    }
    let insert_index = insert_index as usize;

    steps.push(
        StepKind::State,
        elements.to_vec(),
        vec![],
        format!("Preparing to insert {} at index {}", value, insert_index),
        format!(
            "We're about to insert the value {} into the array. The array currently has {} \
             elements.",
            value,
            elements.len()
        ),
    );

    steps.push(
        StepKind::Highlight,
        elements.to_vec(),
        vec![insert_index],
        format!("Inserting {} at index {}", value, insert_index),
        format!(
            "We'll insert the new element at position {}. Elements at and after this index \
             will shift to make room.",
            insert_index
        ),
    );

    let mut result = elements.to_vec();
    result.insert(insert_index, value);
    steps.push(
        StepKind::Insert,
        result.clone(),
        vec![insert_index],
        format!("Inserted {} at index {}", value, insert_index),
        format!(
            "The value {} has been successfully inserted. The array now has {} elements.",
            value,
            result.len()
        ),
    );

    OperationResult::new(result, steps, "insert")
}

/// Remove the element at `index`.
pub fn remove(elements: &[i64], index: i64) -> LinearResult {
    let mut steps = StepList::new();
    debug!(index, "array remove");

    if index < 0 || index >= elements.len() as i64 {
        steps.push_error(
            elements.to_vec(),
            vec![],
            &OpError::RemoveOutOfRange {
                index,
                max: elements.len() as i64 - 1,
            },
        );
        return OperationResult::new(elements.to_vec(), steps, "remove");
    }
    let index = index as usize;
    let value = elements[index];

    steps.push(
        StepKind::State,
        elements.to_vec(),
        vec![],
        format!("Preparing to remove element at index {}", index),
        format!(
            "We're about to remove the element at index {}, which contains the value {}.",
            index, value
        ),
    );

    steps.push(
        StepKind::Highlight,
        elements.to_vec(),
        vec![index],
        format!("Removing element {} at index {}", value, index),
        format!(
            "The element at index {} (value: {}) will be removed. Elements after this index \
             will shift left to fill the gap.",
            index, value
        ),
    );

    let mut result = elements.to_vec();
    result.remove(index);
    steps.push(
        StepKind::Remove,
        result.clone(),
        vec![],
        format!("Removed element at index {}", index),
        format!(
            "The element has been successfully removed. The array now has {} elements.",
            result.len()
        ),
    );

    OperationResult::new(result, steps, "remove")
}

/// Complexity table for array operations.
pub fn time_complexity(operation: &str) -> Complexity {
    match operation {
        "insert" => Complexity {
            best: "O(1)",
            average: "O(n)",
            worst: "O(n)",
            explanation: "Insertion at the end is O(1), but inserting at a specific index \
                          requires shifting elements, which is O(n) in the worst case.",
        },
        "remove" => Complexity {
            best: "O(1)",
            average: "O(n)",
            worst: "O(n)",
            explanation: "Removal from the end is O(1), but removing from a specific index \
                          requires shifting elements, which is O(n) in the worst case.",
        },
        _ => Complexity::constant(),
    }
}

//! Queue engine (FIFO)
//!
//! Insertion happens at the tail (rear), removal at the head (front, index
//! 0).  Enqueue always succeeds; dequeue on an empty queue is an underflow
//! reported as a single `Error` step.

use tracing::debug;

use crate::complexity::Complexity;
use crate::error::OpError;
use crate::step::{LinearResult, OperationResult, StepKind, StepList};

/// A fresh queue with no step history.
pub fn create(initial: &[i64]) -> LinearResult {
    OperationResult::initial(initial.to_vec())
}

/// Enqueue `value` at the rear of the queue.
pub fn enqueue(elements: &[i64], value: i64) -> LinearResult {
    let mut steps = StepList::new();
    debug!(value, len = elements.len(), "queue enqueue");

    steps.push(
        StepKind::State,
        elements.to_vec(),
        vec![],
        format!("Preparing to enqueue {} into the queue", value),
        format!(
            "We're about to enqueue the value {} into the queue. In a queue, new elements \
             are always added to the rear (end of the array).",
            value
        ),
    );

    // The front is only worth pointing at when the queue is non-empty.
    if let Some(&front) = elements.first() {
        steps.push(
            StepKind::Highlight,
            elements.to_vec(),
            vec![0],
            format!("Current front of queue: {}", front),
            format!(
                "The current front of the queue is {}. The new element will be added to the \
                 rear (end), and {} will remain at the front.",
                front, front
            ),
        );
    }

    let mut result = elements.to_vec();
    result.push(value);
    steps.push(
        StepKind::Enqueue,
        result.clone(),
        vec![result.len() - 1],
        format!("Enqueued {} into the queue", value),
        format!(
            "The value {} has been successfully added to the rear of the queue. It will be \
             the last element removed (FIFO - First In, First Out).",
            value
        ),
    );

    OperationResult::new(result, steps, "enqueue")
}

/// Dequeue the front element of the queue.
pub fn dequeue(elements: &[i64]) -> LinearResult {
    let mut steps = StepList::new();
    debug!(len = elements.len(), "queue dequeue");

    let Some(&front) = elements.first() else {
        steps.push_error(elements.to_vec(), vec![], &OpError::QueueUnderflow);
        return OperationResult::new(elements.to_vec(), steps, "dequeue");
    };

    steps.push(
        StepKind::State,
        elements.to_vec(),
        vec![],
        "Preparing to dequeue from the queue".to_string(),
        "We're about to dequeue an element from the queue. In a queue, we always remove \
         from the front (the oldest element)."
            .to_string(),
    );

    steps.push(
        StepKind::Highlight,
        elements.to_vec(),
        vec![0],
        format!("Front of queue: {}", front),
        format!(
            "The front element of the queue is {}. This is the element that will be removed \
             (FIFO - First In, First Out).",
            front
        ),
    );

    let mut result = elements.to_vec();
    result.remove(0);
    steps.push(
        StepKind::Dequeue,
        result.clone(),
        vec![],
        format!("Dequeued {} from the queue", front),
        format!(
            "The value {} has been successfully removed from the front of the queue. The \
             queue now has {} elements.",
            front,
            result.len()
        ),
    );

    OperationResult::new(result, steps, "dequeue")
}

/// Complexity table for queue operations.
pub fn time_complexity(operation: &str) -> Complexity {
    match operation {
        "enqueue" => Complexity {
            best: "O(1)",
            average: "O(1)",
            worst: "O(1)",
            explanation: "Enqueue operation always adds to the end of the array, which is a \
                          constant time operation.",
        },
        // Shift cost of the backing vector.  A ring buffer or linked list
        // would make this O(1); the visualization keeps the naive layout.
        "dequeue" => Complexity {
            best: "O(1)",
            average: "O(n)",
            worst: "O(n)",
            explanation: "Dequeue operation removes from the front, which requires shifting \
                          all remaining elements. In a real implementation, a circular \
                          buffer or linked list would make this O(1).",
        },
        _ => Complexity::constant(),
    }
}

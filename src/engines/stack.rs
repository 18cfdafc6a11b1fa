//! Stack engine (LIFO)
//!
//! All mutation happens at the tail: the top of the stack is the last
//! element of the snapshot.  Push always succeeds; pop on an empty stack is
//! an underflow reported as a single `Error` step.

use tracing::debug;

use crate::complexity::Complexity;
use crate::error::OpError;
use crate::step::{LinearResult, OperationResult, StepKind, StepList};

/// A fresh stack with no step history.
pub fn create(initial: &[i64]) -> LinearResult {
    OperationResult::initial(initial.to_vec())
}

/// Push `value` onto the top of the stack.
pub fn push(elements: &[i64], value: i64) -> LinearResult {
    let mut steps = StepList::new();
    debug!(value, depth = elements.len(), "stack push");

    steps.push(
        StepKind::State,
        elements.to_vec(),
        vec![],
        format!("Preparing to push {} onto the stack", value),
        format!(
            "We're about to push the value {} onto the stack. In a stack, new elements are \
             always added to the top (end of the array).",
            value
        ),
    );

    // The current top is only worth pointing at when there is one.
    if let Some(&top) = elements.last() {
        steps.push(
            StepKind::Highlight,
            elements.to_vec(),
            vec![elements.len() - 1],
            format!("Current top of stack: {}", top),
            format!(
                "The current top of the stack is {}. The new element will be placed on top \
                 of it.",
                top
            ),
        );
    }

    let mut result = elements.to_vec();
    result.push(value);
    steps.push(
        StepKind::Push,
        result.clone(),
        vec![result.len() - 1],
        format!("Pushed {} onto the stack", value),
        format!(
            "The value {} has been successfully pushed onto the stack. It is now at the top \
             of the stack and will be the first element removed (LIFO - Last In, First Out).",
            value
        ),
    );

    OperationResult::new(result, steps, "push")
}

/// Pop the top element off the stack.
pub fn pop(elements: &[i64]) -> LinearResult {
    let mut steps = StepList::new();
    debug!(depth = elements.len(), "stack pop");

    let Some(&top) = elements.last() else {
        steps.push_error(elements.to_vec(), vec![], &OpError::StackUnderflow);
        return OperationResult::new(elements.to_vec(), steps, "pop");
    };

    steps.push(
        StepKind::State,
        elements.to_vec(),
        vec![],
        "Preparing to pop from the stack".to_string(),
        "We're about to pop an element from the stack. In a stack, we always remove from \
         the top (the most recently added element)."
            .to_string(),
    );

    steps.push(
        StepKind::Highlight,
        elements.to_vec(),
        vec![elements.len() - 1],
        format!("Top of stack: {}", top),
        format!(
            "The top element of the stack is {}. This is the element that will be removed \
             (LIFO - Last In, First Out).",
            top
        ),
    );

    let mut result = elements.to_vec();
    result.pop();
    steps.push(
        StepKind::Pop,
        result.clone(),
        vec![],
        format!("Popped {} from the stack", top),
        format!(
            "The value {} has been successfully removed from the stack. The stack now has \
             {} elements.",
            top,
            result.len()
        ),
    );

    OperationResult::new(result, steps, "pop")
}

/// Complexity table for stack operations.
pub fn time_complexity(operation: &str) -> Complexity {
    match operation {
        "push" => Complexity {
            best: "O(1)",
            average: "O(1)",
            worst: "O(1)",
            explanation: "Push operation always adds to the end of the array, which is a \
                          constant time operation.",
        },
        "pop" => Complexity {
            best: "O(1)",
            average: "O(1)",
            worst: "O(1)",
            explanation: "Pop operation always removes from the end of the array, which is \
                          a constant time operation.",
        },
        _ => Complexity::constant(),
    }
}

// Integration tests for the stack and queue engines

use proptest::prelude::*;
use stepviz::engines::{queue, stack};
use stepviz::step::StepKind;

#[test]
fn push_on_empty_stack_skips_top_highlight() {
    let result = stack::push(&[], 5);
    assert_eq!(result.steps.len(), 2);
    assert_eq!(result.steps[0].kind, StepKind::State);
    assert_eq!(result.steps[1].kind, StepKind::Push);
    assert_eq!(result.steps[1].highlighted, vec![0]);
    assert_eq!(result.snapshot, vec![5]);
}

#[test]
fn push_on_nonempty_stack_highlights_current_top() {
    let result = stack::push(&[10, 20, 30], 40);
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.steps[1].kind, StepKind::Highlight);
    assert_eq!(result.steps[1].highlighted, vec![2]);
    assert_eq!(result.steps[1].message, "Current top of stack: 30");
    assert_eq!(result.steps[2].highlighted, vec![3]);
    assert_eq!(result.snapshot, vec![10, 20, 30, 40]);
}

#[test]
fn pop_removes_the_tail() {
    let result = stack::pop(&[10, 20, 30]);
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.steps[1].kind, StepKind::Highlight);
    assert_eq!(result.steps[1].highlighted, vec![2]);
    assert_eq!(result.steps[1].message, "Top of stack: 30");
    assert_eq!(result.steps[2].kind, StepKind::Pop);
    assert_eq!(result.steps[2].message, "Popped 30 from the stack");
    assert_eq!(result.snapshot, vec![10, 20]);
}

#[test]
fn pop_on_empty_stack_underflows() {
    let result = stack::pop(&[]);
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].kind, StepKind::Error);
    assert_eq!(result.steps[0].message, "Cannot pop from an empty stack");
    assert!(result.steps[0].explanation.contains("stack underflow"));
    assert!(result.snapshot.is_empty());
}

#[test]
fn enqueue_on_nonempty_queue_highlights_front() {
    let result = queue::enqueue(&[10, 20, 30], 40);
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.steps[1].kind, StepKind::Highlight);
    assert_eq!(result.steps[1].highlighted, vec![0]);
    assert_eq!(result.steps[1].message, "Current front of queue: 10");
    assert_eq!(result.steps[2].kind, StepKind::Enqueue);
    assert_eq!(result.steps[2].highlighted, vec![3]);
    assert_eq!(result.snapshot, vec![10, 20, 30, 40]);
}

#[test]
fn enqueue_on_empty_queue_skips_front_highlight() {
    let result = queue::enqueue(&[], 7);
    assert_eq!(result.steps.len(), 2);
    assert_eq!(result.snapshot, vec![7]);
}

#[test]
fn dequeue_removes_the_front() {
    let result = queue::dequeue(&[10, 20, 30]);
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.steps[1].highlighted, vec![0]);
    assert_eq!(result.steps[1].message, "Front of queue: 10");
    assert_eq!(result.steps[2].kind, StepKind::Dequeue);
    assert_eq!(result.snapshot, vec![20, 30]);
}

#[test]
fn dequeue_on_empty_queue_underflows() {
    let result = queue::dequeue(&[]);
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].kind, StepKind::Error);
    assert_eq!(result.steps[0].message, "Cannot dequeue from an empty queue");
    assert!(result.snapshot.is_empty());
}

#[test]
fn dequeue_after_enqueue_removes_front_not_newest() {
    let enqueued = queue::enqueue(&[10, 20], 30);
    let dequeued = queue::dequeue(&enqueued.snapshot);
    assert_eq!(dequeued.snapshot, vec![20, 30]);
}

#[test]
fn stack_time_complexity_is_constant() {
    for op in ["push", "pop"] {
        let c = stack::time_complexity(op);
        assert_eq!((c.best, c.average, c.worst), ("O(1)", "O(1)", "O(1)"));
        assert!(!c.explanation.is_empty());
    }
}

#[test]
fn queue_dequeue_pays_the_shift_cost() {
    let enqueue = queue::time_complexity("enqueue");
    assert_eq!(enqueue.worst, "O(1)");

    let dequeue = queue::time_complexity("dequeue");
    assert_eq!(dequeue.best, "O(1)");
    assert_eq!(dequeue.average, "O(n)");
    assert_eq!(dequeue.worst, "O(n)");
    assert!(dequeue.explanation.contains("circular buffer"));
}

proptest! {
    // Push then pop is the identity on the container.
    #[test]
    fn push_pop_is_identity(elements in prop::collection::vec(any::<i64>(), 0..16), value in any::<i64>()) {
        let pushed = stack::push(&elements, value);
        let popped = stack::pop(&pushed.snapshot);
        prop_assert_eq!(popped.snapshot, elements);
    }

    // Enqueue appends at the rear, dequeue removes the original front.
    #[test]
    fn fifo_removes_from_the_front(elements in prop::collection::vec(any::<i64>(), 1..16), value in any::<i64>()) {
        let enqueued = queue::enqueue(&elements, value);
        let dequeued = queue::dequeue(&enqueued.snapshot);

        let mut expected = elements[1..].to_vec();
        expected.push(value);
        prop_assert_eq!(dequeued.snapshot, expected);
    }

    // Every valid operation produces at least one step.
    #[test]
    fn steps_are_never_empty(elements in prop::collection::vec(any::<i64>(), 0..16), value in any::<i64>()) {
        prop_assert!(!stack::push(&elements, value).steps.is_empty());
        prop_assert!(!stack::pop(&elements).steps.is_empty());
        prop_assert!(!queue::enqueue(&elements, value).steps.is_empty());
        prop_assert!(!queue::dequeue(&elements).steps.is_empty());
    }
}

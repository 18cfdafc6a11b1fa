// Integration tests for the array engine

use stepviz::engines::array;
use stepviz::step::StepKind;

#[test]
fn insert_at_index_emits_three_steps() {
    let initial = array::create(&[10, 20, 30]);
    let result = array::insert(&initial.snapshot, 25, Some(1));

    assert_eq!(result.operation, Some("insert"));
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.steps[0].kind, StepKind::State);
    assert_eq!(result.steps[1].kind, StepKind::Highlight);
    assert_eq!(result.steps[2].kind, StepKind::Insert);

    // The first two steps show the pre-insert array, the last the result.
    assert_eq!(result.steps[0].snapshot, vec![10, 20, 30]);
    assert!(result.steps[0].highlighted.is_empty());
    assert_eq!(result.steps[1].snapshot, vec![10, 20, 30]);
    assert_eq!(result.steps[1].highlighted, vec![1]);
    assert_eq!(result.steps[2].snapshot, vec![10, 25, 20, 30]);
    assert_eq!(result.steps[2].highlighted, vec![1]);

    assert_eq!(result.snapshot, vec![10, 25, 20, 30]);
    assert_eq!(result.current_step, 0);
}

#[test]
fn insert_messages_follow_the_script() {
    let result = array::insert(&[10, 20, 30], 25, Some(1));
    assert_eq!(result.steps[0].message, "Preparing to insert 25 at index 1");
    assert_eq!(result.steps[1].message, "Inserting 25 at index 1");
    assert_eq!(result.steps[2].message, "Inserted 25 at index 1");
    assert!(result.steps[0]
        .explanation
        .contains("The array currently has 3 elements"));
    assert!(result.steps[1].explanation.contains("shift to make room"));
    assert!(result.steps[2].explanation.contains("now has 4 elements"));
}

#[test]
fn insert_without_index_appends() {
    let result = array::insert(&[10, 20, 30], 40, None);
    assert_eq!(result.snapshot, vec![10, 20, 30, 40]);
    assert_eq!(result.steps[2].highlighted, vec![3]);
}

#[test]
fn insert_out_of_range_is_a_single_error_step() {
    let result = array::insert(&[10, 20, 30], 99, Some(5));
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].kind, StepKind::Error);
    assert_eq!(
        result.steps[0].message,
        "Cannot insert at index 5. Valid range: 0-3"
    );
    assert_eq!(result.snapshot, vec![10, 20, 30]);
    assert_eq!(result.current_step, 0);
}

#[test]
fn insert_rejects_negative_index() {
    let result = array::insert(&[10, 20, 30], 99, Some(-1));
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].kind, StepKind::Error);
    assert_eq!(
        result.steps[0].message,
        "Cannot insert at index -1. Valid range: 0-3"
    );
    assert_eq!(result.snapshot, vec![10, 20, 30]);
}

#[test]
fn insert_at_length_is_valid() {
    let result = array::insert(&[10, 20, 30], 40, Some(3));
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.snapshot, vec![10, 20, 30, 40]);
}

#[test]
fn remove_emits_three_steps() {
    let result = array::remove(&[10, 25, 20, 30], 1);

    assert_eq!(result.operation, Some("remove"));
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.steps[0].kind, StepKind::State);
    assert_eq!(result.steps[1].kind, StepKind::Highlight);
    assert_eq!(result.steps[2].kind, StepKind::Remove);

    assert_eq!(result.steps[1].highlighted, vec![1]);
    assert_eq!(result.steps[1].message, "Removing element 25 at index 1");
    assert!(result.steps[2].highlighted.is_empty());
    assert_eq!(result.snapshot, vec![10, 20, 30]);
}

#[test]
fn remove_out_of_range_is_a_single_error_step() {
    let result = array::remove(&[10, 20, 30], 3);
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].kind, StepKind::Error);
    assert_eq!(
        result.steps[0].message,
        "Cannot remove at index 3. Valid range: 0-2"
    );
    assert_eq!(result.snapshot, vec![10, 20, 30]);
}

#[test]
fn remove_from_empty_array_reports_inverted_range() {
    let result = array::remove(&[], 0);
    assert_eq!(result.steps.len(), 1);
    assert_eq!(
        result.steps[0].message,
        "Cannot remove at index 0. Valid range: 0--1"
    );
    assert!(result.snapshot.is_empty());
}

#[test]
fn create_has_no_steps() {
    let result = array::create(&[1, 2, 3]);
    assert_eq!(result.snapshot, vec![1, 2, 3]);
    assert!(result.steps.is_empty());
    assert_eq!(result.operation, None);
}

#[test]
fn time_complexity_table() {
    let insert = array::time_complexity("insert");
    assert_eq!(insert.best, "O(1)");
    assert_eq!(insert.average, "O(n)");
    assert_eq!(insert.worst, "O(n)");
    assert!(!insert.explanation.is_empty());

    let remove = array::time_complexity("remove");
    assert_eq!(remove.worst, "O(n)");

    // Total lookup: unknown names get the constant default.
    let unknown = array::time_complexity("reverse");
    assert_eq!(unknown.best, "O(1)");
    assert_eq!(unknown.worst, "O(1)");
    assert!(unknown.explanation.is_empty());
}

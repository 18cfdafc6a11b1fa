//! The shared step model
//!
//! Every engine operation produces an [`OperationResult`]: the final snapshot
//! plus an ordered list of [`Step`]s describing how the operation progressed.
//! Steps are immutable once appended and each owns an independent deep copy
//! of the structure, so playback can move freely without later operations
//! disturbing earlier frames.
//!
//! The model is generic over the snapshot type `S` and the highlight element
//! type `H`: linear containers highlight indices, the tree highlights node
//! values (in path order).

use serde::Serialize;

use crate::error::OpError;
use crate::tree::Tree;

/// What a single step depicts.  Kinds overlap across engines; an engine only
/// ever emits the kinds its operations define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    State,
    Highlight,
    Traverse,
    Insert,
    Remove,
    Enqueue,
    Dequeue,
    Push,
    Pop,
    Found,
    NotFound,
    Complete,
    Error,
}

/// One immutable, playback-ordered record of an operation's progress.
#[derive(Debug, Clone, Serialize)]
pub struct Step<S, H> {
    pub kind: StepKind,
    /// Frozen deep copy of the structure at this instant.
    pub snapshot: S,
    /// Elements to visually emphasize; order is preserved (the BST uses it
    /// for root-to-node paths).
    pub highlighted: Vec<H>,
    /// Short status line.
    pub message: String,
    /// Long-form pedagogical prose.
    pub explanation: String,
}

/// Append-only builder for a step list.
#[derive(Debug)]
pub struct StepList<S, H> {
    steps: Vec<Step<S, H>>,
}

impl<S, H> StepList<S, H> {
    pub fn new() -> Self {
        StepList { steps: Vec::new() }
    }

    /// Append one step.
    pub fn push(
        &mut self,
        kind: StepKind,
        snapshot: S,
        highlighted: Vec<H>,
        message: String,
        explanation: String,
    ) {
        self.steps.push(Step {
            kind,
            snapshot,
            highlighted,
            message,
            explanation,
        });
    }

    /// Append a single `Error` step carrying the error's message and
    /// explanation.  The snapshot is the caller's unchanged input.
    pub fn push_error(&mut self, snapshot: S, highlighted: Vec<H>, error: &OpError) {
        self.push(
            StepKind::Error,
            snapshot,
            highlighted,
            error.to_string(),
            error.explanation(),
        );
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_vec(self) -> Vec<Step<S, H>> {
        self.steps
    }
}

impl<S, H> Default for StepList<S, H> {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of one engine call: the final snapshot, the full step list,
/// and a playback cursor starting at step 0.
#[derive(Debug, Clone, Serialize)]
pub struct OperationResult<S, H> {
    /// The structure after the operation (identical to the input on error).
    pub snapshot: S,
    /// At least one step for every operation; empty only for `create`.
    pub steps: Vec<Step<S, H>>,
    /// Index of the step currently shown, always within `steps` when steps
    /// exist.
    pub current_step: usize,
    /// Name of the operation that produced this result; `None` for `create`.
    pub operation: Option<&'static str>,
}

impl<S, H> OperationResult<S, H> {
    /// A result with no steps, as returned by `create`.
    pub fn initial(snapshot: S) -> Self {
        OperationResult {
            snapshot,
            steps: Vec::new(),
            current_step: 0,
            operation: None,
        }
    }

    pub fn new(snapshot: S, steps: StepList<S, H>, operation: &'static str) -> Self {
        OperationResult {
            snapshot,
            steps: steps.into_vec(),
            current_step: 0,
            operation: Some(operation),
        }
    }

    /// The step under the cursor, if any steps exist.
    pub fn current(&self) -> Option<&Step<S, H>> {
        self.steps.get(self.current_step)
    }

    /// Advance the cursor one step.  Returns false at the last step; the
    /// cursor never skips or wraps.
    pub fn advance(&mut self) -> bool {
        if self.current_step + 1 < self.steps.len() {
            self.current_step += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor one step back.  Returns false at step 0.
    pub fn retreat(&mut self) -> bool {
        if self.current_step > 0 {
            self.current_step -= 1;
            true
        } else {
            false
        }
    }

    pub fn rewind(&mut self) {
        self.current_step = 0;
    }

    /// Jump to the last step (no-op on an empty step list).
    pub fn jump_to_end(&mut self) {
        self.current_step = self.steps.len().saturating_sub(1);
    }

    pub fn at_end(&self) -> bool {
        self.current_step + 1 >= self.steps.len()
    }
}

/// Step over a linear container snapshot; highlights are indices.
pub type LinearStep = Step<Vec<i64>, usize>;
/// Result of an array, stack, or queue operation.
pub type LinearResult = OperationResult<Vec<i64>, usize>;

/// Step over a tree snapshot; highlights are node values in path order.
pub type TreeStep = Step<Tree, i64>;
/// Result of a BST operation.
pub type TreeResult = OperationResult<Tree, i64>;

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_steps(n: usize) -> LinearResult {
        let mut steps = StepList::new();
        for i in 0..n {
            steps.push(
                StepKind::State,
                vec![i as i64],
                vec![],
                format!("step {}", i),
                String::new(),
            );
        }
        OperationResult::new(vec![], steps, "test")
    }

    #[test]
    fn advance_stops_at_last_step() {
        let mut result = result_with_steps(3);
        assert!(result.advance());
        assert!(result.advance());
        assert!(!result.advance());
        assert_eq!(result.current_step, 2);
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut result = result_with_steps(2);
        assert!(!result.retreat());
        result.advance();
        assert!(result.retreat());
        assert_eq!(result.current_step, 0);
    }

    #[test]
    fn initial_result_has_no_current_step() {
        let result: LinearResult = OperationResult::initial(vec![1, 2, 3]);
        assert!(result.current().is_none());
        assert!(result.steps.is_empty());
        assert_eq!(result.current_step, 0);
        assert_eq!(result.operation, None);
    }

    #[test]
    fn jump_to_end_lands_on_last_step() {
        let mut result = result_with_steps(4);
        result.jump_to_end();
        assert_eq!(result.current_step, 3);
        assert!(result.at_end());
    }

    #[test]
    fn push_error_carries_message_and_explanation() {
        let mut steps: StepList<Vec<i64>, usize> = StepList::new();
        steps.push_error(vec![], vec![], &OpError::StackUnderflow);
        let steps = steps.into_vec();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, StepKind::Error);
        assert_eq!(steps[0].message, "Cannot pop from an empty stack");
        assert!(steps[0].explanation.contains("stack underflow"));
    }
}

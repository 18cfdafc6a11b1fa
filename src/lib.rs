//! # Introduction
//!
//! stepviz renders elementary data structure operations (array, stack, queue,
//! binary search tree) as ordered lists of immutable "steps", each carrying a
//! frozen snapshot, a set of highlighted elements, and pedagogical prose.  The
//! step list is then played back one step at a time through a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Snapshot + Operation → Engine → OperationResult (steps) → TUI playback
//! ```
//!
//! 1. [`engines`] — four independent operation engines.  Each exposes
//!    `create`, its mutating operations, and a `time_complexity` lookup, and
//!    returns a fresh [`step::OperationResult`] per call.
//! 2. [`step`] — the shared step model: [`step::Step`], [`step::StepList`],
//!    and [`step::OperationResult`] with its playback cursor.
//! 3. [`tree`] — the owned binary search tree the BST engine operates on.
//! 4. [`error`] — the recoverable error taxonomy; every error becomes a
//!    single `Error`-kind step, nothing unwinds.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Engine contract
//!
//! Engines are pure: they take the previous result's final snapshot, never
//! mutate shared state, and return a self-contained result whose steps own
//! independent deep copies of the structure.  Failure (index out of range,
//! underflow, duplicate, not found) is data: a single `Error` step with the
//! input snapshot unchanged.

pub mod complexity;
pub mod engines;
pub mod error;
pub mod step;
pub mod tree;
pub mod ui;

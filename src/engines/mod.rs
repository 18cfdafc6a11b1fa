//! The four operation engines
//!
//! Each engine is an independent module exposing `create`, its mutating
//! operations, and a `time_complexity` lookup.  Engines share the step model
//! in [`crate::step`] but nothing else: array mutates at arbitrary indices,
//! stack only at the tail, queue at head and tail, and the BST walks an
//! owned tree.  Every operation takes the previous result's final snapshot
//! and returns a brand-new result.

pub mod array;
pub mod bst;
pub mod queue;
pub mod stack;

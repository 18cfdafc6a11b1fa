//! Time complexity lookup records
//!
//! Each engine owns a `time_complexity(operation)` lookup returning one of
//! these records.  The lookup is total: unknown operation names get the
//! all-constant default with an empty explanation.

use serde::Serialize;

/// Best/average/worst bounds for one operation, with explanatory prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub explanation: &'static str,
}

impl Complexity {
    /// The default for unknown operation names.
    pub const fn constant() -> Self {
        Complexity {
            best: "O(1)",
            average: "O(1)",
            worst: "O(1)",
            explanation: "",
        }
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Self::constant()
    }
}

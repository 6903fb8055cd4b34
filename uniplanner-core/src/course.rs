//! Course metadata consumed by scoring and workload grouping.

use serde::{Deserialize, Serialize};

/// Catalog entry snapshot. Credit weight feeds the priority score; heavier
/// courses pull their tasks up the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    /// Positive, typically 1-5.
    pub credit_weight: u32,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>, credit_weight: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credit_weight,
        }
    }
}

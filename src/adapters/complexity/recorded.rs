use crate::domain::model::MethodUnit;
use crate::domain::ports::ComplexityOracle;

/// Complexity of straight-line code with a single path.
pub const BASELINE_COMPLEXITY: u32 = 1;

/// Reads the score the upstream calculator recorded on each method.
/// Methods it never scored count as [BASELINE_COMPLEXITY].
pub struct RecordedComplexity;

impl Default for RecordedComplexity {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordedComplexity {
    pub fn new() -> Self {
        Self
    }
}

impl ComplexityOracle for RecordedComplexity {
    fn complexity(&self, method: &MethodUnit) -> u32 {
        method.complexity.unwrap_or(BASELINE_COMPLEXITY)
    }
}

use crate::adapters::complexity::recorded::BASELINE_COMPLEXITY;
use crate::domain::model::MethodUnit;
use crate::domain::ports::ComplexityOracle;

/// Same score for every method, ignoring anything recorded in the model.
/// With the default score WMC degenerates to the number of bodied methods.
pub struct UniformComplexity {
    pub score: u32,
}

impl Default for UniformComplexity {
    fn default() -> Self {
        Self::new(BASELINE_COMPLEXITY)
    }
}

impl UniformComplexity {
    pub fn new(score: u32) -> Self {
        Self { score }
    }
}

impl ComplexityOracle for UniformComplexity {
    fn complexity(&self, _method: &MethodUnit) -> u32 {
        self.score
    }
}

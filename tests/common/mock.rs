//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use godclass::domain::model::MethodUnit;
use godclass::domain::ports::ComplexityOracle;

/// Mock ComplexityOracle that returns a fixed value.
pub struct MockComplexity {
    pub fixed: u32,
}

impl MockComplexity {
    pub fn new() -> Self {
        Self { fixed: 1 }
    }

    pub fn with_score(fixed: u32) -> Self {
        Self { fixed }
    }
}

impl Default for MockComplexity {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityOracle for MockComplexity {
    fn complexity(&self, _method: &MethodUnit) -> u32 {
        self.fixed
    }
}

/// Mock ComplexityOracle with per-method scores; unknown methods score 1.
pub struct TableComplexity {
    scores: HashMap<String, u32>,
}

impl TableComplexity {
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
        }
    }

    pub fn with(mut self, method: &str, score: u32) -> Self {
        self.scores.insert(method.to_string(), score);
        self
    }
}

impl Default for TableComplexity {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityOracle for TableComplexity {
    fn complexity(&self, method: &MethodUnit) -> u32 {
        self.scores
            .get(&method.qualified_name)
            .copied()
            .unwrap_or(1)
    }
}

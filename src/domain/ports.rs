use crate::domain::model::{ClassModel, MethodUnit};
use anyhow::Result;

/// Class model source port (implemented by Infrastructure)
pub trait ClassModelSource {
    fn load(&self) -> Result<ClassModel>;
}

/// Complexity oracle port: scores a single method body.
pub trait ComplexityOracle: Send + Sync {
    /// Cyclomatic complexity of `method`. Only called for methods that have a body.
    fn complexity(&self, method: &MethodUnit) -> u32;
}

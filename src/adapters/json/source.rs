use crate::domain::model::ClassModel;
use crate::domain::ports::ClassModelSource;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Class model source backed by a JSON file written by the resolver.
pub struct JsonClassModelSource {
    path: PathBuf,
}

impl JsonClassModelSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClassModelSource for JsonClassModelSource {
    fn load(&self) -> Result<ClassModel> {
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read class model: {}", self.path.display()))?;
        parse_class_model(&json)
            .with_context(|| format!("Invalid class model: {}", self.path.display()))
    }
}

pub fn parse_class_model(json: &str) -> Result<ClassModel> {
    serde_json::from_str(json).context("Failed to parse class model JSON")
}

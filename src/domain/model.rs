//! Resolved class model: the contract between an upstream symbol resolver and the God Class
//! metrics.
//!
//! **Resolver mapping**: one `ClassUnit` per analyzed class; its `properties` are the properties
//! declared directly on the class (constructor parameters included); each method lists the name
//! references found in its body, already bound to a property symbol or marked unresolved.
//! **Metric usage**: local property names feed the access map (TCC), property owners feed ATFD,
//! `complexity` feeds the recorded complexity oracle (WMC).

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A whole class model file as produced by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClassModel {
    /// False when the resolver ran without type information. Rules that need resolved bindings
    /// are skipped for every class of such a model.
    #[serde(default = "default_type_resolution")]
    pub type_resolution: bool,
    #[serde(default)]
    pub classes: Vec<ClassUnit>,
}

fn default_type_resolution() -> bool {
    true
}

impl ClassModel {
    /// Model with resolved bindings.
    pub fn resolved(classes: Vec<ClassUnit>) -> Self {
        Self {
            type_resolution: true,
            classes,
        }
    }

    pub fn find_class(&self, qualified_name: &str) -> Option<&ClassUnit> {
        self.classes
            .iter()
            .find(|c| c.qualified_name == qualified_name)
    }

    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }
}

/// One analyzed class. Identity is the qualified name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClassUnit {
    pub qualified_name: String,
    /// Identifying element of the class (its name), used as the finding location.
    #[serde(default)]
    pub location: Option<SourceLocation>,
    /// Declared methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodUnit>,
    /// Own properties, including constructor parameters.
    #[serde(default)]
    pub properties: Vec<PropertyUnit>,
}

impl ClassUnit {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            location: None,
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn declares_methods(&self) -> bool {
        !self.methods.is_empty()
    }

    /// Qualified names of the properties declared directly on this class.
    pub fn local_property_names(&self) -> HashSet<&str> {
        self.properties
            .iter()
            .map(|p| p.qualified_name.as_str())
            .collect()
    }

    /// Methods that have a body, paired with the references found in it. Bodiless methods
    /// (abstract, interface) are skipped.
    pub fn bodied_methods(&self) -> impl Iterator<Item = (&MethodUnit, &[ReferenceUnit])> {
        self.methods
            .iter()
            .filter_map(|m| m.references().map(|refs| (m, refs)))
    }
}

/// A property declared on a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyUnit {
    pub qualified_name: String,
    /// Qualified name of the declaring class.
    pub owner: String,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub origin: PropertyOrigin,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PropertyOrigin {
    /// Primary constructor parameter.
    Constructor,
    #[default]
    Declared,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MethodUnit {
    pub qualified_name: String,
    /// Cyclomatic complexity recorded by the upstream calculator, if it ran.
    #[serde(default)]
    pub complexity: Option<u32>,
    pub body: MethodBody,
}

impl MethodUnit {
    /// References in the body, or `None` for a method without a body.
    pub fn references(&self) -> Option<&[ReferenceUnit]> {
        match &self.body {
            MethodBody::Block { references } => Some(references),
            MethodBody::Absent => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodBody {
    Block {
        #[serde(default)]
        references: Vec<ReferenceUnit>,
    },
    /// Abstract or interface method.
    Absent,
}

/// A name usage inside a method body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReferenceUnit {
    /// Referenced name as written in source.
    pub name: String,
    pub target: ReferenceTarget,
}

impl ReferenceUnit {
    /// The property behind this reference, if it resolved to one.
    pub fn property(&self) -> Option<&PropertyTarget> {
        match &self.target {
            ReferenceTarget::Property(target) => Some(target),
            ReferenceTarget::Unresolved => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceTarget {
    Property(PropertyTarget),
    /// Function call, local variable, or a name the resolver could not bind.
    Unresolved,
}

/// Property symbol a reference resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyTarget {
    pub qualified_name: String,
    /// Declaring class. `None` for top-level properties, which have no dispatch receiver.
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub is_constant: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceLocation {
    /// Path relative to the project root.
    pub file_path: String,
    pub range: SourceRange,
}

/// Source code range (line/column), 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceRange {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

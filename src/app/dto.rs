use crate::domain::model::{ClassUnit, SourceLocation};
use crate::domain::verdict::{ClassMetrics, Finding, MetricValue, Severity, Thresholds};
use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub model_path: String,
    pub class_count: usize,
    pub method_count: usize,
    pub type_resolution: bool,
    pub active: bool,
    pub thresholds: ThresholdsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ThresholdsDto {
    pub wmc: u32,
    pub tcc: f64,
    pub atfd: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluateRequest {
    /// Qualified name of a class in the loaded model.
    pub class: String,
}

/// Evaluate a class that is not part of the loaded model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MeasureRequest {
    pub class: ClassUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanRequest {
    /// Regex matched against qualified class names.
    pub pattern: Option<String>,
    /// Also list classes that did not trip the rule.
    #[serde(default)]
    pub include_clean: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScanResponse {
    pub evaluated_count: usize,
    pub finding_count: usize,
    pub items: Vec<ClassVerdict>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClassVerdict {
    pub class: String,
    /// Absent when the class declares no methods or the rule was skipped.
    pub metrics: Option<MetricsDto>,
    pub finding: Option<FindingDto>,
    pub skipped: Option<SkipReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    RuleInactive,
    NoTypeResolution,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MetricsDto {
    pub wmc: u32,
    pub tcc: f64,
    pub atfd: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FindingDto {
    pub rule_id: String,
    pub severity: Severity,
    pub debt_minutes: u32,
    pub signature: String,
    pub location: Option<LocationDto>,
    pub message: String,
    pub metrics: Vec<MetricDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MetricDto {
    pub name: String,
    pub value: MetricValue,
    pub threshold: MetricValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocationDto {
    pub file_path: String,
    pub span: SpanDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SpanDto {
    /// 0-based, inclusive start line.
    pub start_line: u32,
    /// 0-based, inclusive start column.
    pub start_column: u32,
    /// 0-based, inclusive end line.
    pub end_line: u32,
    /// 0-based, inclusive end column.
    pub end_column: u32,

    /// 1-based, inclusive start line (convenience).
    pub start_line_1based: u32,
    /// 1-based, inclusive end line (convenience).
    pub end_line_1based: u32,
}

impl From<&Thresholds> for ThresholdsDto {
    fn from(t: &Thresholds) -> Self {
        Self {
            wmc: t.weighted_method_count,
            tcc: t.tight_class_cohesion,
            atfd: t.access_to_foreign_data,
        }
    }
}

impl From<&ClassMetrics> for MetricsDto {
    fn from(m: &ClassMetrics) -> Self {
        Self {
            wmc: m.wmc,
            tcc: m.tcc,
            atfd: m.atfd,
        }
    }
}

impl From<&SourceLocation> for LocationDto {
    fn from(loc: &SourceLocation) -> Self {
        let r = &loc.range;
        Self {
            file_path: loc.file_path.clone(),
            span: SpanDto {
                start_line: r.start_line,
                start_column: r.start_column,
                end_line: r.end_line,
                end_column: r.end_column,
                start_line_1based: r.start_line.saturating_add(1),
                end_line_1based: r.end_line.saturating_add(1),
            },
        }
    }
}

impl From<Finding> for FindingDto {
    fn from(f: Finding) -> Self {
        Self {
            rule_id: f.rule_id,
            severity: f.severity,
            debt_minutes: f.debt_minutes,
            signature: f.signature,
            location: f.location.as_ref().map(LocationDto::from),
            message: f.message,
            metrics: f
                .metrics
                .into_iter()
                .map(|m| MetricDto {
                    name: m.name,
                    value: m.value,
                    threshold: m.threshold,
                })
                .collect(),
        }
    }
}

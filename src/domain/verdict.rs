use crate::domain::access::map_local_accesses;
use crate::domain::cohesion::tight_class_cohesion;
use crate::domain::foreign::access_to_foreign_data;
use crate::domain::model::{ClassUnit, SourceLocation};
use crate::domain::ports::ComplexityOracle;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const RULE_ID: &str = "GodClass";

pub const DESCRIPTION: &str = "God Class: high complexity combined with low cohesion and \
heavy access to the data of other classes.";

/// Remediation estimate attached to every finding.
pub const DEBT_MINUTES: u32 = 20;

pub const DEFAULT_WEIGHTED_METHOD_COUNT_THRESHOLD: u32 = 47;
pub const DEFAULT_ACCESS_TO_FOREIGN_DATA_THRESHOLD: u32 = 5;

/// Not configurable yet; lives in [Thresholds] so the rule never reads it directly.
pub const TIGHT_CLASS_COHESION_THRESHOLD: f64 = 1.0 / 3.0;

/// Thresholds of the joint God Class condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Thresholds {
    /// WMC at or above this value is suspicious.
    pub weighted_method_count: u32,
    /// TCC strictly below this value is suspicious.
    pub tight_class_cohesion: f64,
    /// ATFD strictly above this value is suspicious.
    pub access_to_foreign_data: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(
            DEFAULT_WEIGHTED_METHOD_COUNT_THRESHOLD,
            DEFAULT_ACCESS_TO_FOREIGN_DATA_THRESHOLD,
        )
    }
}

impl Thresholds {
    pub fn new(weighted_method_count: u32, access_to_foreign_data: u32) -> Self {
        Self {
            weighted_method_count,
            tight_class_cohesion: TIGHT_CLASS_COHESION_THRESHOLD,
            access_to_foreign_data,
        }
    }
}

/// The three metrics of one class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassMetrics {
    pub wmc: u32,
    pub tcc: f64,
    pub atfd: u32,
}

impl ClassMetrics {
    /// All three conjuncts must hold.
    pub fn is_god_class(&self, thresholds: &Thresholds) -> bool {
        self.wmc >= thresholds.weighted_method_count
            && self.tcc < thresholds.tight_class_cohesion
            && self.atfd > thresholds.access_to_foreign_data
    }
}

/// Computes WMC, TCC and ATFD for `class`.
///
/// Returns `None` for a class that declares no methods: none of the metrics is meaningful and
/// nothing is computed. Methods without a body are left out of every metric.
pub fn measure(class: &ClassUnit, oracle: &dyn ComplexityOracle) -> Option<ClassMetrics> {
    if !class.declares_methods() {
        return None;
    }

    let wmc = class
        .bodied_methods()
        .fold(0u32, |total, (method, _)| {
            total.saturating_add(oracle.complexity(method))
        });
    let tcc = tight_class_cohesion(&map_local_accesses(class));
    let atfd = access_to_foreign_data(class);

    Some(ClassMetrics { wmc, tcc, atfd })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Maintainability,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(u32),
    Ratio(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Integer(v) => f64::from(v),
            MetricValue::Ratio(v) => v,
        }
    }
}

/// (name, value, threshold) triple for diagnostic display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metric {
    pub name: String,
    pub value: MetricValue,
    pub threshold: MetricValue,
}

impl Metric {
    fn new(name: &str, value: MetricValue, threshold: MetricValue) -> Self {
        Self {
            name: name.to_string(),
            value,
            threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub rule_id: String,
    pub severity: Severity,
    pub debt_minutes: u32,
    /// Qualified name of the offending class.
    pub signature: String,
    pub location: Option<SourceLocation>,
    pub message: String,
    pub metrics: Vec<Metric>,
}

/// The God Class rule: metrics against [Thresholds].
#[derive(Debug, Clone, Default)]
pub struct GodClassRule {
    thresholds: Thresholds,
}

impl GodClassRule {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Evaluates one class; `Some` only when WMC, TCC and ATFD all cross their thresholds.
    pub fn evaluate(&self, class: &ClassUnit, oracle: &dyn ComplexityOracle) -> Option<Finding> {
        let metrics = measure(class, oracle)?;
        self.judge(class, &metrics)
    }

    /// Applies the joint condition to metrics that were already measured.
    pub fn judge(&self, class: &ClassUnit, metrics: &ClassMetrics) -> Option<Finding> {
        metrics
            .is_god_class(&self.thresholds)
            .then(|| self.finding(class, metrics))
    }

    fn finding(&self, class: &ClassUnit, metrics: &ClassMetrics) -> Finding {
        let t = &self.thresholds;
        Finding {
            rule_id: RULE_ID.to_string(),
            severity: Severity::Maintainability,
            debt_minutes: DEBT_MINUTES,
            signature: class.qualified_name.clone(),
            location: class.location.clone(),
            message: DESCRIPTION.to_string(),
            metrics: vec![
                Metric::new(
                    "WMC",
                    MetricValue::Integer(metrics.wmc),
                    MetricValue::Integer(t.weighted_method_count),
                ),
                Metric::new(
                    "TCC",
                    MetricValue::Ratio(metrics.tcc),
                    MetricValue::Ratio(t.tight_class_cohesion),
                ),
                Metric::new(
                    "ATFD",
                    MetricValue::Integer(metrics.atfd),
                    MetricValue::Integer(t.access_to_foreign_data),
                ),
            ],
        }
    }
}

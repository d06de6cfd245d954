use crate::adapters::json::source::JsonClassModelSource;
use crate::app::config::GodClassConfig;
use crate::app::dto::*;
use crate::domain::model::{ClassModel, ClassUnit};
use crate::domain::ports::{ClassModelSource, ComplexityOracle};
use crate::domain::verdict::{GodClassRule, measure};
use anyhow::{Context as _, Result, anyhow};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard};
use tracing::{debug, info, warn};

/// Lookup of a class name that is not in the loaded model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNotFound(pub String);

impl fmt::Display for ClassNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class not found: {}", self.0)
    }
}

impl std::error::Error for ClassNotFound {}

#[derive(Clone)]
pub struct GodClassEngine {
    inner: Arc<RwLock<EngineData>>,
}

struct EngineData {
    model_path: PathBuf,
    model: Arc<ClassModel>,
    config: GodClassConfig,
    rule: GodClassRule,
    oracle: Arc<dyn ComplexityOracle>,
}

impl GodClassEngine {
    /// Construct an engine from an already-loaded class model.
    ///
    /// Used for testing or when the model comes from a source other than a JSON file.
    pub fn from_prebuilt(
        model_path: PathBuf,
        model: ClassModel,
        config: GodClassConfig,
        oracle: Arc<dyn ComplexityOracle>,
    ) -> Self {
        let rule = GodClassRule::new(config.thresholds());
        Self {
            inner: Arc::new(RwLock::new(EngineData {
                model_path,
                model: Arc::new(model),
                config,
                rule,
                oracle,
            })),
        }
    }

    pub fn load_from_json(
        json_path: &Path,
        config: GodClassConfig,
        oracle: Arc<dyn ComplexityOracle>,
    ) -> Result<Self> {
        let model = load_model(json_path)?;
        Ok(Self::from_prebuilt(
            json_path.to_path_buf(),
            model,
            config,
            oracle,
        ))
    }

    /// Re-read the model file; configuration and oracle are kept.
    pub fn reload(&self) -> Result<HealthResponse> {
        let path = self.read()?.model_path.clone();
        let model = load_model(&path)?;

        let mut data = self
            .inner
            .write()
            .map_err(|_| anyhow!("engine state lock poisoned"))?;
        data.model = Arc::new(model);
        Ok(health_of(&data))
    }

    pub fn health(&self) -> Result<HealthResponse> {
        Ok(health_of(&*self.read()?))
    }

    /// Snapshot of the loaded model.
    pub fn model(&self) -> Result<Arc<ClassModel>> {
        Ok(self.read()?.model.clone())
    }

    pub fn evaluate(&self, req: EvaluateRequest) -> Result<ClassVerdict> {
        let data = self.read()?;
        let class = data
            .model
            .find_class(&req.class)
            .ok_or_else(|| ClassNotFound(req.class.clone()))?;
        Ok(verdict_for(&data, class, data.model.type_resolution))
    }

    /// Evaluate a class sent along with the request; it is taken as resolved.
    pub fn measure(&self, req: MeasureRequest) -> Result<ClassVerdict> {
        let data = self.read()?;
        Ok(verdict_for(&data, &req.class, true))
    }

    pub fn scan(&self, req: ScanRequest) -> Result<ScanResponse> {
        let filter = req
            .pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .context("Invalid class pattern")?;

        let data = self.read()?;
        if !data.model.type_resolution {
            warn!(
                model = %data.model_path.display(),
                "class model has no type resolution, GodClass is skipped"
            );
        }

        let mut evaluated_count = 0;
        let mut finding_count = 0;
        let mut items = Vec::new();

        for class in &data.model.classes {
            if let Some(re) = &filter
                && !re.is_match(&class.qualified_name)
            {
                continue;
            }

            evaluated_count += 1;
            let verdict = verdict_for(&data, class, data.model.type_resolution);
            if verdict.finding.is_some() {
                finding_count += 1;
                items.push(verdict);
            } else if req.include_clean {
                items.push(verdict);
            }
        }

        info!(evaluated_count, finding_count, "scan finished");

        Ok(ScanResponse {
            evaluated_count,
            finding_count,
            items,
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EngineData>> {
        self.inner
            .read()
            .map_err(|_| anyhow!("engine state lock poisoned"))
    }
}

fn load_model(path: &Path) -> Result<ClassModel> {
    let model = JsonClassModelSource::new(path).load()?;
    info!(
        path = %path.display(),
        classes = model.classes.len(),
        methods = model.method_count(),
        "loaded class model"
    );
    Ok(model)
}

fn health_of(data: &EngineData) -> HealthResponse {
    HealthResponse {
        model_path: data.model_path.to_string_lossy().to_string(),
        class_count: data.model.classes.len(),
        method_count: data.model.method_count(),
        type_resolution: data.model.type_resolution,
        active: data.config.active,
        thresholds: ThresholdsDto::from(data.rule.thresholds()),
    }
}

fn verdict_for(data: &EngineData, class: &ClassUnit, resolved: bool) -> ClassVerdict {
    let skipped = if !data.config.active {
        Some(SkipReason::RuleInactive)
    } else if !resolved {
        Some(SkipReason::NoTypeResolution)
    } else {
        None
    };
    if skipped.is_some() {
        return ClassVerdict {
            class: class.qualified_name.clone(),
            metrics: None,
            finding: None,
            skipped,
        };
    }

    let metrics = measure(class, data.oracle.as_ref());
    let finding = metrics.as_ref().and_then(|m| {
        debug!(
            class = %class.qualified_name,
            wmc = m.wmc,
            tcc = m.tcc,
            atfd = m.atfd,
            "measured class"
        );
        data.rule.judge(class, m)
    });

    ClassVerdict {
        class: class.qualified_name.clone(),
        metrics: metrics.as_ref().map(MetricsDto::from),
        finding: finding.map(FindingDto::from),
        skipped: None,
    }
}

//! End-to-end tests: write a class model file, load it through the engine, scan and evaluate.

mod common;

use std::io::Write;
use std::sync::Arc;

use common::fixtures::{dispatcher_class, model_json, stack_class};
use godclass::adapters::complexity::RecordedComplexity;
use godclass::app::config::{GodClassConfig, RuleSetConfig};
use godclass::app::dto::{EvaluateRequest, ScanRequest, SkipReason};
use godclass::app::engine::GodClassEngine;
use godclass::domain::model::ClassModel;
use godclass::domain::verdict::{MetricValue, RULE_ID, Severity};

fn write_model(model: &ClassModel) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(model_json(model).as_bytes())
        .expect("write model");
    file
}

fn load(file: &tempfile::NamedTempFile, config: GodClassConfig) -> GodClassEngine {
    GodClassEngine::load_from_json(file.path(), config, Arc::new(RecordedComplexity::new()))
        .expect("load model")
}

#[test]
fn test_small_stack_is_not_a_god_class() {
    let file = write_model(&ClassModel::resolved(vec![stack_class()]));
    let engine = load(&file, GodClassConfig::default());

    let verdict = engine
        .evaluate(EvaluateRequest {
            class: "app.Stack".into(),
        })
        .unwrap();
    let metrics = verdict.metrics.expect("stack declares methods");
    assert_eq!(metrics.wmc, 7);
    assert_eq!(metrics.atfd, 0);
    assert!((metrics.tcc - 0.6).abs() < 1e-9, "tcc = {}", metrics.tcc);
    assert!(verdict.finding.is_none());
    assert!(verdict.skipped.is_none());

    let scan = engine
        .scan(ScanRequest {
            pattern: None,
            include_clean: false,
        })
        .unwrap();
    assert_eq!(scan.evaluated_count, 1);
    assert_eq!(scan.finding_count, 0);
    assert!(scan.items.is_empty());
}

#[test]
fn test_dispatcher_reports_exactly_one_finding() {
    let file = write_model(&ClassModel::resolved(vec![
        stack_class(),
        dispatcher_class(),
    ]));
    let engine = load(&file, GodClassConfig::default());

    let scan = engine
        .scan(ScanRequest {
            pattern: None,
            include_clean: false,
        })
        .unwrap();
    assert_eq!(scan.evaluated_count, 2);
    assert_eq!(scan.finding_count, 1);
    assert_eq!(scan.items.len(), 1);

    let verdict = &scan.items[0];
    assert_eq!(verdict.class, "app.Dispatcher");
    let finding = verdict.finding.as_ref().unwrap();
    assert_eq!(finding.rule_id, RULE_ID);
    assert_eq!(finding.severity, Severity::Maintainability);
    assert_eq!(finding.debt_minutes, 20);
    assert_eq!(finding.signature, "app.Dispatcher");
    assert_eq!(finding.location.as_ref().unwrap().file_path, "Dispatcher.kt");

    let triples: Vec<_> = finding
        .metrics
        .iter()
        .map(|m| (m.name.as_str(), m.value, m.threshold))
        .collect();
    assert_eq!(
        triples,
        vec![
            ("WMC", MetricValue::Integer(48), MetricValue::Integer(47)),
            (
                "TCC",
                MetricValue::Ratio(1.0 / 28.0),
                MetricValue::Ratio(1.0 / 3.0)
            ),
            ("ATFD", MetricValue::Integer(6), MetricValue::Integer(5)),
        ]
    );
}

#[test]
fn test_config_file_thresholds_apply() {
    let file = write_model(&ClassModel::resolved(vec![dispatcher_class()]));
    let rules = RuleSetConfig::from_json(r#"{ "GodClass": { "WMC": 49 } }"#).unwrap();
    let engine = load(&file, rules.god_class);

    let verdict = engine
        .evaluate(EvaluateRequest {
            class: "app.Dispatcher".into(),
        })
        .unwrap();
    assert_eq!(verdict.metrics.unwrap().wmc, 48);
    assert!(verdict.finding.is_none());

    let strict = load(&file, GodClassConfig::default().with_overrides(Some(10), Some(2)));
    let verdict = strict
        .evaluate(EvaluateRequest {
            class: "app.Dispatcher".into(),
        })
        .unwrap();
    let finding = verdict.finding.unwrap();
    assert_eq!(finding.metrics[0].threshold, MetricValue::Integer(10));
    assert_eq!(finding.metrics[2].threshold, MetricValue::Integer(2));
}

#[test]
fn test_unresolved_model_produces_no_findings() {
    let mut model = ClassModel::resolved(vec![dispatcher_class()]);
    model.type_resolution = false;
    let file = write_model(&model);
    let engine = load(&file, GodClassConfig::default());

    let scan = engine
        .scan(ScanRequest {
            pattern: None,
            include_clean: true,
        })
        .unwrap();
    assert_eq!(scan.finding_count, 0);
    assert_eq!(scan.items.len(), 1);
    assert_eq!(scan.items[0].skipped, Some(SkipReason::NoTypeResolution));
    assert!(scan.items[0].metrics.is_none());
}

#[test]
fn test_reload_picks_up_rewritten_model() {
    let file = write_model(&ClassModel::resolved(vec![stack_class()]));
    let engine = load(&file, GodClassConfig::default());
    assert_eq!(engine.health().unwrap().class_count, 1);

    std::fs::write(
        file.path(),
        model_json(&ClassModel::resolved(vec![
            stack_class(),
            dispatcher_class(),
        ])),
    )
    .unwrap();
    let health = engine.reload().unwrap();
    assert_eq!(health.class_count, 2);
    assert_eq!(health.method_count, 14);
    assert!(
        engine
            .evaluate(EvaluateRequest {
                class: "app.Dispatcher".into()
            })
            .unwrap()
            .finding
            .is_some()
    );
}

#[test]
fn test_malformed_model_fails_to_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ \"classes\": [ { \"methods\": 3 } ] }")
        .unwrap();
    let result = GodClassEngine::load_from_json(
        file.path(),
        GodClassConfig::default(),
        Arc::new(RecordedComplexity::new()),
    );
    assert!(result.is_err());
}

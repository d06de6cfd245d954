use crate::app::dto::{ClassVerdict, EvaluateRequest, FindingDto, ScanRequest};
use crate::app::engine::GodClassEngine;
use crate::domain::access::map_local_accesses;
use crate::domain::cohesion::max_method_pairs;
use crate::domain::foreign::foreign_data_providers;
use anyhow::Result;

/// Print the loaded class model as JSON, with the per-method local accesses and foreign data
/// providers each metric is computed from.
pub fn dump_model(engine: &GodClassEngine) -> Result<()> {
    let model = engine.model()?;

    let mut classes = Vec::new();
    for class in &model.classes {
        let accesses = map_local_accesses(class);

        let methods: Vec<_> = class
            .methods
            .iter()
            .map(|method| {
                let mut method_json = serde_json::json!({
                    "qualified_name": method.qualified_name,
                    "has_body": method.references().is_some(),
                });
                if let Some(complexity) = method.complexity {
                    method_json["complexity"] = serde_json::json!(complexity);
                }
                if let Some(references) = method.references() {
                    method_json["reference_count"] = serde_json::json!(references.len());
                    method_json["local_accesses"] =
                        serde_json::json!(accesses.get(&method.qualified_name));
                    method_json["foreign_data_providers"] = serde_json::json!(
                        foreign_data_providers(references, &class.qualified_name)
                    );
                }
                method_json
            })
            .collect();

        classes.push(serde_json::json!({
            "qualified_name": class.qualified_name,
            "property_count": class.properties.len(),
            "method_pairs": max_method_pairs(accesses.len()),
            "methods": methods,
        }));
    }

    let output = serde_json::json!({
        "type_resolution": model.type_resolution,
        "class_count": model.classes.len(),
        "method_count": model.method_count(),
        "classes": classes,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn evaluate_class(engine: &GodClassEngine, class: &str, json: bool) -> Result<()> {
    let verdict = engine.evaluate(EvaluateRequest {
        class: class.to_string(),
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    println!("Evaluating class: {}", class);
    println!("{}", "=".repeat(80));
    print_verdict(&verdict);
    Ok(())
}

pub fn scan_classes(
    engine: &GodClassEngine,
    pattern: Option<&str>,
    include_clean: bool,
    json: bool,
) -> Result<()> {
    let result = engine.scan(ScanRequest {
        pattern: pattern.map(String::from),
        include_clean,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let filter_msg = pattern
        .map(|p| format!(" matching \"{}\"", p))
        .unwrap_or_default();
    println!(
        "Evaluated {} class(es){}: {} God Class finding(s)",
        result.evaluated_count, filter_msg, result.finding_count
    );
    println!("{}", "=".repeat(80));

    for (i, item) in result.items.iter().enumerate() {
        print!("{}. ", i + 1);
        print_verdict(item);
        println!();
    }

    Ok(())
}

fn print_verdict(verdict: &ClassVerdict) {
    let status = match (&verdict.skipped, &verdict.finding) {
        (Some(reason), _) => format!("skipped ({:?})", reason),
        (None, Some(_)) => "GOD CLASS".to_string(),
        (None, None) => "ok".to_string(),
    };
    println!("[{}] {}", status, verdict.class);

    match &verdict.metrics {
        Some(m) => println!("   WMC: {:>6}   TCC: {:>6.3}   ATFD: {:>4}", m.wmc, m.tcc, m.atfd),
        None if verdict.skipped.is_none() => println!("   no methods, nothing measured"),
        None => {}
    }

    if let Some(finding) = &verdict.finding {
        print_finding(finding);
    }
}

fn print_finding(finding: &FindingDto) {
    if let Some(loc) = &finding.location {
        println!(
            "   at {}:{}:{}",
            loc.file_path,
            loc.span.start_line_1based,
            loc.span.start_column.saturating_add(1)
        );
    }
    println!("   {} ({} min debt)", finding.message, finding.debt_minutes);
    for metric in &finding.metrics {
        println!(
            "     {:<5} {:>8.3} (threshold {:.3})",
            metric.name,
            metric.value.as_f64(),
            metric.threshold.as_f64()
        );
    }
}

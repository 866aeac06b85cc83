//! Assessment Report Generation
//!
//! Builds a serializable summary of a classification run for the console
//! dashboard and for JSON export to other tooling. Reports are derived
//! fresh from a (stage, reading) pair and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::breakdown::{ParameterDetail, breakdown, partition};
use crate::model::{FieldReading, Stage, SuitabilityError};
use crate::registry;
use crate::suitability::classify::classify;

// ============================================================================
// Report structures
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterReport {
    pub name: String,
    pub unit: String,
    pub value: f64,
    pub optimal_min: f64,
    /// `None` encodes an open-ended upper bound (infinity is not
    /// representable in JSON).
    pub optimal_max: Option<f64>,
    pub in_optimal_range: bool,
    pub suitability_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// RFC 3339 timestamp of report generation.
    pub generated_at: String,
    pub stage: String,
    pub category: String,
    pub advisory: String,
    pub optimal_count: usize,
    pub total_count: usize,
    pub percentage: f64,
    /// Names of parameters inside their locust-optimal range.
    pub optimal_parameters: Vec<String>,
    /// Names of parameters outside their locust-optimal range.
    pub safe_parameters: Vec<String>,
    pub field_note: String,
    pub parameters: Vec<ParameterReport>,
}

// ============================================================================
// Report construction
// ============================================================================

/// Builds a report for a reading at an explicit generation time.
///
/// # Clock injection
/// Takes `now` as a parameter rather than calling `Utc::now()` internally,
/// so report output is fully deterministic in tests.
pub fn build_report_at(
    stage: Stage,
    reading: &[FieldReading],
    now: DateTime<Utc>,
) -> Result<AssessmentReport, SuitabilityError> {
    let assessment = classify(stage, reading)?;
    let details = breakdown(stage, reading)?;
    let (optimal, safe) = partition(&details);

    Ok(AssessmentReport {
        generated_at: now.to_rfc3339(),
        stage: stage.label().to_string(),
        category: assessment.category.display_text().to_string(),
        advisory: assessment.category.advisory().to_string(),
        optimal_count: assessment.optimal_count,
        total_count: assessment.total_count,
        percentage: assessment.percentage,
        optimal_parameters: optimal.iter().map(|d| d.parameter.label().to_string()).collect(),
        safe_parameters: safe.iter().map(|d| d.parameter.label().to_string()).collect(),
        field_note: registry::profile(stage).field_note.to_string(),
        parameters: details.iter().map(parameter_report).collect(),
    })
}

/// Convenience wrapper that stamps the report with the current time.
/// Use `build_report_at` in tests to keep output deterministic.
pub fn build_report(
    stage: Stage,
    reading: &[FieldReading],
) -> Result<AssessmentReport, SuitabilityError> {
    build_report_at(stage, reading, Utc::now())
}

fn parameter_report(detail: &ParameterDetail) -> ParameterReport {
    ParameterReport {
        name: detail.parameter.label().to_string(),
        unit: detail.parameter.unit().to_string(),
        value: detail.value,
        optimal_min: detail.optimal_min,
        optimal_max: detail.optimal_max.is_finite().then_some(detail.optimal_max),
        in_optimal_range: detail.in_optimal_range,
        suitability_percent: detail.suitability_percent,
    }
}

// ============================================================================
// Rendering
// ============================================================================

const BAR_WIDTH: usize = 20;

fn suitability_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn range_label(min: f64, max: Option<f64>) -> String {
    match max {
        Some(max) => format!("{}-{}", min, max),
        None => format!(">= {}", min),
    }
}

/// Renders a report for the console dashboard.
pub fn render_text(report: &AssessmentReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Locust suitability assessment: {} stage\n",
        report.stage
    ));
    out.push_str(&format!("Generated: {}\n\n", report.generated_at));

    for p in &report.parameters {
        let status = if p.in_optimal_range { "OPTIMAL" } else { "safe" };
        out.push_str(&format!(
            "  {:<20} {:>8.1} {:<4} optimal {:<9} {:<8} {} {:>3.0}%\n",
            p.name,
            p.value,
            p.unit,
            range_label(p.optimal_min, p.optimal_max),
            status,
            suitability_bar(p.suitability_percent),
            p.suitability_percent,
        ));
    }

    out.push_str(&format!(
        "\nParameters in locust-optimal range: {}/{} ({:.1}%)\n",
        report.optimal_count, report.total_count, report.percentage
    ));
    if !report.optimal_parameters.is_empty() {
        out.push_str(&format!("  Locust-optimal: {}\n", report.optimal_parameters.join(", ")));
    }
    if !report.safe_parameters.is_empty() {
        out.push_str(&format!("  Safe: {}\n", report.safe_parameters.join(", ")));
    }
    out.push_str(&format!("Threat category: {}\n", report.category));
    out.push_str(&format!("Advisory: {}\n", report.advisory));
    out.push_str(&format!("Note: {}\n", report.field_note));
    out
}

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &AssessmentReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parameter;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 15, 9, 0, 0).unwrap()
    }

    fn adult_reading() -> Vec<FieldReading> {
        vec![
            FieldReading { parameter: Parameter::Rainfall, value: 25.0 },
            FieldReading { parameter: Parameter::SurfaceWindSpeed, value: 5.0 },
            FieldReading { parameter: Parameter::SoilTemperature, value: 25.0 },
            FieldReading { parameter: Parameter::AirTemperature, value: 25.0 },
        ]
    }

    #[test]
    fn test_report_carries_the_assessment_summary() {
        let report = build_report_at(Stage::Adult, &adult_reading(), fixed_now())
            .expect("valid reading should build a report");
        assert_eq!(report.stage, "Adult");
        assert_eq!(report.category, "SAFE CONDITIONS");
        assert_eq!(report.optimal_count, 1);
        assert_eq!(report.total_count, 4);
        assert_eq!(report.percentage, 25.0);
        assert_eq!(report.generated_at, "2026-07-15T09:00:00+00:00");
    }

    #[test]
    fn test_report_partitions_parameters_by_membership() {
        let report = build_report_at(Stage::Adult, &adult_reading(), fixed_now())
            .expect("valid reading");
        assert_eq!(report.optimal_parameters, vec!["Rainfall"]);
        assert_eq!(
            report.safe_parameters,
            vec!["Surface Wind Speed", "Soil Temperature", "Air Temperature"]
        );
    }

    #[test]
    fn test_open_ended_bound_serializes_as_null() {
        let reading = vec![
            FieldReading { parameter: Parameter::Rainfall, value: 25.0 },
            FieldReading { parameter: Parameter::WindSpeed850hPa, value: 7.0 },
            FieldReading { parameter: Parameter::AirTemperature, value: 24.0 },
            FieldReading { parameter: Parameter::VegetationNdvi, value: 0.6 },
        ];
        let report = build_report_at(Stage::Swarm, &reading, fixed_now()).expect("valid reading");
        let json = to_json(&report).expect("report should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        let wind = &value["parameters"][1];
        assert_eq!(wind["name"], "Wind Speed 850hPa");
        assert!(wind["optimal_max"].is_null(), "open bound must serialize as null");
        assert_eq!(value["parameters"][0]["optimal_max"], 28.0);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = build_report_at(Stage::Adult, &adult_reading(), fixed_now())
            .expect("valid reading");
        let json = to_json(&report).expect("should serialize");
        let back: AssessmentReport = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back.category, report.category);
        assert_eq!(back.parameters.len(), report.parameters.len());
    }

    #[test]
    fn test_text_rendering_mentions_category_and_counts() {
        let report = build_report_at(Stage::Adult, &adult_reading(), fixed_now())
            .expect("valid reading");
        let text = render_text(&report);
        assert!(text.contains("SAFE CONDITIONS"), "category missing from:\n{}", text);
        assert!(text.contains("1/4 (25.0%)"), "counts missing from:\n{}", text);
        assert!(text.contains("Increased") || text.contains("routine"), "advisory missing from:\n{}", text);
    }

    #[test]
    fn test_text_rendering_labels_open_ended_ranges() {
        let reading = vec![
            FieldReading { parameter: Parameter::Rainfall, value: 25.0 },
            FieldReading { parameter: Parameter::WindSpeed850hPa, value: 7.0 },
            FieldReading { parameter: Parameter::AirTemperature, value: 24.0 },
            FieldReading { parameter: Parameter::VegetationNdvi, value: 0.6 },
        ];
        let report = build_report_at(Stage::Swarm, &reading, fixed_now()).expect("valid reading");
        let text = render_text(&report);
        assert!(text.contains(">= 6"), "open range label missing from:\n{}", text);
    }

    #[test]
    fn test_suitability_bar_bounds() {
        assert_eq!(suitability_bar(0.0), format!("[{}]", ".".repeat(20)));
        assert_eq!(suitability_bar(100.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(suitability_bar(50.0), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
    }

    #[test]
    fn test_build_report_rejects_invalid_reading() {
        let err = build_report_at(Stage::Adult, &[], fixed_now());
        assert!(matches!(err, Err(SuitabilityError::ParameterSetMismatch { .. })));
    }
}

//! Per-parameter breakdown of a reading.
//!
//! Turns a validated reading into display rows carrying interval
//! membership, the charting score, and the bar position for each
//! parameter. Rows come back in registry order regardless of input order,
//! so reports render consistently.

use crate::model::{FieldReading, Parameter, Stage, SuitabilityError};
use crate::registry;
use crate::suitability::classify::validate_reading;
use crate::suitability::scoring::{normalize, parameter_suitability_percent};

/// One display row of an assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDetail {
    pub parameter: Parameter,
    pub value: f64,
    pub optimal_min: f64,
    /// `f64::INFINITY` for open-ended intervals.
    pub optimal_max: f64,
    /// Whether the value sits inside the locust-optimal interval.
    pub in_optimal_range: bool,
    /// Charting score in [0, 100].
    pub suitability_percent: f64,
    /// Bar position in [0, 1] on the parameter's display scale.
    pub position: f64,
}

/// Builds detail rows for a reading, in registry order.
///
/// The reading is validated against the stage's parameter set first, so a
/// successful breakdown always has one row per registered parameter.
pub fn breakdown(
    stage: Stage,
    reading: &[FieldReading],
) -> Result<Vec<ParameterDetail>, SuitabilityError> {
    let profile = registry::profile(stage);
    validate_reading(profile, reading)?;

    let mut rows = Vec::with_capacity(profile.thresholds.len());
    for threshold in profile.thresholds {
        // Validation guarantees exactly one entry per registered parameter.
        let Some(entry) = reading.iter().find(|r| r.parameter == threshold.parameter) else {
            continue;
        };
        rows.push(ParameterDetail {
            parameter: threshold.parameter,
            value: entry.value,
            optimal_min: threshold.optimal_min,
            optimal_max: threshold.optimal_max,
            in_optimal_range: threshold.contains(entry.value),
            suitability_percent: parameter_suitability_percent(
                stage,
                threshold.parameter,
                entry.value,
            )?,
            position: normalize(threshold.parameter, entry.value),
        });
    }
    Ok(rows)
}

/// Splits detail rows into (locust-optimal, safe) sets for the report's
/// parameter analysis section.
pub fn partition(details: &[ParameterDetail]) -> (Vec<&ParameterDetail>, Vec<&ParameterDetail>) {
    details.iter().partition(|d| d.in_optimal_range)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

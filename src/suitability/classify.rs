//! Stage suitability classification.
//!
//! The core rule evaluator: counts how many of a reading's parameters sit
//! inside the locust-optimal interval registered for the selected stage,
//! and maps the resulting percentage onto a threat category. Stateless and
//! deterministic; the threshold tables are read-only statics, so calls are
//! safe from any number of threads.

use std::collections::HashSet;

use crate::model::{Assessment, FieldReading, Parameter, Stage, SuitabilityError, ThreatCategory};
use crate::registry::{self, StageProfile};

/// Checks that a reading set matches a stage's registered parameter set
/// exactly.
///
/// Rejections are deterministic: a duplicated parameter is reported as
/// such, and any other difference is reported with the full missing and
/// unexpected lists.
pub fn validate_reading(
    profile: &StageProfile,
    reading: &[FieldReading],
) -> Result<(), SuitabilityError> {
    let mut supplied = HashSet::new();
    for entry in reading {
        if !supplied.insert(entry.parameter) {
            return Err(SuitabilityError::DuplicateParameter {
                stage: profile.stage,
                parameter: entry.parameter,
            });
        }
    }

    let missing: Vec<Parameter> = profile
        .parameters()
        .filter(|p| !supplied.contains(p))
        .collect();
    let unexpected: Vec<Parameter> = reading
        .iter()
        .map(|r| r.parameter)
        .filter(|p| profile.threshold_for(*p).is_none())
        .collect();

    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(SuitabilityError::ParameterSetMismatch {
            stage: profile.stage,
            missing,
            unexpected,
        });
    }
    Ok(())
}

/// Classifies a reading set for a stage.
///
/// Each value is tested for inclusive membership in its optimal interval;
/// the share of members determines the category. Values outside the
/// display scale are compared as given. The reading must contain exactly
/// the parameters registered for the stage.
pub fn classify(stage: Stage, reading: &[FieldReading]) -> Result<Assessment, SuitabilityError> {
    let profile = registry::profile(stage);
    if profile.thresholds.is_empty() {
        // Cannot occur with the shipped registry; rejected rather than
        // dividing by zero.
        return Err(SuitabilityError::EmptyParameterSet(stage));
    }
    validate_reading(profile, reading)?;

    let optimal_count = reading
        .iter()
        .filter(|r| {
            profile
                .threshold_for(r.parameter)
                .is_some_and(|t| t.contains(r.value))
        })
        .count();
    let total_count = reading.len();
    let percentage = optimal_count as f64 / total_count as f64 * 100.0;

    Ok(Assessment {
        stage,
        category: ThreatCategory::from_percentage(percentage),
        optimal_count,
        total_count,
        percentage,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Display metrics for parameter visualization.
//!
//! These scores drive bars and charts only. Risk classification uses the
//! binary interval membership in `classify`, never these values.

use crate::model::{Parameter, Stage, SuitabilityError};
use crate::registry;

/// Position of a value within the parameter's display scale, clamped to
/// [0, 1]. Out-of-scale values pin to the nearest end.
pub fn normalize(parameter: Parameter, value: f64) -> f64 {
    let scale = registry::scale(parameter);
    ((value - scale.min) / scale.span()).clamp(0.0, 1.0)
}

/// Per-parameter suitability score in [0, 100] for charting.
///
/// Linear interpolation across the optimal interval when the upper bound
/// is finite; a 0/100 step at the lower bound when it is open-ended.
/// Independent from the membership test used in classification: a value
/// just above the optimal maximum scores 100 here while not counting as
/// optimal there.
pub fn parameter_suitability_percent(
    stage: Stage,
    parameter: Parameter,
    value: f64,
) -> Result<f64, SuitabilityError> {
    let threshold = registry::profile(stage)
        .threshold_for(parameter)
        .ok_or(SuitabilityError::NotApplicable { stage, parameter })?;

    if threshold.optimal_max.is_finite() {
        let span = threshold.optimal_max - threshold.optimal_min;
        Ok(((value - threshold.optimal_min) / span * 100.0).clamp(0.0, 100.0))
    } else if value >= threshold.optimal_min {
        Ok(100.0)
    } else {
        Ok(0.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

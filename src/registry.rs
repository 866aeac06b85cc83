/// stage profile registry, the threshold-table invariant tests live here
/// a map of life stages to metadata (field note, which parameters apply, optimal ranges).
/// Stage registry for the locust suitability monitoring service.
///
/// Defines the canonical optimal-condition table for each locust life
/// stage, along with the display scale and default input value for each
/// parameter. This is the single source of truth for thresholds; all
/// other modules should reference ranges from here rather than hardcoding
/// values.
///
/// Optimal ranges follow Cressman & Stefanski (2016), Weather and Desert
/// Locusts, FAO Rome.

use crate::model::{FieldReading, Parameter, Stage};

// ---------------------------------------------------------------------------
// Threshold types
// ---------------------------------------------------------------------------

/// Locust-optimal interval for one parameter at one stage.
///
/// Both ends are inclusive. An `optimal_max` of `f64::INFINITY` encodes an
/// open upper bound (any value at or above `optimal_min` qualifies).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterThreshold {
    pub parameter: Parameter,
    pub optimal_min: f64,
    pub optimal_max: f64,
}

impl ParameterThreshold {
    /// Inclusive interval membership. The upper comparison is always
    /// satisfied when the bound is infinite.
    pub fn contains(&self, value: f64) -> bool {
        self.optimal_min <= value && value <= self.optimal_max
    }

    /// Human-readable range, e.g. "20-28" or ">= 6".
    pub fn range_label(&self) -> String {
        if self.optimal_max.is_finite() {
            format!("{}-{}", self.optimal_min, self.optimal_max)
        } else {
            format!(">= {}", self.optimal_min)
        }
    }
}

/// Optimal-condition profile for a single life stage.
pub struct StageProfile {
    pub stage: Stage,
    /// One-line field guidance shown at the bottom of reports.
    pub field_note: &'static str,
    /// Which parameters this stage is assessed on, with their optimal
    /// ranges. The set is stage-specific.
    pub thresholds: &'static [ParameterThreshold],
}

impl StageProfile {
    /// The parameters registered for this stage, in registry order.
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.thresholds.iter().map(|t| t.parameter)
    }

    /// Looks up the threshold for a parameter. Returns `None` if the
    /// parameter is not assessed at this stage.
    pub fn threshold_for(&self, parameter: Parameter) -> Option<&ParameterThreshold> {
        self.thresholds.iter().find(|t| t.parameter == parameter)
    }
}

// ---------------------------------------------------------------------------
// Stage profiles
// ---------------------------------------------------------------------------

static EGG_LAYING: StageProfile = StageProfile {
    stage: Stage::EggLaying,
    field_note: "Egg laying creates the foundation for a population upsurge. \
                 Moist soil and moderate temperatures are ideal breeding conditions.",
    thresholds: &[
        ParameterThreshold { parameter: Parameter::Rainfall, optimal_min: 20.0, optimal_max: 28.0 },
        ParameterThreshold { parameter: Parameter::SoilMoisture, optimal_min: 20.0, optimal_max: 40.0 },
        ParameterThreshold { parameter: Parameter::SoilTemperature, optimal_min: 15.0, optimal_max: 35.0 },
        ParameterThreshold { parameter: Parameter::AirTemperature, optimal_min: 18.0, optimal_max: 35.0 },
    ],
};

static HOPPER: StageProfile = StageProfile {
    stage: Stage::Hopper,
    field_note: "Hoppers form marching bands. Calm winds and warm air support \
                 rapid development and keep bands together.",
    thresholds: &[
        ParameterThreshold { parameter: Parameter::Rainfall, optimal_min: 20.0, optimal_max: 28.0 },
        ParameterThreshold { parameter: Parameter::SurfaceWindSpeed, optimal_min: 0.0, optimal_max: 2.0 },
        ParameterThreshold { parameter: Parameter::AirTemperature, optimal_min: 22.0, optimal_max: 34.0 },
    ],
};

static ADULT: StageProfile = StageProfile {
    stage: Stage::Adult,
    field_note: "Adults are highly mobile. Specific wind and temperature \
                 conditions favor long-distance migration.",
    thresholds: &[
        ParameterThreshold { parameter: Parameter::Rainfall, optimal_min: 20.0, optimal_max: 28.0 },
        ParameterThreshold { parameter: Parameter::SurfaceWindSpeed, optimal_min: 6.0, optimal_max: 8.0 },
        ParameterThreshold { parameter: Parameter::SoilTemperature, optimal_min: 15.0, optimal_max: 24.0 },
        ParameterThreshold { parameter: Parameter::AirTemperature, optimal_min: 20.0, optimal_max: 22.0 },
    ],
};

static SWARM: StageProfile = StageProfile {
    stage: Stage::Swarm,
    field_note: "Swarm formation is the most destructive phase. Dense vegetation \
                 and sustained winds aloft trigger mass movement.",
    thresholds: &[
        ParameterThreshold { parameter: Parameter::Rainfall, optimal_min: 20.0, optimal_max: 28.0 },
        ParameterThreshold { parameter: Parameter::WindSpeed850hPa, optimal_min: 6.0, optimal_max: f64::INFINITY },
        ParameterThreshold { parameter: Parameter::AirTemperature, optimal_min: 23.0, optimal_max: 26.0 },
        ParameterThreshold { parameter: Parameter::VegetationNdvi, optimal_min: 0.5, optimal_max: 1.0 },
    ],
};

/// All stage profiles, in life-cycle order.
pub static STAGE_REGISTRY: &[&StageProfile] = &[&EGG_LAYING, &HOPPER, &ADULT, &SWARM];

/// Looks up the profile for a stage.
///
/// The match is exhaustive: adding a stage without registering its
/// thresholds fails to compile rather than failing at lookup time.
pub const fn profile(stage: Stage) -> &'static StageProfile {
    match stage {
        Stage::EggLaying => &EGG_LAYING,
        Stage::Hopper => &HOPPER,
        Stage::Adult => &ADULT,
        Stage::Swarm => &SWARM,
    }
}

// ---------------------------------------------------------------------------
// Display scales
// ---------------------------------------------------------------------------

/// Display range and default input value for one parameter.
///
/// Used only for normalization and input seeding, never for
/// classification. Values outside the scale are still classified as
/// given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterScale {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParameterScale {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Display scale for a parameter. Exhaustive for the same reason as
/// `profile`.
pub const fn scale(parameter: Parameter) -> ParameterScale {
    match parameter {
        Parameter::Rainfall => ParameterScale { min: 0.0, max: 50.0, default: 25.0 },
        Parameter::SoilMoisture => ParameterScale { min: 0.0, max: 50.0, default: 30.0 },
        Parameter::SoilTemperature => ParameterScale { min: 15.0, max: 50.0, default: 25.0 },
        Parameter::AirTemperature => ParameterScale { min: 15.0, max: 50.0, default: 25.0 },
        Parameter::SurfaceWindSpeed => ParameterScale { min: 0.0, max: 10.0, default: 5.0 },
        Parameter::WindSpeed850hPa => ParameterScale { min: 0.0, max: 10.0, default: 5.0 },
        Parameter::VegetationNdvi => ParameterScale { min: 0.0, max: 1.0, default: 0.5 },
    }
}

/// Builds a reading set for a stage from the default input values, one
/// entry per registered parameter. Used to seed the CLI when the operator
/// omits a measurement.
pub fn default_reading(stage: Stage) -> Vec<FieldReading> {
    profile(stage)
        .thresholds
        .iter()
        .map(|t| FieldReading { parameter: t.parameter, value: scale(t.parameter).default })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

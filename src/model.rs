/// Stage, Parameter, FieldReading, Assessment, SuitabilityError
/// core data structures and error handling
///
/// Core data types for the locust suitability monitoring service.
///
/// This module defines the shared domain model imported by all other
/// modules. It contains no I/O and no external dependencies, only types
/// plus their parse and format impls.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Life stages
// ---------------------------------------------------------------------------

/// Desert locust life-cycle stage selected for an assessment.
///
/// Each stage has its own set of monitored parameters and optimal ranges,
/// registered in `registry::STAGE_REGISTRY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    EggLaying,
    Hopper,
    Adult,
    Swarm,
}

impl Stage {
    /// All stages, in life-cycle order.
    pub const ALL: [Stage; 4] = [Stage::EggLaying, Stage::Hopper, Stage::Adult, Stage::Swarm];

    /// Human-readable label, as shown on reports.
    pub fn label(self) -> &'static str {
        match self {
            Stage::EggLaying => "Egg Laying",
            Stage::Hopper => "Hopper",
            Stage::Adult => "Adult",
            Stage::Swarm => "Swarm",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Stage {
    type Err = SuitabilityError;

    /// Accepts the CLI spellings of a stage name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "egg-laying" | "egg_laying" | "egg laying" | "egglaying" | "egg" => Ok(Stage::EggLaying),
            "hopper" => Ok(Stage::Hopper),
            "adult" => Ok(Stage::Adult),
            "swarm" => Ok(Stage::Swarm),
            _ => Err(SuitabilityError::UnknownStage(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Environmental parameter measured in the field.
///
/// Not every parameter applies to every stage; the applicable subset is
/// defined by the stage's registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Rainfall,
    SoilMoisture,
    SoilTemperature,
    AirTemperature,
    SurfaceWindSpeed,
    WindSpeed850hPa,
    VegetationNdvi,
}

impl Parameter {
    /// All parameters known to the service.
    pub const ALL: [Parameter; 7] = [
        Parameter::Rainfall,
        Parameter::SoilMoisture,
        Parameter::SoilTemperature,
        Parameter::AirTemperature,
        Parameter::SurfaceWindSpeed,
        Parameter::WindSpeed850hPa,
        Parameter::VegetationNdvi,
    ];

    /// Human-readable label, as shown on reports.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Rainfall => "Rainfall",
            Parameter::SoilMoisture => "Soil Moisture",
            Parameter::SoilTemperature => "Soil Temperature",
            Parameter::AirTemperature => "Air Temperature",
            Parameter::SurfaceWindSpeed => "Surface Wind Speed",
            Parameter::WindSpeed850hPa => "Wind Speed 850hPa",
            Parameter::VegetationNdvi => "Vegetation (NDVI)",
        }
    }

    /// Measurement unit. NDVI is a dimensionless index.
    pub fn unit(self) -> &'static str {
        match self {
            Parameter::Rainfall => "mm",
            Parameter::SoilMoisture => "%",
            Parameter::SoilTemperature => "°C",
            Parameter::AirTemperature => "°C",
            Parameter::SurfaceWindSpeed => "m/s",
            Parameter::WindSpeed850hPa => "m/s",
            Parameter::VegetationNdvi => "",
        }
    }

    /// Stable key used on the command line and in log context.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::Rainfall => "rainfall",
            Parameter::SoilMoisture => "soil-moisture",
            Parameter::SoilTemperature => "soil-temperature",
            Parameter::AirTemperature => "air-temperature",
            Parameter::SurfaceWindSpeed => "surface-wind",
            Parameter::WindSpeed850hPa => "wind-850hpa",
            Parameter::VegetationNdvi => "ndvi",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Parameter {
    type Err = SuitabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rainfall" => Ok(Parameter::Rainfall),
            "soil-moisture" | "soil_moisture" => Ok(Parameter::SoilMoisture),
            "soil-temperature" | "soil_temperature" => Ok(Parameter::SoilTemperature),
            "air-temperature" | "air_temperature" => Ok(Parameter::AirTemperature),
            "surface-wind" | "surface-wind-speed" => Ok(Parameter::SurfaceWindSpeed),
            "wind-850hpa" | "wind-speed-850hpa" => Ok(Parameter::WindSpeed850hPa),
            "ndvi" | "vegetation" => Ok(Parameter::VegetationNdvi),
            _ => Err(SuitabilityError::UnknownParameter(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// A single operator-entered measurement.
///
/// A reading set passed to the classifier must contain exactly one entry
/// for each parameter registered for the selected stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldReading {
    pub parameter: Parameter,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Assessment types
// ---------------------------------------------------------------------------

/// Threat category derived from the share of parameters sitting inside
/// their locust-optimal range. Optimal for locusts means dangerous for
/// crops, so a high share maps to high danger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatCategory {
    HighDanger,
    ModerateDanger,
    SafeConditions,
}

impl ThreatCategory {
    /// Category for a given percentage of optimal parameters.
    ///
    /// Boundaries are closed on the lower end: exactly 80.0 is high danger
    /// and exactly 50.0 is moderate danger.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            ThreatCategory::HighDanger
        } else if percentage >= 50.0 {
            ThreatCategory::ModerateDanger
        } else {
            ThreatCategory::SafeConditions
        }
    }

    pub fn display_text(self) -> &'static str {
        match self {
            ThreatCategory::HighDanger => "HIGH DANGER",
            ThreatCategory::ModerateDanger => "MODERATE DANGER",
            ThreatCategory::SafeConditions => "SAFE CONDITIONS",
        }
    }

    /// Recommended operator response for this category.
    pub fn advisory(self) -> &'static str {
        match self {
            ThreatCategory::HighDanger => "Immediate monitoring required",
            ThreatCategory::ModerateDanger => "Increased surveillance needed",
            ThreatCategory::SafeConditions => "Continue routine monitoring",
        }
    }
}

impl fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

/// Result of classifying one reading set. Derived on every call, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub stage: Stage,
    pub category: ThreatCategory,
    pub optimal_count: usize,
    pub total_count: usize,
    pub percentage: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when validating or classifying a reading set.
///
/// All of these reflect caller misuse or a registry defect rather than a
/// transient condition; none are retryable.
#[derive(Debug, Clone, PartialEq)]
pub enum SuitabilityError {
    /// A stage name string did not parse to a known stage.
    UnknownStage(String),
    /// A parameter name string did not parse to a known parameter.
    UnknownParameter(String),
    /// The reading's parameter set does not match the stage's registered
    /// parameter set exactly.
    ParameterSetMismatch {
        stage: Stage,
        missing: Vec<Parameter>,
        unexpected: Vec<Parameter>,
    },
    /// The reading lists the same parameter more than once.
    DuplicateParameter { stage: Stage, parameter: Parameter },
    /// A per-parameter score was requested for a parameter not registered
    /// for the stage.
    NotApplicable { stage: Stage, parameter: Parameter },
    /// The stage has no registered parameters, so no percentage can be
    /// computed. Guarded against even though the shipped registry never
    /// produces it.
    EmptyParameterSet(Stage),
}

impl fmt::Display for SuitabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuitabilityError::UnknownStage(name) => {
                write!(f, "unknown stage '{}' (expected egg-laying, hopper, adult, or swarm)", name)
            }
            SuitabilityError::UnknownParameter(name) => {
                write!(f, "unknown parameter '{}'", name)
            }
            SuitabilityError::ParameterSetMismatch { stage, missing, unexpected } => {
                write!(f, "reading does not match the {} parameter set", stage)?;
                if !missing.is_empty() {
                    write!(f, "; missing: {}", join_labels(missing))?;
                }
                if !unexpected.is_empty() {
                    write!(f, "; unexpected: {}", join_labels(unexpected))?;
                }
                Ok(())
            }
            SuitabilityError::DuplicateParameter { stage, parameter } => {
                write!(f, "duplicate {} entry in {} reading", parameter, stage)
            }
            SuitabilityError::NotApplicable { stage, parameter } => {
                write!(f, "{} is not monitored for the {} stage", parameter, stage)
            }
            SuitabilityError::EmptyParameterSet(stage) => {
                write!(f, "no parameters registered for the {} stage", stage)
            }
        }
    }
}

impl std::error::Error for SuitabilityError {}

fn join_labels(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries_are_closed_on_the_lower_end() {
        assert_eq!(ThreatCategory::from_percentage(80.0), ThreatCategory::HighDanger);
        assert_eq!(ThreatCategory::from_percentage(79.999), ThreatCategory::ModerateDanger);
        assert_eq!(ThreatCategory::from_percentage(50.0), ThreatCategory::ModerateDanger);
        assert_eq!(ThreatCategory::from_percentage(49.999), ThreatCategory::SafeConditions);
    }

    #[test]
    fn test_category_extremes() {
        assert_eq!(ThreatCategory::from_percentage(100.0), ThreatCategory::HighDanger);
        assert_eq!(ThreatCategory::from_percentage(0.0), ThreatCategory::SafeConditions);
    }

    #[test]
    fn test_stage_parses_case_insensitively() {
        assert_eq!("Swarm".parse::<Stage>(), Ok(Stage::Swarm));
        assert_eq!("egg-laying".parse::<Stage>(), Ok(Stage::EggLaying));
        assert_eq!("Egg Laying".parse::<Stage>(), Ok(Stage::EggLaying));
        assert_eq!("HOPPER".parse::<Stage>(), Ok(Stage::Hopper));
    }

    #[test]
    fn test_unknown_stage_is_rejected() {
        let err = "larva".parse::<Stage>();
        assert_eq!(err, Err(SuitabilityError::UnknownStage("larva".to_string())));
    }

    #[test]
    fn test_parameter_parses_cli_keys() {
        for parameter in Parameter::ALL {
            assert_eq!(
                parameter.key().parse::<Parameter>(),
                Ok(parameter),
                "key '{}' should round-trip",
                parameter.key()
            );
        }
    }

    #[test]
    fn test_unknown_parameter_is_rejected() {
        assert!("humidity".parse::<Parameter>().is_err());
    }

    #[test]
    fn test_mismatch_error_names_both_sides() {
        let err = SuitabilityError::ParameterSetMismatch {
            stage: Stage::Hopper,
            missing: vec![Parameter::Rainfall],
            unexpected: vec![Parameter::SoilMoisture],
        };
        let text = err.to_string();
        assert!(text.contains("Rainfall"), "missing side absent from: {}", text);
        assert!(text.contains("Soil Moisture"), "unexpected side absent from: {}", text);
    }
}

/// Registry verification sweep
///
/// Verifies the static configuration tables the classifier depends on:
/// stage coverage, threshold ordering, display-scale consistency, and
/// default input values. A defect in any of these would skew every
/// assessment the service produces, so the whole surface is swept here
/// in addition to the per-module unit tests.
///
/// Run with: cargo test --test registry_verification

use locmon_service::model::{Parameter, Stage};
use locmon_service::registry::{self, STAGE_REGISTRY};
use locmon_service::suitability::classify::classify;
use locmon_service::suitability::scoring::{normalize, parameter_suitability_percent};

// ---------------------------------------------------------------------------
// Stage coverage
// ---------------------------------------------------------------------------

#[test]
fn registry_covers_all_stages_in_lifecycle_order() {
    let stages: Vec<Stage> = STAGE_REGISTRY.iter().map(|p| p.stage).collect();
    assert_eq!(stages, Stage::ALL.to_vec());
}

#[test]
fn every_stage_profile_is_reachable_and_nonempty() {
    for stage in Stage::ALL {
        let profile = registry::profile(stage);
        assert_eq!(profile.stage, stage);
        assert!(!profile.thresholds.is_empty(), "{} has no thresholds", stage);
        assert!(!profile.field_note.is_empty(), "{} has no field note", stage);
    }
}

#[test]
fn rainfall_is_assessed_at_every_stage_with_the_same_range() {
    // The 20-28 mm rainfall optimum is common to all four stages.
    for stage in Stage::ALL {
        let t = registry::profile(stage)
            .threshold_for(Parameter::Rainfall)
            .unwrap_or_else(|| panic!("{} should assess rainfall", stage));
        assert_eq!((t.optimal_min, t.optimal_max), (20.0, 28.0), "rainfall range at {}", stage);
    }
}

#[test]
fn only_the_swarm_stage_assesses_ndvi_and_winds_aloft() {
    for stage in Stage::ALL {
        let profile = registry::profile(stage);
        let has_ndvi = profile.threshold_for(Parameter::VegetationNdvi).is_some();
        let has_aloft = profile.threshold_for(Parameter::WindSpeed850hPa).is_some();
        assert_eq!(has_ndvi, stage == Stage::Swarm, "NDVI membership at {}", stage);
        assert_eq!(has_aloft, stage == Stage::Swarm, "850hPa membership at {}", stage);
    }
}

#[test]
fn soil_moisture_is_exclusive_to_egg_laying() {
    for stage in Stage::ALL {
        let has = registry::profile(stage)
            .threshold_for(Parameter::SoilMoisture)
            .is_some();
        assert_eq!(has, stage == Stage::EggLaying, "soil moisture membership at {}", stage);
    }
}

// ---------------------------------------------------------------------------
// Threshold integrity
// ---------------------------------------------------------------------------

#[test]
fn all_thresholds_are_ordered_and_at_most_one_bound_is_open() {
    for entry in STAGE_REGISTRY {
        for t in entry.thresholds {
            assert!(
                t.optimal_min.is_finite(),
                "lower bound must be finite for {} at {}",
                t.parameter,
                entry.stage
            );
            assert!(
                t.optimal_min <= t.optimal_max,
                "range inverted for {} at {}",
                t.parameter,
                entry.stage
            );
        }
    }
}

#[test]
fn the_only_open_ended_range_is_swarm_winds_aloft() {
    let mut open = Vec::new();
    for entry in STAGE_REGISTRY {
        for t in entry.thresholds {
            if t.optimal_max.is_infinite() {
                open.push((entry.stage, t.parameter));
            }
        }
    }
    assert_eq!(open, vec![(Stage::Swarm, Parameter::WindSpeed850hPa)]);
}

// ---------------------------------------------------------------------------
// Display scales and defaults
// ---------------------------------------------------------------------------

#[test]
fn every_parameter_has_a_usable_scale_and_default() {
    for parameter in Parameter::ALL {
        let scale = registry::scale(parameter);
        assert!(scale.min < scale.max, "degenerate scale for {}", parameter);
        assert!(
            scale.min <= scale.default && scale.default <= scale.max,
            "default for {} outside its scale",
            parameter
        );
        // A usable scale also means normalize stays in bounds at the ends.
        assert_eq!(normalize(parameter, scale.min), 0.0);
        assert_eq!(normalize(parameter, scale.max), 1.0);
    }
}

#[test]
fn scales_match_the_published_display_ranges() {
    let expected = [
        (Parameter::Rainfall, 0.0, 50.0),
        (Parameter::SoilMoisture, 0.0, 50.0),
        (Parameter::SoilTemperature, 15.0, 50.0),
        (Parameter::AirTemperature, 15.0, 50.0),
        (Parameter::SurfaceWindSpeed, 0.0, 10.0),
        (Parameter::WindSpeed850hPa, 0.0, 10.0),
        (Parameter::VegetationNdvi, 0.0, 1.0),
    ];
    for (parameter, min, max) in expected {
        let scale = registry::scale(parameter);
        assert_eq!((scale.min, scale.max), (min, max), "scale for {}", parameter);
    }
}

#[test]
fn default_readings_satisfy_the_classification_contract() {
    // The seeded CLI inputs must never be rejected by the classifier.
    for stage in Stage::ALL {
        let reading = registry::default_reading(stage);
        classify(stage, &reading)
            .unwrap_or_else(|e| panic!("default reading for {} rejected: {}", stage, e));
    }
}

#[test]
fn every_registered_pair_produces_a_bounded_suitability_score() {
    for entry in STAGE_REGISTRY {
        for t in entry.thresholds {
            let scale = registry::scale(t.parameter);
            for value in [scale.min, scale.default, scale.max] {
                let score = parameter_suitability_percent(entry.stage, t.parameter, value)
                    .expect("registered pair must score");
                assert!(
                    (0.0..=100.0).contains(&score),
                    "score out of bounds for {} at {}",
                    t.parameter,
                    entry.stage
                );
            }
        }
    }
}

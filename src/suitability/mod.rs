/// Suitability engine for the locust monitoring service.
///
/// Submodules:
/// - `classify` is the core rule evaluator mapping a reading set onto a
///   threat category.
/// - `scoring` holds the display-only metrics (bar positions and
///   per-parameter suitability scores).

pub mod classify;
pub mod scoring;

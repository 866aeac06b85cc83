/// Data organization utilities for the suitability service.
///
/// This module turns classifier inputs into display-ready structures for
/// the report renderer. The risk decision itself lives in
/// `suitability::classify`.
///
/// Submodules:
/// - `breakdown` organizes a validated reading into per-parameter rows.

pub mod breakdown;

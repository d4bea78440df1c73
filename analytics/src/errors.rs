//! Error types for the analytics layer

use thiserror::Error;

/// The single fail-loud contract in the layer.
///
/// Everything else degrades to an empty/`None`/zero result, but a scale
/// factor derived from a zero or negative base quantity has no mathematical
/// definition, and silently producing `Infinity` or `NaN` would corrupt
/// downstream nutrition totals.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("cannot scale from non-positive base quantity {base}")]
    NonPositiveScaleBase { base: f64 },
}

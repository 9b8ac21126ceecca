//! Confidence estimation
//!
//! This module provides:
//! - The [`ConfidenceEstimator`] contract every confidence method implements
//! - An injectable [`EstimatorRegistry`] and factory resolving `confidence_method`
//! - [`merge_indicator`], which stacks indicator maps onto the cost volume and
//!   disparity map

pub mod accumulator;
pub mod estimator;
pub mod function;
pub mod registry;


pub use accumulator::merge_indicator;
pub use estimator::ConfidenceEstimator;
pub use function::{IndicatorComputation, IndicatorFn};
pub use registry::{create_estimator, EstimatorFactory, EstimatorRegistry};

use crate::config::ConfidenceConfig;
use crate::core::{CostVolume, DisparityMap, StereoImage};
use crate::error::Result;

/// Run one confidence step: resolve the method, describe it, predict
///
/// Nothing is modified when the method cannot be resolved.
pub fn estimate_confidence(
    registry: &EstimatorRegistry,
    config: &ConfidenceConfig,
    disparity: Option<&mut DisparityMap>,
    left: &StereoImage,
    right: &StereoImage,
    cost_volume: &mut CostVolume,
) -> Result<()> {
    let estimator = registry.create(config)?;
    estimator.describe();
    estimator.predict(disparity, left, right, cost_volume)
}

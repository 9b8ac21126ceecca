//! Closure-backed estimator
//!
//! Wraps an externally supplied indicator computation so it can be registered
//! without a dedicated [`ConfidenceEstimator`] impl.

use std::fmt;
use std::sync::Arc;

use ndarray::Array2;

use super::accumulator::merge_indicator;
use super::estimator::ConfidenceEstimator;
use crate::core::{CostVolume, DisparityMap, StereoImage};
use crate::error::Result;

/// Computes a single `(row, col)` confidence map
pub type IndicatorComputation =
    dyn Fn(Option<&DisparityMap>, &StereoImage, &StereoImage, &CostVolume) -> Result<Array2<f32>> + Send + Sync;

/// Estimator producing one named indicator from a closure
#[derive(Clone)]
pub struct IndicatorFn {
    method: String,
    indicator: String,
    description: String,
    compute: Arc<IndicatorComputation>,
}

impl IndicatorFn {
    pub fn new<F>(
        method: impl Into<String>,
        indicator: impl Into<String>,
        description: impl Into<String>,
        compute: F,
    ) -> Self
    where
        F: Fn(Option<&DisparityMap>, &StereoImage, &StereoImage, &CostVolume) -> Result<Array2<f32>>
            + Send
            + Sync
            + 'static,
    {
        Self::from_shared(method, indicator, description, Arc::new(compute))
    }

    /// Build around a computation shared with other instances
    pub fn from_shared(
        method: impl Into<String>,
        indicator: impl Into<String>,
        description: impl Into<String>,
        compute: Arc<IndicatorComputation>,
    ) -> Self {
        Self {
            method: method.into(),
            indicator: indicator.into(),
            description: description.into(),
            compute,
        }
    }

    /// Label the computed map is stored under
    pub fn indicator(&self) -> &str {
        &self.indicator
    }
}

impl fmt::Debug for IndicatorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndicatorFn")
            .field("method", &self.method)
            .field("indicator", &self.indicator)
            .finish_non_exhaustive()
    }
}

impl ConfidenceEstimator for IndicatorFn {
    fn method(&self) -> &str {
        &self.method
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn predict(
        &self,
        disparity: Option<&mut DisparityMap>,
        left: &StereoImage,
        right: &StereoImage,
        cost_volume: &mut CostVolume,
    ) -> Result<()> {
        let map = (self.compute)(disparity.as_deref(), left, right, cost_volume)?;
        merge_indicator(&self.indicator, &map, disparity, cost_volume)
    }
}

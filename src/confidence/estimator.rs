//! Confidence estimator contract

use crate::core::{CostVolume, DisparityMap, StereoImage};
use crate::error::Result;

/// A strategy that scores disparity estimates
///
/// Implementations compute one or more indicator maps from the inputs and
/// merge each of them with [`merge_indicator`](super::merge_indicator), which
/// updates `cost_volume` and, when present, `disparity` in place.
pub trait ConfidenceEstimator: Send + Sync {
    /// Registry key this estimator is built for
    fn method(&self) -> &str;

    /// Human-readable description of the method
    fn description(&self) -> String;

    /// Emit the description through the logger
    fn describe(&self) {
        log::info!("Confidence method '{}': {}", self.method(), self.description());
    }

    /// Compute confidence indicators and attach them to the inputs
    ///
    /// `disparity` is `None` when no disparity map has been selected yet, in
    /// which case only the cost volume is updated.
    fn predict(
        &self,
        disparity: Option<&mut DisparityMap>,
        left: &StereoImage,
        right: &StereoImage,
        cost_volume: &mut CostVolume,
    ) -> Result<()>;
}

//! Cost volume container

use ndarray::{Array3, Axis};

use crate::core::ConfidenceLayer;
use crate::error::{ConfidenceError, Result};

/// Matching costs indexed `(row, col, disparity)`
///
/// The disparity axis covers `disp_min..=disp_max`. A confidence layer is
/// attached once the first indicator has been merged.
#[derive(Debug, Clone)]
pub struct CostVolume {
    /// Matching cost per pixel and disparity hypothesis
    pub cost: Array3<f32>,
    disp_min: i32,
    disp_max: i32,
    confidence: Option<ConfidenceLayer>,
}

impl CostVolume {
    /// Wrap a cost array whose third axis spans `disp_min..=disp_max`
    pub fn new(cost: Array3<f32>, disp_min: i32, disp_max: i32) -> Result<Self> {
        let expected = i64::from(disp_max) - i64::from(disp_min) + 1;
        let depth = cost.len_of(Axis(2));
        if expected <= 0 || expected as usize != depth {
            return Err(ConfidenceError::ShapeMismatch {
                target: "cost volume disparity axis",
                expected: vec![expected.max(0) as usize],
                found: vec![depth],
            });
        }

        Ok(Self {
            cost,
            disp_min,
            disp_max,
            confidence: None,
        })
    }

    /// Spatial extent `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        let (rows, cols, _) = self.cost.dim();
        (rows, cols)
    }

    /// Inclusive disparity range
    pub fn disparity_range(&self) -> (i32, i32) {
        (self.disp_min, self.disp_max)
    }

    pub fn confidence(&self) -> Option<&ConfidenceLayer> {
        self.confidence.as_ref()
    }

    pub fn has_confidence(&self) -> bool {
        self.confidence.is_some()
    }

    /// Detach the confidence layer
    pub fn take_confidence(&mut self) -> Option<ConfidenceLayer> {
        self.confidence.take()
    }

    pub(crate) fn set_confidence(&mut self, layer: ConfidenceLayer) {
        self.confidence = Some(layer);
    }
}

//! Disparity map container

use ndarray::Array2;

use crate::core::ConfidenceLayer;

/// Selected disparity per pixel, indexed `(row, col)`
#[derive(Debug, Clone)]
pub struct DisparityMap {
    /// Disparity values in pixels
    pub disparity: Array2<f32>,
    confidence: Option<ConfidenceLayer>,
}

impl DisparityMap {
    pub fn new(disparity: Array2<f32>) -> Self {
        Self {
            disparity,
            confidence: None,
        }
    }

    /// Spatial extent `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        self.disparity.dim()
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

//! Indicator accumulation
//!
//! Appends a named confidence map to the indicator axis of a cost volume and,
//! when given, of the matching disparity map. Every replacement layer is built
//! before either container is touched, so a failed merge leaves both exactly
//! as they were.

use ndarray::Array2;

use crate::core::{ConfidenceLayer, CostVolume, DisparityMap};
use crate::error::{ConfidenceError, Result};

/// Merge `indicator` under `name` into `cost_volume` and `disparity`
///
/// A disparity map without a confidence layer receives a copy of the cost
/// volume's updated layer. A disparity map that already has one must carry the
/// same indicator labels, in the same order, as the cost volume.
///
/// # Errors
/// * `ShapeMismatch` if `indicator` or the disparity map does not cover the
///   cost volume's `(rows, cols)`, or the indicator counts differ
/// * `IndicatorMismatch` if both layers exist with differently ordered labels
pub fn merge_indicator(
    name: &str,
    indicator: &Array2<f32>,
    disparity: Option<&mut DisparityMap>,
    cost_volume: &mut CostVolume,
) -> Result<()> {
    let dims = cost_volume.dims();
    if indicator.dim() != dims {
        return Err(ConfidenceError::spatial("indicator map", dims, indicator.dim()));
    }

    let volume_layer = append(cost_volume.confidence(), name, indicator)?;

    let disparity_update = match disparity {
        Some(disp) => {
            if disp.dims() != dims {
                return Err(ConfidenceError::spatial("disparity map", dims, disp.dims()));
            }
            let layer = match disp.confidence() {
                Some(existing) => {
                    ensure_aligned(cost_volume.confidence(), existing)?;
                    existing.grown(name, indicator)?
                }
                None => volume_layer.clone(),
            };
            Some((disp, layer))
        }
        None => None,
    };

    debug_assert!(volume_layer.check_invariants().is_ok());
    let depth = volume_layer.depth();
    cost_volume.set_confidence(volume_layer);
    if let Some((disp, layer)) = disparity_update {
        disp.set_confidence(layer);
    }

    log::debug!("Merged confidence indicator '{}' ({} stored)", name, depth);
    Ok(())
}

fn append(existing: Option<&ConfidenceLayer>, name: &str, indicator: &Array2<f32>) -> Result<ConfidenceLayer> {
    match existing {
        Some(layer) => layer.grown(name, indicator),
        None => Ok(ConfidenceLayer::from_indicator(name, indicator)),
    }
}

fn ensure_aligned(volume: Option<&ConfidenceLayer>, disparity: &ConfidenceLayer) -> Result<()> {
    let volume_labels = volume.map(|layer| layer.indicators()).unwrap_or(&[]);
    let disparity_labels = disparity.indicators();

    if volume_labels.len() != disparity_labels.len() {
        return Err(ConfidenceError::ShapeMismatch {
            target: "disparity map indicator axis",
            expected: vec![volume_labels.len()],
            found: vec![disparity_labels.len()],
        });
    }
    if volume_labels != disparity_labels {
        return Err(ConfidenceError::IndicatorMismatch {
            volume: volume_labels.to_vec(),
            disparity: disparity_labels.to_vec(),
        });
    }
    Ok(())
}

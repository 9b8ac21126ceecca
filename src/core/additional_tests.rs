//! Tests for core module (inline)

#[cfg(test)]
mod tests {
    use crate::core::{ConfidenceLayer, CostVolume, DisparityMap, StereoImage};
    use crate::error::ConfidenceError;
    use ndarray::{Array2, Array3};

    #[test]
    fn test_cost_volume_creation() {
        let cv = CostVolume::new(Array3::zeros((4, 5, 3)), -1, 1).unwrap();
        assert_eq!(cv.dims(), (4, 5));
        assert_eq!(cv.disparity_range(), (-1, 1));
        assert!(!cv.has_confidence());
    }

    #[test]
    fn test_cost_volume_rejects_wrong_disparity_axis() {
        let err = CostVolume::new(Array3::zeros((4, 5, 3)), 0, 4).unwrap_err();
        assert!(matches!(err, ConfidenceError::ShapeMismatch { .. }));
        assert!(err.to_string().contains("[5]"));
    }

    #[test]
    fn test_cost_volume_rejects_inverted_range() {
        let err = CostVolume::new(Array3::zeros((4, 5, 3)), 2, -2).unwrap_err();
        assert!(matches!(err, ConfidenceError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_take_confidence() {
        let mut cv = CostVolume::new(Array3::zeros((2, 2, 1)), 0, 0).unwrap();
        cv.set_confidence(ConfidenceLayer::from_indicator("risk", &Array2::zeros((2, 2))));
        assert!(cv.has_confidence());
        let layer = cv.take_confidence().unwrap();
        assert_eq!(layer.indicators(), ["risk"]);
        assert!(!cv.has_confidence());
    }

    #[test]
    fn test_disparity_map_creation() {
        let disp = DisparityMap::new(Array2::zeros((3, 7)));
        assert_eq!(disp.dims(), (3, 7));
        assert!(disp.confidence().is_none());
    }

    #[test]
    fn test_disparity_map_take_confidence() {
        let mut disp = DisparityMap::new(Array2::zeros((2, 2)));
        assert!(disp.take_confidence().is_none());

        disp.set_confidence(ConfidenceLayer::from_indicator("ambiguity", &Array2::ones((2, 2))));
        assert!(disp.has_confidence());
        let layer = disp.take_confidence().unwrap();
        assert_eq!(layer.indicators(), ["ambiguity"]);
        assert!(!disp.has_confidence());
    }

    #[test]
    fn test_stereo_image_validity() {
        let mut data = Array2::from_elem((2, 3), 1.0);
        data[[0, 1]] = -9999.0;
        data[[1, 2]] = f32::NAN;
        let mut mask = Array2::zeros((2, 3));
        mask[[1, 0]] = 3;

        let image = StereoImage::new(data).with_no_data(-9999.0).with_mask(mask).unwrap();

        assert!(image.is_valid(0, 0));
        assert!(!image.is_valid(0, 1));
        assert!(!image.is_valid(1, 0));
        assert!(!image.is_valid(1, 2));
        assert!(!image.is_valid(5, 5));
    }

    #[test]
    fn test_stereo_image_mask_shape() {
        let image = StereoImage::new(Array2::zeros((2, 3)));
        assert!(image.with_mask(Array2::zeros((3, 2))).is_err());
    }
}

use super::*;
use ndarray::array;

#[test]
fn test_classify() {
    assert_eq!(DisplayKind::classify(&[]), DisplayKind::Text);
    assert_eq!(DisplayKind::classify(&[1]), DisplayKind::Text);
    assert_eq!(DisplayKind::classify(&[3, 4]), DisplayKind::BoundingBoxes);
    assert_eq!(DisplayKind::classify(&[3, 5]), DisplayKind::BoundingBoxes);
    assert_eq!(DisplayKind::classify(&[28, 28]), DisplayKind::Image);
    assert_eq!(DisplayKind::classify(&[28, 28, 3]), DisplayKind::Image);
}

#[test]
fn test_bounding_boxes_skip_empty_and_inverted() {
    let boxes = array![
        [0.0f32, 0.0, 10.0, 20.0, 1.0],
        [10.0, 20.0, 30.0, 50.0, 2.5],
        [0.0, 0.0, 0.0, 0.0, 3.0],
        [0.0, 0.0, -10.0, -20.0, 4.0]
    ]
    .into_dyn();
    let parsed = bounding_boxes(&boxes).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].label.as_deref(), Some("1"));
    assert_eq!(parsed[1].label.as_deref(), Some("2.5"));
    assert_eq!(parsed[1].width, 30.0);

    let unlabeled = array![[1.0f32, 1.0, 2.0, 2.0]].into_dyn();
    assert_eq!(bounding_boxes(&unlabeled).unwrap()[0].label, None);
}

#[test]
fn test_stacking_style() {
    assert_eq!(box_color(0), 'm');
    assert_eq!(box_color(7), 'r');
    assert_eq!(stack_alpha(0), 1.0);
    assert_eq!(stack_alpha(2), 0.3);
}

#[test]
fn test_unit_range_scaled_by_255() {
    let im = array![[0.0f32, 0.5], [1.0, 0.25]].into_dyn();
    let px = to_display_image(&im, false).unwrap();
    assert_eq!(px, array![[0u8, 127], [255, 63]].into_dyn());
}

#[test]
fn test_signed_ranges() {
    let half = array![[-0.5f32, 0.5]].into_dyn();
    assert_eq!(to_display_image(&half, false).unwrap(), array![[0u8, 255]].into_dyn());

    let unit = array![[-1.0f32, 1.0, 0.0]].into_dyn();
    assert_eq!(to_display_image(&unit, false).unwrap(), array![[0u8, 255, 127]].into_dyn());
}

#[test]
fn test_arbitrary_range_rescaled() {
    let im = array![[-2.0f32, 0.0], [2.0, 6.0]].into_dyn();
    // (v + 2) / (6 + 2) * 255
    let px = to_display_image(&im, false).unwrap();
    assert_eq!(px, array![[0u8, 63], [127, 255]].into_dyn());
}

#[test]
fn test_single_channel_is_squeezed() {
    let im = ArrayD::<f32>::zeros(IxDyn(&[2, 3, 1]));
    assert_eq!(to_display_image(&im, false).unwrap().shape(), &[2, 3]);
}

#[test]
fn test_integer_images_cast_directly() {
    let im = array![[3.0f32, 200.0]].into_dyn();
    assert_eq!(to_display_image(&im, true).unwrap(), array![[3u8, 200]].into_dyn());
}

#[test]
fn test_channels_last() {
    let t = Tensor::new(vec![0.0; 24], vec![3, 2, 4]).unwrap();
    assert_eq!(channels_last(&t).unwrap().shape(), vec![2, 4, 3]);
    let flat = Tensor::new(vec![0.0; 4], vec![2, 2]).unwrap();
    assert_eq!(channels_last(&flat).unwrap().shape(), vec![2, 2]);
}

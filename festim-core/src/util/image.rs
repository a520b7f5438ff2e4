//! Data preparation for displaying arrays as images, boxes or text.
//!
//! Rendering is left to whatever plotting front-end the caller uses; these
//! helpers only decide *what* an array is and bring image data into the
//! `u8` range such front-ends expect.

use ndarray::{ArrayD, Axis, IxDyn};

use crate::error::FestimError;
use crate::ops::{reduce_max, reduce_min};
use crate::tensor::Tensor;

/// Colors cycled through when boxes are stacked onto the same axis.
const BOX_COLORS: [char; 6] = ['m', 'r', 'c', 'g', 'y', 'b'];

/// How an array should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    /// Rank < 2: shown as a single text value.
    Text,
    /// `(n, 4)` or `(n, 5)`: `(x0, y0, w, h[, label])` boxes.
    BoundingBoxes,
    /// Anything else: pixel data.
    Image,
}

impl DisplayKind {
    pub fn classify(shape: &[usize]) -> Self {
        match shape {
            s if s.len() < 2 => DisplayKind::Text,
            [_, 4] | [_, 5] => DisplayKind::BoundingBoxes,
            _ => DisplayKind::Image,
        }
    }
}

/// One drawable box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub width: f32,
    pub height: f32,
    pub label: Option<String>,
}

/// Extracts the drawable boxes of an `(n, 4|5)` array.
///
/// Empty or inverted boxes (width or height ≤ 0) are skipped. A fifth
/// column is rendered as the box label.
pub fn bounding_boxes(array: &ArrayD<f32>) -> Result<Vec<BoundingBox>, FestimError> {
    if DisplayKind::classify(array.shape()) != DisplayKind::BoundingBoxes {
        return Err(FestimError::ShapeMismatch {
            expected: vec![0, 5],
            actual: array.shape().to_vec(),
            operation: "bounding_boxes".to_string(),
        });
    }
    let boxes = array
        .axis_iter(Axis(0))
        .filter_map(|row| {
            let row: Vec<f32> = row.iter().copied().collect();
            let (x0, y0, width, height) = (row[0], row[1], row[2], row[3]);
            if width <= 0.0 || height <= 0.0 {
                return None;
            }
            let label = row.get(4).map(|&l| format_label(l));
            Some(BoundingBox { x0, y0, width, height, label })
        })
        .collect();
    Ok(boxes)
}

fn format_label(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Box color for the given stacking depth.
pub fn box_color(stack_depth: usize) -> char {
    BOX_COLORS[stack_depth % BOX_COLORS.len()]
}

/// Opacity of an image drawn at the given stacking depth.
pub fn stack_alpha(stack_depth: usize) -> f32 {
    if stack_depth == 0 {
        1.0
    } else {
        0.3
    }
}

/// Moves the leading channel axis of a native tensor to the end, so
/// `(C, H, W)` becomes `(H, W, C)`. Tensors of rank ≤ 2 are returned as is.
pub fn channels_last(tensor: &Tensor) -> Result<Tensor, FestimError> {
    let rank = tensor.rank();
    if rank <= 2 {
        return Ok(tensor.clone());
    }
    let axes: Vec<usize> = (1..rank).chain(std::iter::once(0)).collect();
    tensor.permute(&axes)
}

/// Converts image data to `u8` pixels.
///
/// * integer data is cast directly;
/// * data in `[0, 1]` is scaled by 255;
/// * data in `[-0.5, 0.5]` is shifted by 0.5 then scaled by 255;
/// * data in `[-1, 1]` is shifted by 1 then scaled by 127.5;
/// * anything else (e.g. normalized inputs) is rescaled with `|max|` and
///   `|min|`, per channel for rank > 2.
///
/// A trailing single channel is dropped, `(H, W, 1)` becomes `(H, W)`.
pub fn to_display_image(image: &ArrayD<f32>, is_integer: bool) -> Result<ArrayD<u8>, FestimError> {
    let (im_min, im_max) = match (reduce_min(image), reduce_max(image)) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => {
            return Err(FestimError::InvalidArgument(
                "cannot display an empty image".to_string(),
            ))
        }
    };

    let pixels: ArrayD<u8> = if is_integer {
        image.mapv(|v| v as u8)
    } else if 0.0 <= im_min && im_max <= 1.0 {
        image.mapv(|v| (v * 255.0) as u8)
    } else if -0.5 <= im_min && im_min < 0.0 && 0.0 < im_max && im_max <= 0.5 {
        image.mapv(|v| ((v + 0.5) * 255.0) as u8)
    } else if -1.0 <= im_min && im_min < 0.0 && 0.0 < im_max && im_max <= 1.0 {
        image.mapv(|v| ((v + 1.0) * 127.5) as u8)
    } else {
        rescale_by_extremes(image)
    };

    let shape = pixels.shape().to_vec();
    if shape.len() == 3 && shape[2] == 1 {
        return Ok(pixels.into_shape(IxDyn(&shape[..2]))?);
    }
    Ok(pixels)
}

fn rescale_by_extremes(image: &ArrayD<f32>) -> ArrayD<u8> {
    let rank = image.ndim();
    let per_channel = rank > 2;
    let (maxes, mins): (Vec<f32>, Vec<f32>) = if per_channel {
        image
            .axis_iter(Axis(rank - 1))
            .map(|channel| {
                let channel = channel.to_owned();
                (
                    reduce_max(&channel).unwrap_or(0.0).abs(),
                    reduce_min(&channel).unwrap_or(0.0).abs(),
                )
            })
            .unzip()
    } else {
        (
            vec![reduce_max(image).unwrap_or(0.0).abs()],
            vec![reduce_min(image).unwrap_or(0.0).abs()],
        )
    };

    let mut pixels = ArrayD::<u8>::zeros(image.raw_dim());
    for (out, (idx, &v)) in pixels.iter_mut().zip(image.indexed_iter()) {
        let c = if per_channel { idx[rank - 1] } else { 0 };
        let (ma, mi) = (maxes[c], mins[c]);
        *out = (((v + mi) / (ma + mi)) * 255.0) as u8;
    }
    pixels
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;

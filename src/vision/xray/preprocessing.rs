// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image preprocessing for the chest X-ray classifier
//!
//! Must stay identical to the transform the classifier was trained with:
//! exact resize to 224x224, RGB, ImageNet mean/std normalization, NCHW.

use image::{imageops::FilterType, DynamicImage, GenericImageView};
use ndarray::Array4;

/// Side length of the square classifier input
pub const XRAY_INPUT_SIZE: u32 = 224;

/// ImageNet normalization mean values
pub const MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// ImageNet normalization std values
pub const STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Preprocess an image for the classifier
///
/// Steps:
/// 1. Resize to XRAY_INPUT_SIZE x XRAY_INPUT_SIZE (bilinear, aspect ratio not kept)
/// 2. Convert to RGB
/// 3. Normalize: (pixel/255 - mean) / std
/// 4. Convert to NCHW tensor format [1, 3, H, W]
pub fn preprocess_for_classifier(image: &DynamicImage) -> Array4<f32> {
    let resized = resize_for_classifier(image, XRAY_INPUT_SIZE);
    let rgb = resized.to_rgb8();

    let size = XRAY_INPUT_SIZE as usize;
    let mut tensor = Array4::zeros((1, 3, size, size));

    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, c, y as usize, x as usize]] =
                (pixel[c] as f32 / 255.0 - MEAN[c]) / STD[c];
        }
    }

    tensor
}

/// Stretch the image to a square of `target_size`
///
/// Images already at the target size are passed through untouched.
pub fn resize_for_classifier(image: &DynamicImage, target_size: u32) -> DynamicImage {
    if image.dimensions() == (target_size, target_size) {
        return image.clone();
    }

    image.resize_exact(target_size, target_size, FilterType::Triangle)
}

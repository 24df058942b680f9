// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image loading for uploaded X-ray files

use image::{DynamicImage, ImageFormat};
use thiserror::Error;

/// Errors raised while turning uploaded bytes into pixels
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image data is empty")]
    EmptyData,

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),
}

/// Image information extracted during loading
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Format guessed from the leading bytes, if recognised
    pub format: Option<ImageFormat>,
    /// Size in bytes
    pub size_bytes: usize,
}

/// Decode raw image bytes (for multipart uploads)
///
/// Any format the `image` crate can recognise is accepted. The result is
/// always converted to 8-bit RGB so grayscale and RGBA uploads reach the
/// classifier with three channels.
///
/// # Returns
/// * `Ok((DynamicImage, ImageInfo))` - The RGB image and metadata
/// * `Err(ImageError)` - If the bytes are empty or cannot be decoded
pub fn decode_image_bytes(bytes: &[u8]) -> Result<(DynamicImage, ImageInfo), ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::EmptyData);
    }

    let format = image::guess_format(bytes).ok();

    let img = image::load_from_memory(bytes)
        .map_err(|e| ImageError::DecodeFailed(e.to_string()))?;

    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let info = ImageInfo {
        width: rgb.width(),
        height: rgb.height(),
        format,
        size_bytes: bytes.len(),
    };

    Ok((rgb, info))
}

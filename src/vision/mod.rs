// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing module for CPU-based image analysis
//!
//! Decodes uploaded images and classifies chest X-rays with an ONNX model.

pub mod image_utils;
pub mod xray;

pub use image_utils::{decode_image_bytes, ImageError, ImageInfo};
pub use xray::{
    Highlight, InferenceEngine, InferenceError, OnnxXrayClassifier, PredictError,
    PredictionResult, XrayLabel, XrayPredictor,
};

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chest X-ray classification
//!
//! Components:
//! - `preprocessing` - 224x224 ImageNet-normalized input tensor
//! - `engine` - inference engine trait used by the predictor
//! - `classifier` - ONNX Runtime implementation of the engine
//! - `labels` - class labels and argmax decoding
//! - `highlights` - placeholder highlight rectangles
//! - `model` - the end-to-end prediction pipeline

pub mod classifier;
pub mod engine;
pub mod highlights;
pub mod labels;
pub mod model;
pub mod preprocessing;

pub use classifier::OnnxXrayClassifier;
pub use engine::{InferenceEngine, InferenceError};
pub use highlights::{placeholder_highlights, Highlight, PLACEHOLDER_HIGHLIGHTS};
pub use labels::{argmax, XrayLabel};
pub use model::{PredictError, PredictionResult, XrayPredictor};

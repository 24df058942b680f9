// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Inference engine seam
//!
//! The predictor only sees this trait, so the ONNX session can be swapped for
//! a canned-score double in tests.

use ndarray::{Array2, Array4};
use thiserror::Error;

/// Errors raised by an inference engine
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Invalid input shape: {0:?}, expected [1, 3, 224, 224]")]
    InvalidInputShape(Vec<usize>),

    #[error("Unexpected output shape: {0:?}, expected [1, {1}]")]
    InvalidOutputShape(Vec<usize>, usize),

    #[error("Inference session error: {0}")]
    Session(String),

    #[error("Inference session lock poisoned")]
    LockPoisoned,
}

/// A loaded model that maps an NCHW image tensor to per-class scores
#[cfg_attr(test, mockall::automock)]
pub trait InferenceEngine: Send + Sync {
    /// Name of the single input slot the tensor is bound to
    fn input_name(&self) -> String;

    /// Run one forward pass
    ///
    /// `input` is `[1, 3, 224, 224]`; the result is `[1, num_classes]`.
    fn run(&self, input: Array4<f32>) -> Result<Array2<f32>, InferenceError>;
}

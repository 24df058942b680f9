// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chest X-ray prediction pipeline
//!
//! decode -> preprocess -> classify -> label -> placeholder highlights

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

use super::engine::{InferenceEngine, InferenceError};
use super::highlights::{placeholder_highlights, Highlight};
use super::labels::XrayLabel;
use super::preprocessing::preprocess_for_classifier;
use crate::vision::image_utils::{decode_image_bytes, ImageError};

/// Failure of a single prediction
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    DecodeFailure(ImageError),

    #[error(transparent)]
    InferenceFailure(#[from] InferenceError),
}

/// Outcome of classifying one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: XrayLabel,
    pub highlights: Vec<Highlight>,
}

impl PredictionResult {
    pub fn from_label(prediction: XrayLabel) -> Self {
        Self {
            prediction,
            highlights: placeholder_highlights(prediction),
        }
    }
}

/// Classifies uploaded X-ray images
///
/// Built once at startup around an inference engine and shared read-only
/// between requests.
#[derive(Clone)]
pub struct XrayPredictor {
    engine: Arc<dyn InferenceEngine>,
}

impl std::fmt::Debug for XrayPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XrayPredictor")
            .field("input_name", &self.engine.input_name())
            .finish_non_exhaustive()
    }
}

impl XrayPredictor {
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }

    /// Name of the model input slot the image tensor is bound to
    pub fn input_name(&self) -> String {
        self.engine.input_name()
    }

    /// Run the full pipeline on raw upload bytes
    ///
    /// CPU bound; call from a blocking context.
    pub fn predict_bytes(&self, bytes: &[u8]) -> Result<PredictionResult, PredictError> {
        let start = Instant::now();

        let (image, info) = decode_image_bytes(bytes).map_err(|e| match e {
            err @ ImageError::EmptyData => PredictError::InvalidInput(err.to_string()),
            other => PredictError::DecodeFailure(other),
        })?;
        debug!(
            "Decoded image: {}x{}, {} bytes, format {:?}",
            info.width, info.height, info.size_bytes, info.format
        );

        let tensor = preprocess_for_classifier(&image);
        let scores = self.engine.run(tensor)?;

        if scores.nrows() != 1 {
            return Err(InferenceError::InvalidOutputShape(
                scores.shape().to_vec(),
                XrayLabel::COUNT,
            )
            .into());
        }

        let row = scores.row(0).to_vec();
        let prediction = XrayLabel::from_scores(&row)?;

        info!(
            "Prediction: {} (scores {:?}, {}ms)",
            prediction,
            row,
            start.elapsed().as_millis()
        );

        Ok(PredictionResult::from_label(prediction))
    }
}

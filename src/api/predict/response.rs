// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prediction response types

use serde::{Deserialize, Serialize};

use crate::vision::{Highlight, PredictionResult, XrayLabel};

/// Response from POST /predict
///
/// The wire contract of the endpoint, kept apart from
/// [`PredictionResult`] so pipeline-side fields never leak into the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// One of "Normal", "Pneumonia", "Covid", "Other"
    pub prediction: XrayLabel,
    /// Placeholder rectangles; empty for "Normal"
    pub highlights: Vec<Highlight>,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            prediction: result.prediction,
            highlights: result.highlights,
        }
    }
}

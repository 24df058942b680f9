// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::http_server::AppState;
use crate::version::VERSION_NUMBER;
use crate::vision::XrayLabel;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Input slot the image tensor is bound to
    pub model_input: String,
    /// Labels the classifier can return, in output order
    pub labels: Vec<String>,
}

/// GET /health - Readiness probe
///
/// The classifier is loaded before the server binds, so a response means the
/// node can serve predictions.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION_NUMBER.to_string(),
        model_input: state.predictor.input_name(),
        labels: XrayLabel::ALL
            .iter()
            .map(|label| label.as_str().to_string())
            .collect(),
    })
}

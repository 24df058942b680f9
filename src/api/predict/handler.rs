// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prediction endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use tracing::{error, info, warn};

use super::request::read_image_field;
use super::response::PredictResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vision::PredictError;

/// POST /predict - Classify a chest X-ray
///
/// # Request
/// `multipart/form-data` with the image file in the `image` field (any
/// format the `image` crate decodes: JPEG, PNG, ...).
///
/// # Response
/// - `prediction`: "Normal", "Pneumonia", "Covid" or "Other"
/// - `highlights`: placeholder rectangles, empty for "Normal"
///
/// # Errors
/// - 400 Bad Request: `{"error": "No image uploaded"}` when there is no `image` field
/// - 400 Bad Request: `{"error": "Invalid image: ..."}` when the bytes cannot be decoded
/// - 413 Payload Too Large: upload exceeded the configured limit
/// - 500 Internal Server Error: classifier failure
pub async fn predict_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    // 1. Require a multipart body
    let multipart = multipart.map_err(|rejection| {
        warn!("Predict request is not multipart: {}", rejection);
        ApiError::NoImageUploaded
    })?;

    // 2. Locate the image field
    let upload = read_image_field(multipart).await?.ok_or_else(|| {
        warn!("Predict request has no '{}' field", super::request::IMAGE_FIELD);
        ApiError::NoImageUploaded
    })?;

    // 3. Run the pipeline off the async executor
    let predictor = state.predictor.clone();
    let bytes = upload.bytes;
    let result = tokio::task::spawn_blocking(move || predictor.predict_bytes(&bytes))
        .await
        .map_err(|e| {
            error!("Prediction task failed to complete: {}", e);
            ApiError::InternalError(e.to_string())
        })?
        .map_err(|e| {
            match &e {
                PredictError::InferenceFailure(cause) => error!("Inference failed: {}", cause),
                other => warn!("Rejected upload {:?}: {}", upload.file_name, other),
            }
            ApiError::from(e)
        })?;

    info!(
        "Predicted {} with {} highlight(s)",
        result.prediction,
        result.highlights.len()
    );

    Ok(Json(PredictResponse::from(result)))
}


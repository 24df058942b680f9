// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vision::PredictError;

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    /// No `image` field in the request
    NoImageUploaded,
    /// The `image` field could not be decoded as an image
    InvalidImage(String),
    /// The upload exceeded the configured body limit
    PayloadTooLarge,
    /// The classifier failed; detail is logged, not returned
    InferenceFailed(String),
    InternalError(String),
}

impl ApiError {
    /// Client-facing message
    pub fn message(&self) -> String {
        match self {
            ApiError::NoImageUploaded => "No image uploaded".to_string(),
            ApiError::InvalidImage(msg) => format!("Invalid image: {}", msg),
            ApiError::PayloadTooLarge => "Image exceeds upload limit".to_string(),
            ApiError::InferenceFailed(_) => "Inference failed".to_string(),
            ApiError::InternalError(_) => "Internal server error".to_string(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.message(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoImageUploaded | ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InferenceFailed(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NoImageUploaded => write!(f, "No image uploaded"),
            ApiError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            ApiError::PayloadTooLarge => write!(f, "Upload exceeds body limit"),
            ApiError::InferenceFailed(msg) => write!(f, "Inference failed: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::InvalidInput(msg) => ApiError::InvalidImage(msg),
            PredictError::DecodeFailure(e) => ApiError::InvalidImage(e.to_string()),
            PredictError::InferenceFailure(e) => ApiError::InferenceFailed(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}

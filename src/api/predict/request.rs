// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart upload parsing for POST /predict

use axum::body::Bytes;
use axum::http::StatusCode;
use axum_extra::extract::Multipart;
use tracing::{debug, warn};

use crate::api::errors::ApiError;

/// Name of the multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

/// The uploaded image part
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Raw file content
    pub bytes: Bytes,
    /// Client-side file name, if sent
    pub file_name: Option<String>,
    /// Declared content type, if sent (not trusted)
    pub content_type: Option<String>,
}

/// Read fields until the `image` field is found
///
/// Other fields, and `image` parts sent without a file name, are skipped.
/// Returns `Ok(None)` when the form has no `image` file part. A malformed body is treated the same as a missing image, except
/// when it was cut off by the upload limit.
pub async fn read_image_field(mut multipart: Multipart) -> Result<Option<ImageUpload>, ApiError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => return Err(multipart_failure(e.status(), e.body_text())),
        };

        if field.name() != Some(IMAGE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        // Only file parts count as uploads; a plain `image` text field does not
        let file_name = match field.file_name() {
            Some(name) => Some(name.to_string()),
            None => {
                debug!("Skipping non-file '{}' field", IMAGE_FIELD);
                continue;
            }
        };
        let content_type = field.content_type().map(str::to_string);

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_failure(e.status(), e.body_text()))?;

        debug!(
            "Received image field: {} bytes, file {:?}, type {:?}",
            bytes.len(),
            file_name,
            content_type
        );

        return Ok(Some(ImageUpload {
            bytes,
            file_name,
            content_type,
        }));
    }
}

fn multipart_failure(status: StatusCode, detail: String) -> ApiError {
    warn!("Multipart parsing failed ({}): {}", status, detail);
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::NoImageUploaded
    }
}

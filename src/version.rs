// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the X-ray Detection Node

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Classifier contract served by this build
pub const MODEL_CONTRACT: &str = "chest-xray-4class-224";

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("X-ray Detection Node {} ({})", VERSION_NUMBER, MODEL_CONTRACT)
}

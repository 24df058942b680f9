// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Highlight rectangles returned alongside a prediction
//!
//! The classifier has no localization head. These rectangles are fixed UI
//! placeholders and say nothing about where a finding is in the image.

use serde::{Deserialize, Serialize};

use super::labels::XrayLabel;

/// Rectangle drawn over the uploaded image by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Placeholder rectangles emitted for every non-Normal prediction
pub const PLACEHOLDER_HIGHLIGHTS: [Highlight; 2] = [
    Highlight {
        x: 50,
        y: 60,
        width: 120,
        height: 100,
    },
    Highlight {
        x: 180,
        y: 140,
        width: 80,
        height: 60,
    },
];

/// Highlights for a label: none for Normal, the two placeholders otherwise
pub fn placeholder_highlights(label: XrayLabel) -> Vec<Highlight> {
    if label.is_normal() {
        Vec::new()
    } else {
        PLACEHOLDER_HIGHLIGHTS.to_vec()
    }
}

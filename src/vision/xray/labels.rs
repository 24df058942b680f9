// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Class labels produced by the chest X-ray classifier

use serde::{Deserialize, Serialize};
use std::fmt;

use super::engine::InferenceError;

/// Diagnosis class, in the order of the model's output columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XrayLabel {
    Normal,
    Pneumonia,
    Covid,
    Other,
}

impl XrayLabel {
    /// All labels, indexed like the classifier output
    pub const ALL: [XrayLabel; 4] = [
        XrayLabel::Normal,
        XrayLabel::Pneumonia,
        XrayLabel::Covid,
        XrayLabel::Other,
    ];

    /// Number of output classes the model must emit
    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            XrayLabel::Normal => "Normal",
            XrayLabel::Pneumonia => "Pneumonia",
            XrayLabel::Covid => "Covid",
            XrayLabel::Other => "Other",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Pick the label with the highest score
    ///
    /// `scores` must hold exactly one score per class.
    pub fn from_scores(scores: &[f32]) -> Result<Self, InferenceError> {
        if scores.len() != Self::COUNT {
            return Err(InferenceError::InvalidOutputShape(
                vec![1, scores.len()],
                Self::COUNT,
            ));
        }

        argmax(scores)
            .and_then(Self::from_index)
            .ok_or_else(|| InferenceError::Session("classifier returned no usable scores".to_string()))
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, XrayLabel::Normal)
    }
}

impl fmt::Display for XrayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of the largest score
///
/// The lowest index wins on ties. NaN never beats a real number; an all-NaN
/// slice resolves to index 0. Unlike numpy's argmax, a NaN is never picked
/// over a real score.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, &score) in scores.iter().enumerate() {
        match best {
            None => best = Some((index, score)),
            Some((_, current)) if current.is_nan() && !score.is_nan() => {
                best = Some((index, score))
            }
            Some((_, current)) if score > current => best = Some((index, score)),
            _ => {}
        }
    }

    best.map(|(index, _)| index)
}

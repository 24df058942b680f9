// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ONNX chest X-ray classifier
//!
//! Wraps a single ONNX Runtime session that maps a `[1, 3, 224, 224]` image
//! tensor to `[1, 4]` class scores.

use anyhow::{Context, Result};
use ndarray::{Array2, Array4, ArrayViewD, Ix2};
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::engine::{InferenceEngine, InferenceError};
use super::labels::XrayLabel;
use super::preprocessing::XRAY_INPUT_SIZE;

/// ONNX Runtime backed classifier
///
/// Loaded once at startup and shared read-only between requests. ONNX Runtime
/// needs exclusive access to run a session, hence the mutex.
#[derive(Clone)]
pub struct OnnxXrayClassifier {
    /// ONNX Runtime session (thread-safe)
    session: Arc<Mutex<Session>>,
    /// Model input name
    input_name: String,
    /// Model output name (class scores)
    output_name: String,
}

impl std::fmt::Debug for OnnxXrayClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxXrayClassifier")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .finish_non_exhaustive()
    }
}

impl OnnxXrayClassifier {
    /// Load the classifier from an ONNX file
    ///
    /// # Errors
    /// Returns error if:
    /// - Model file not found
    /// - ONNX Runtime initialization fails
    /// - The model declares no inputs
    pub fn new<P: AsRef<Path>>(model_path: P, intra_threads: usize) -> Result<Self> {
        let model_path = model_path.as_ref();

        if !model_path.exists() {
            anyhow::bail!("X-ray model not found: {}", model_path.display());
        }

        info!("Loading chest X-ray classifier from {}", model_path.display());

        let session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(intra_threads)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load X-ray model from {}",
                model_path.display()
            ))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .context("X-ray model declares no inputs")?;

        let output_name = session
            .outputs
            .first()
            .map(|output| output.name.clone())
            .context("X-ray model declares no outputs")?;

        debug!(
            "X-ray classifier loaded - input: {}, output: {}",
            input_name, output_name
        );

        info!(
            "✅ X-ray classifier loaded (CPU, {} intra-op threads)",
            intra_threads
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            output_name,
        })
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }
}

impl InferenceEngine for OnnxXrayClassifier {
    fn input_name(&self) -> String {
        self.input_name.clone()
    }

    fn run(&self, input: Array4<f32>) -> Result<Array2<f32>, InferenceError> {
        validate_input_shape(input.shape())?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| InferenceError::LockPoisoned)?;

        let input_value =
            Value::from_array(input).map_err(|e| InferenceError::Session(e.to_string()))?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input_value])
            .map_err(|e| InferenceError::Session(e.to_string()))?;

        let output_tensor = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| InferenceError::Session(e.to_string()))?;

        debug!("Classifier output shape: {:?}", output_tensor.shape());

        parse_scores(output_tensor)
    }
}

/// Reject tensors the classifier was not trained on
pub(crate) fn validate_input_shape(shape: &[usize]) -> Result<(), InferenceError> {
    let size = XRAY_INPUT_SIZE as usize;
    if shape != [1, 3, size, size] {
        return Err(InferenceError::InvalidInputShape(shape.to_vec()));
    }
    Ok(())
}

/// Convert the raw output into `[1, classes]` scores
///
/// Accepts `[1, classes]` directly or a flat `[classes]` vector.
pub(crate) fn parse_scores(output: ArrayViewD<'_, f32>) -> Result<Array2<f32>, InferenceError> {
    let shape = output.shape().to_vec();
    let classes = XrayLabel::COUNT;

    let scores = match shape.as_slice() {
        [1, n] if *n == classes => output
            .into_dimensionality::<Ix2>()
            .map_err(|e| InferenceError::Session(e.to_string()))?
            .to_owned(),
        [n] if *n == classes => Array2::from_shape_vec((1, classes), output.iter().copied().collect())
            .map_err(|e| InferenceError::Session(e.to_string()))?,
        _ => return Err(InferenceError::InvalidOutputShape(shape, classes)),
    };

    Ok(scores)
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Prediction pipeline tests: real image decoding and preprocessing with a
//! canned-score engine standing in for the ONNX model

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use std::sync::Arc;

use crate::common::{encode, jpeg_bytes, png_bytes, StubEngine};
use xray_detection_node::{
    vision::xray::preprocessing::preprocess_for_classifier, Highlight, InferenceEngine,
    OnnxXrayClassifier, PredictError, XrayLabel, XrayPredictor,
};

const XRAY_MODEL_PATH: &str = "chest_xray_model.onnx";

#[test]
fn test_512_jpeg_reaches_engine_as_224_tensor() {
    let engine = Arc::new(StubEngine::new([0.0, 0.0, 5.0, 0.0]));
    let predictor = XrayPredictor::new(engine.clone());

    let result = predictor.predict_bytes(&jpeg_bytes(512, 512)).unwrap();

    assert_eq!(result.prediction, XrayLabel::Covid);
    assert_eq!(
        result.highlights,
        vec![
            Highlight { x: 50, y: 60, width: 120, height: 100 },
            Highlight { x: 180, y: 140, width: 80, height: 60 },
        ]
    );
    assert_eq!(engine.inputs()[0].shape(), &[1, 3, 224, 224]);
}

#[test]
fn test_engine_input_matches_preprocessing() {
    let engine = Arc::new(StubEngine::new([1.0, 0.0, 0.0, 0.0]));
    let predictor = XrayPredictor::new(engine.clone());

    let bytes = png_bytes(97, 133);
    predictor.predict_bytes(&bytes).unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(engine.inputs()[0], preprocess_for_classifier(&decoded));
}

#[test]
fn test_grayscale_xray_is_accepted() {
    let engine = Arc::new(StubEngine::new([0.0, 1.0, 0.0, 0.0]));
    let predictor = XrayPredictor::new(engine.clone());

    let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(300, 400, Luma([77])));
    let result = predictor.predict_bytes(&encode(&gray, ImageFormat::Png)).unwrap();

    assert_eq!(result.prediction, XrayLabel::Pneumonia);
    let input = &engine.inputs()[0];
    // All three channels come from the same gray value
    let r = input[[0, 0, 100, 100]] * 0.229 + 0.485;
    let g = input[[0, 1, 100, 100]] * 0.224 + 0.456;
    let b = input[[0, 2, 100, 100]] * 0.225 + 0.406;
    assert!((r - g).abs() < 1e-5 && (g - b).abs() < 1e-5);
}

#[test]
fn test_same_bytes_same_result() {
    let engine = Arc::new(StubEngine::new([0.1, 0.1, 0.1, 0.7]));
    let predictor = XrayPredictor::new(engine.clone());
    let bytes = jpeg_bytes(256, 320);

    let first = predictor.predict_bytes(&bytes).unwrap();
    let second = predictor.predict_bytes(&bytes).unwrap();

    assert_eq!(first, second);
    assert_eq!(engine.inputs()[0], engine.inputs()[1]);
}

#[test]
fn test_corrupt_bytes_never_reach_engine() {
    let engine = Arc::new(StubEngine::new([1.0, 0.0, 0.0, 0.0]));
    let predictor = XrayPredictor::new(engine.clone());

    let mut truncated = jpeg_bytes(128, 128);
    truncated.truncate(20);
    let err = predictor.predict_bytes(&truncated).unwrap_err();

    assert!(matches!(err, PredictError::DecodeFailure(_)));
    assert_eq!(engine.calls(), 0);
}

#[test]
fn test_missing_model_file_fails_to_load() {
    let err = OnnxXrayClassifier::new("/nonexistent/chest_xray_model.onnx", 1).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
#[ignore] // Only run if the model file is present
fn test_real_model_prediction_is_in_label_set() {
    let classifier = match OnnxXrayClassifier::new(XRAY_MODEL_PATH, 2) {
        Ok(c) => c,
        Err(_) => return,
    };
    assert!(!classifier.input_name().is_empty());

    let predictor = XrayPredictor::new(Arc::new(classifier));
    let bytes = jpeg_bytes(512, 512);

    let first = predictor.predict_bytes(&bytes).unwrap();
    let second = predictor.predict_bytes(&bytes).unwrap();

    assert!(XrayLabel::ALL.contains(&first.prediction));
    assert_eq!(first, second);
    assert_eq!(first.highlights.is_empty(), first.prediction == XrayLabel::Normal);
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use std::{env, sync::Arc};
use xray_detection_node::{
    api::start_server, config::NodeConfig, version, OnnxXrayClassifier, XrayPredictor,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("🚀 Starting {}", version::get_version_string());

    let config = NodeConfig::parse();
    config.validate().context("Invalid configuration")?;

    // Missing or unloadable model is fatal: never serve without it
    let classifier = match OnnxXrayClassifier::new(&config.model_path, config.intra_threads) {
        Ok(classifier) => classifier,
        Err(e) => {
            tracing::error!("❌ Failed to load X-ray model: {:#}", e);
            std::process::exit(1);
        }
    };

    let predictor = XrayPredictor::new(Arc::new(classifier));

    start_server(config, predictor).await
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Runtime configuration for the X-ray detection node

use anyhow::{anyhow, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default address, matching the port the web client calls
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Default location of the classifier
pub const DEFAULT_MODEL_PATH: &str = "chest_xray_model.onnx";

/// X-ray detection node
#[derive(Parser, Debug, Clone)]
#[command(name = "xray-detection-node")]
#[command(about = "Serves chest X-ray classification over HTTP", long_about = None)]
pub struct NodeConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "XRAY_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    /// Path to the ONNX classifier; must exist at startup
    #[arg(long, env = "XRAY_MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,

    /// ONNX Runtime intra-op threads
    #[arg(long, env = "XRAY_INTRA_THREADS", default_value_t = 4)]
    pub intra_threads: usize,

    /// Reject uploads larger than this many bytes (unlimited when unset)
    #[arg(long, env = "XRAY_MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: Option<usize>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            intra_threads: 4,
            max_upload_bytes: None,
        }
    }
}

impl NodeConfig {
    /// Check the configuration before any model is loaded
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.intra_threads == 0 {
            return Err(anyhow!("intra_threads must be at least 1"));
        }

        if self.max_upload_bytes == Some(0) {
            return Err(anyhow!("max_upload_bytes must be greater than 0 when set"));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr
            .parse()
            .map_err(|e| anyhow!("Invalid listen address '{}': {}", self.listen_addr, e))
    }
}

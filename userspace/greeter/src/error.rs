// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by the greeter.
pub type Result<T> = core::result::Result<T, GreeterError>;

/// Failures that abort the greeter at startup.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// Configuration file could not be loaded.
    #[error("config {}: {source}", .path.display())]
    Config {
        /// Path taken from `GREETER_CONFIG`.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: ConfigError,
    },
    /// Writing the greeting to the output sink failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

/// Reasons a configuration file is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
    /// File is not a valid greeter config.
    #[error("parse failed: {0}")]
    Parse(#[from] toml::de::Error),
}

// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Greeter configuration, loaded from the TOML file named by `GREETER_CONFIG`.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, GreeterError, Result};

/// Environment variable holding the configuration path.
pub const CONFIG_ENV: &str = "GREETER_CONFIG";

/// Selects which greeting variant runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreeterConfig {
    /// Use `Hello` instead of `hello`.
    pub capitalize: bool,
    /// Leak one uninitialised heap byte after printing. Negative-test fixture only.
    pub leak_fixture: bool,
}

impl GreeterConfig {
    /// Parses a TOML document.
    pub fn from_toml(text: &str) -> core::result::Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let wrap = |source: ConfigError| GreeterError::Config {
            path: path.to_path_buf(),
            source,
        };
        let text = fs::read_to_string(path).map_err(|err| wrap(err.into()))?;
        Self::from_toml(&text).map_err(wrap)
    }

    /// Loads from `GREETER_CONFIG` when set, defaults otherwise.
    pub fn from_env() -> Result<Self> {
        Self::from_path_var(std::env::var_os(CONFIG_ENV).as_deref())
    }

    /// Loads from the given `GREETER_CONFIG` value. `None` or empty means defaults.
    pub fn from_path_var(value: Option<&OsStr>) -> Result<Self> {
        match value.filter(|value| !value.is_empty()).map(PathBuf::from) {
            Some(path) => {
                log::debug!("greeter: loading config from {}", path.display());
                Self::load(&path)
            }
            None => {
                log::debug!("greeter: {CONFIG_ENV} unset, using defaults");
                Ok(Self::default())
            }
        }
    }
}

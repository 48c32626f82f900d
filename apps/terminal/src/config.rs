//! # Catalog Configuration
//!
//! Loads the tool, tool-type, and holiday lists at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. The file named by the `RENTOOL_CATALOG` environment variable
//! 2. `catalog.json` in the working directory
//! 3. An empty catalog (file absent)
//!
//! A missing file is not an error: the desk then runs with zero tools
//! and every lookup reports an unknown tool code. A file that exists
//! but cannot be read or parsed IS an error - silently ignoring a
//! broken catalog would misprice rentals.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs, io};
use thiserror::Error;
use tracing::warn;

use rentool_core::types::{HolidayRule, Tool, ToolType};

/// Environment variable naming the catalog file.
pub const CATALOG_PATH_ENV: &str = "RENTOOL_CATALOG";

/// Catalog file used when the environment variable is not set.
pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";

/// The three static lists the desk is built from.
///
/// All lists default to empty, so a config file may carry any subset of
/// the keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Tools available for customers to rent.
    #[serde(default)]
    pub tools: Vec<Tool>,

    /// Billing attributes per tool type.
    #[serde(default)]
    pub tool_types: Vec<ToolType>,

    /// Holidays that affect chargeable-day counting.
    #[serde(default)]
    pub holidays: Vec<HolidayRule>,
}

impl CatalogConfig {
    /// Loads the catalog from the configured path.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            env::var(CATALOG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Loads the catalog from an explicit path.
    ///
    /// A missing file yields the empty catalog; any other failure is
    /// reported as a typed error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| ConfigError::Malformed {
                path: path.display().to_string(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(
                    path = %path.display(),
                    "catalog file not found, starting with an empty catalog"
                );
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Unreadable {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The catalog file exists but is not valid JSON for the expected shape.
    #[error("Catalog file {path} is not valid catalog JSON: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog file exists but could not be read.
    #[error("Catalog file {path} could not be read: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

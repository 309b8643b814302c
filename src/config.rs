//! YAML configuration file support for Bodega.
//!
//! One file describes where the catalog lives and how queries behave. Every
//! section is optional; omitted fields take their defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! catalog:
//!   path: "resultado_final.xlsx"
//!   format: "csv"            # optional, inferred from the extension
//!   columns:
//!     code: "Codigo del Articulo"
//!     description: "Descripcion"
//!     manufacturer: "Fabricante"
//!     category: "Categoria"
//!     stock_quantity: "Suma Bodegas"
//!
//! matcher:
//!   threshold: 70
//!
//! visibility:
//!   client_cap: 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use catalog::{ColumnMapping, LoadOptions, SourceFormat};
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::visibility::{StockPolicy, DEFAULT_CLIENT_CAP};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BodegaConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub catalog: CatalogYamlConfig,

    #[serde(default)]
    pub matcher: MatchConfig,

    #[serde(default)]
    pub visibility: VisibilityYamlConfig,
}

impl BodegaConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: BodegaConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.catalog.validate()?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;
        Ok(())
    }

    pub fn stock_policy(&self) -> StockPolicy {
        StockPolicy::new(self.visibility.client_cap)
    }
}

impl Default for BodegaConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            catalog: CatalogYamlConfig::default(),
            matcher: MatchConfig::default(),
            visibility: VisibilityYamlConfig::default(),
        }
    }
}

/// Catalog source YAML configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogYamlConfig {
    /// Catalog file; callers such as the server may supply their own.
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub format: Option<SourceFormat>,

    #[serde(default)]
    pub columns: ColumnMapping,
}

impl CatalogYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self
            .path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigLoadError::Validation(
                "catalog.path must not be empty".to_string(),
            ));
        }
        for header in self.columns.required() {
            if header.trim().is_empty() {
                return Err(ConfigLoadError::Validation(
                    "catalog.columns entries must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            format: self.format,
            columns: self.columns.clone(),
        }
    }
}

/// Stock visibility YAML configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityYamlConfig {
    /// Customers see exact stock up to this quantity and `+cap` above it.
    #[serde(default = "default_client_cap")]
    pub client_cap: u64,
}

impl Default for VisibilityYamlConfig {
    fn default() -> Self {
        Self {
            client_cap: default_client_cap(),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_client_cap() -> u64 {
    DEFAULT_CLIENT_CAP
}

use crate::config::{ServerConfig, DEFAULT_CATALOG_PATH};
use crate::error::ServerResult;
use bodega::{BodegaConfig, Inventory};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Inventory facade over the catalog loaded at startup
    pub inventory: Arc<Inventory>,
}

impl ServerState {
    /// Create new server state, loading the catalog.
    ///
    /// The catalog path comes from `catalog_path`, then from the settings
    /// file's `catalog.path`, then [`DEFAULT_CATALOG_PATH`]. Any load or
    /// settings failure is returned so startup can abort.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let settings = match &config.settings_path {
            Some(path) => BodegaConfig::from_file(path).map_err(bodega::SetupError::from)?,
            None => BodegaConfig::default(),
        };

        let catalog_path = config
            .catalog_path
            .clone()
            .or_else(|| settings.catalog.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        let inventory = Inventory::load(&catalog_path, &settings)?;

        Ok(Self::with_inventory(config, inventory))
    }

    /// Wrap an already built inventory.
    pub fn with_inventory(config: ServerConfig, inventory: Inventory) -> Self {
        Self {
            config: Arc::new(config),
            inventory: Arc::new(inventory),
        }
    }
}

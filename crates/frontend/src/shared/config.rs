use crate::shared::errors::ConfigError;
use serde::Deserialize;

/// localStorage key holding an optional TOML override of the default config
pub const CONFIG_STORAGE_KEY: &str = "artwork_grid_config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    pub catalog: CatalogConfig,
    pub grid: GridSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// List endpoint, without query string
    pub base_url: String,
    /// Fields requested from the catalog; empty means "everything"
    #[serde(default)]
    pub fields: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridSettings {
    pub page_size: usize,
    #[serde(default)]
    pub page_size_options: Vec<usize>,
    pub notification_timeout_ms: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[catalog]
base_url = "https://api.artic.edu/api/v1/artworks"
fields = ["id", "title", "place_of_origin", "artist_display", "date_start", "date_end"]

[grid]
page_size = 12
page_size_options = [12, 24, 48, 96]
notification_timeout_ms = 5000
"#;

impl GridConfig {
    /// Parses a TOML document and normalises it: the page size is at least 1
    /// and always present among the page size options.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: GridConfig = toml::from_str(contents)?;
        config.grid.page_size = config.grid.page_size.max(1);
        config.grid.page_size_options.retain(|&size| size > 0);
        if !config.grid.page_size_options.contains(&config.grid.page_size) {
            config.grid.page_size_options.push(config.grid.page_size);
        }
        config.grid.page_size_options.sort_unstable();
        config.grid.page_size_options.dedup();
        Ok(config)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG).expect("Invalid embedded default config")
    }
}

/// Resolves the configuration.
///
/// Search order:
/// 1. `override_toml` (read from localStorage by the caller)
/// 2. Falls back to the embedded default config
pub fn resolve_config(override_toml: Option<&str>) -> GridConfig {
    if let Some(contents) = override_toml {
        match GridConfig::from_toml(contents) {
            Ok(config) => {
                log::info!("Using configuration override from {}", CONFIG_STORAGE_KEY);
                return config;
            }
            Err(e) => {
                log::warn!("Ignoring configuration override: {}", e);
            }
        }
    }

    log::info!("Using default embedded configuration");
    GridConfig::default()
}

/// Loads the configuration for the running app, honouring a localStorage
/// override when present.
pub fn load_config() -> GridConfig {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());
    resolve_config(stored.as_deref())
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main browser configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BrowserConfig {
    /// Where recipes and the page shell come from
    #[serde(default)]
    pub data: DataConfig,
    /// Durable storage for favorites
    #[serde(default)]
    pub storage: StorageConfig,
    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,
    /// Markup generation
    #[serde(default)]
    pub render: RenderConfig,
    /// Rendered page output
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for input data
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// JSON recipe dataset; the built-in dataset is used when unset
    pub recipes_path: Option<PathBuf>,
    /// Host HTML shell; the bundled shell is used when unset
    pub shell_path: Option<PathBuf>,
}

/// Configuration for the favorites storage slot
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// File holding the key-value slots
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    /// Slot name for the favorites list
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_storage_key(),
        }
    }
}

/// Configuration for search input handling
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Quiet period in milliseconds before typed input is committed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Configuration for markup generation
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RenderConfig {
    /// HTML-escape recipe text. The built-in data is trusted, so off by default.
    #[serde(default)]
    pub escape_html: bool,
}

/// Configuration for the rendered page
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// File the rendered page is written to
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

// Default value functions
fn default_storage_path() -> PathBuf {
    PathBuf::from("favorites.json")
}

fn default_storage_key() -> String {
    crate::favorites::DEFAULT_STORAGE_KEY.to_string()
}

fn default_debounce_ms() -> u64 {
    crate::debounce::DEFAULT_DEBOUNCE_MS
}

fn default_output_path() -> PathBuf {
    PathBuf::from("recipes.html")
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. `recipes.toml` in the current directory (or the given file)
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__SEARCH__DEBOUNCE_MS
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_config(path)
    }
}

/// Load configuration from file and environment variables
///
/// An explicitly given file must exist; the default `recipes.toml` may be missing.
pub fn load_config(path: Option<&Path>) -> Result<BrowserConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipes").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPES__STORAGE__PATH
        .add_source(
            Environment::with_prefix("RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

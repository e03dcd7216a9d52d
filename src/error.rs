use thiserror::Error;

/// Errors that can occur while loading, rendering or driving the recipe browser
#[derive(Error, Debug)]
pub enum BrowserError {
    /// The host page has no root container to render into
    #[error("Root container '#{0}' not found in page shell")]
    MissingRoot(String),

    /// Recipe dataset could not be read or is inconsistent
    #[error("Invalid recipe data: {0}")]
    InvalidData(String),

    /// Two recipes share the same identifier
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),

    /// Referenced recipe does not exist in the store
    #[error("Unknown recipe id: {0}")]
    UnknownRecipe(u32),

    /// CSS selector could not be parsed
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    /// Malformed event script
    #[error("Invalid event script: {0}")]
    InvalidScript(String),

    /// Failed to read or write durable storage
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Failed to (de)serialize JSON
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

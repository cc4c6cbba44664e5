use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Wardrobe source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Failed to look up {field} for item {item_id}: {message}")]
    MetadataLookup {
        item_id: u32,
        field: &'static str,
        message: String,
    },

    #[error("Invalid model id: {0}")]
    InvalidModelId(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Shorthand for a failed catalog query
    pub fn lookup(item_id: u32, field: &'static str, message: impl Into<String>) -> Self {
        Error::MetadataLookup {
            item_id,
            field,
            message: message.into(),
        }
    }
}

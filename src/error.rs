use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to load {url}: {message}")]
    Load { url: String, message: String },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

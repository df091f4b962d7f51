use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortalError>;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request to {path} failed with status {status}")]
    Api { path: String, status: u16 },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Config error: {0}")]
    Config(String),
}

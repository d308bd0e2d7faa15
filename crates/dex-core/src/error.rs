use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("unexpected payload from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("reference url {0} carries no identifier segment")]
    InvalidReference(String),

    #[error("list container {0} not found in document")]
    MissingContainer(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    pub fn transport(url: &str, message: impl ToString) -> Self {
        CatalogError::Transport {
            url: url.to_owned(),
            message: message.to_string(),
        }
    }

    pub fn decode(url: &str, message: impl ToString) -> Self {
        CatalogError::Decode {
            url: url.to_owned(),
            message: message.to_string(),
        }
    }
}

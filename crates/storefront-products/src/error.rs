//! Error types for storefront-products.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("no bearer token configured for {endpoint}")]
    MissingCredential { endpoint: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse product list: {0}")]
    Parse(#[from] serde_json::Error),
}

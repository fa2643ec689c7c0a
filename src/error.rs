use crate::grid::GridError;
use crate::provider::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindMapError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Invalid sampling options: {0}")]
    InvalidSampling(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Failed to serialize wind features")]
    Serialization(#[from] serde_json::Error),
}

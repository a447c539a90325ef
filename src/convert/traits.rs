// Converter trait — the swap-ready abstraction over the conversion backend.

use async_trait::async_trait;
use thiserror::Error;

/// Ways a conversion can fail. Every variant is recoverable: the caller
/// reports it and lets the user retry.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The service answered with a non-success HTTP status.
    #[error("Backend processing failed: {0}")]
    Backend(String),

    /// The service answered but reported a failure of its own.
    #[error("{0}")]
    Rejected(String),

    /// The service answered with something other than a converted document.
    #[error("Unexpected response format")]
    UnexpectedResponse,

    /// The request never completed or the body could not be decoded.
    #[error("Could not reach the conversion service: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Trait for converting a LaTeX CV into another template.
/// Implementations are async because the real one is an HTTP call.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Convert `source_latex` into the template identified by `template_url`,
    /// returning the converted LaTeX source.
    async fn convert(
        &self,
        source_latex: &str,
        template_url: &str,
    ) -> Result<String, ConversionError>;
}

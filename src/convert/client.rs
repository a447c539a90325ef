// HTTP client for the remote template conversion service.
//
// One POST per conversion, JSON both ways. The endpoint URL is used exactly
// as configured (the service may care about a trailing slash).

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::traits::{ConversionError, Converter};

/// Request body sent to the conversion service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest<'a> {
    pub source_latex: &'a str,
    pub template_url: &'a str,
}

/// Response body returned by the conversion service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    #[serde(default)]
    pub success: bool,
    pub converted_latex: Option<String>,
    pub error: Option<String>,
}

/// Decide what a decoded response means.
///
/// An `error` field wins over everything else. Success requires both the
/// `success` flag and a non-empty converted document.
pub fn interpret_response(response: ConversionResponse) -> Result<String, ConversionError> {
    if let Some(error) = response.error {
        return Err(ConversionError::Rejected(error));
    }
    match response.converted_latex {
        Some(latex) if response.success && !latex.is_empty() => Ok(latex),
        _ => Err(ConversionError::UnexpectedResponse),
    }
}

/// Client for the conversion service.
pub struct ConversionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ConversionClient {
    /// Create a client posting to `endpoint`, giving up on any single
    /// request after `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("resume-wizard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Converter for ConversionClient {
    async fn convert(
        &self,
        source_latex: &str,
        template_url: &str,
    ) -> Result<String, ConversionError> {
        let request = ConversionRequest {
            source_latex,
            template_url,
        };

        debug!(
            endpoint = %self.endpoint,
            template = template_url,
            latex_len = source_latex.len(),
            "Sending conversion request"
        );

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            warn!(%status, "Conversion service returned an error status");
            return Err(ConversionError::Backend(reason));
        }

        let body: ConversionResponse = response.json().await?;
        interpret_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_fields() {
        let request = ConversionRequest {
            source_latex: r"\documentclass{res}",
            template_url: "https://example.com/t",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sourceLatex"], r"\documentclass{res}");
        assert_eq!(json["templateUrl"], "https://example.com/t");
    }

    #[test]
    fn successful_response() {
        let resp: ConversionResponse =
            serde_json::from_str(r#"{"success": true, "convertedLatex": "\\begin{document}"}"#)
                .unwrap();
        assert_eq!(interpret_response(resp).unwrap(), r"\begin{document}");
    }

    #[test]
    fn error_field_wins() {
        let resp: ConversionResponse = serde_json::from_str(
            r#"{"success": true, "convertedLatex": "x", "error": "template not found"}"#,
        )
        .unwrap();
        match interpret_response(resp) {
            Err(ConversionError::Rejected(msg)) => assert_eq!(msg, "template not found"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn success_without_document_is_unexpected() {
        let resp: ConversionResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(
            interpret_response(resp),
            Err(ConversionError::UnexpectedResponse)
        ));
    }

    #[test]
    fn empty_document_is_unexpected() {
        let resp: ConversionResponse =
            serde_json::from_str(r#"{"success": true, "convertedLatex": ""}"#).unwrap();
        assert!(matches!(
            interpret_response(resp),
            Err(ConversionError::UnexpectedResponse)
        ));
    }

    #[test]
    fn document_without_success_flag_is_unexpected() {
        let resp: ConversionResponse =
            serde_json::from_str(r#"{"convertedLatex": "x"}"#).unwrap();
        assert!(matches!(
            interpret_response(resp),
            Err(ConversionError::UnexpectedResponse)
        ));
    }

    #[test]
    fn client_keeps_endpoint_verbatim() {
        let client =
            ConversionClient::new("https://convert.example.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "https://convert.example.com/");
    }
}

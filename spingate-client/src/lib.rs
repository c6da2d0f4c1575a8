//! Spingate HTTP Client
//!
//! A simple, type-safe HTTP client for the Spinnaker Gate pipeline API.
//!
//! Each method performs exactly one request/response cycle and returns; the
//! client applies no retries, timeouts, or caching of its own. A caller that
//! needs bounded latency configures it on the [`reqwest::Client`] passed to
//! [`GateClient::with_client`].
//!
//! # Example
//!
//! ```no_run
//! use spingate_client::GateClient;
//! use spingate_core::dto::pipeline::CreatePipelineRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GateClient::new("http://localhost:8084");
//!
//!     // Create a pipeline
//!     client.create_pipeline(&CreatePipelineRequest {
//!         application: "app1".to_string(),
//!         name: "deploy".to_string(),
//!     }).await?;
//!
//!     let pipeline = client.get_pipeline("app1", "deploy").await?;
//!     println!("Created pipeline: {}", pipeline.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod pipelines;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use spingate_core::domain::pipeline::Pipeline;
pub use spingate_core::dto::pipeline::CreatePipelineRequest;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Spinnaker Gate API
///
/// This client covers the pipeline configuration endpoints: list by
/// application, get by name or id, create, update, and delete. It holds no
/// state beyond the base URL and the underlying [`reqwest::Client`], so it
/// is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct GateClient {
    /// Base URL of the Gate API (e.g., "http://localhost:8084")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl GateClient {
    /// Create a new Gate client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Gate API (e.g., "http://localhost:8084")
    ///
    /// # Example
    /// ```
    /// use spingate_client::GateClient;
    ///
    /// let client = GateClient::new("http://localhost:8084");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new Gate client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Gate API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use spingate_client::GateClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GateClient::with_client("http://localhost:8084", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the Gate API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is not interesting (create, update,
    /// delete)
    ///
    /// This method checks the status code and returns an error if the request
    /// failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GateClient::new("http://localhost:8084");
        assert_eq!(client.base_url(), "http://localhost:8084");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = GateClient::new("http://localhost:8084/");
        assert_eq!(client.base_url(), "http://localhost:8084");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = GateClient::with_client("http://localhost:8084", http_client);
        assert_eq!(client.base_url(), "http://localhost:8084");
    }
}

//! Delivery of an [`IntakeRecord`] to the backend.
//!
//! The form only depends on [`IntakeTransport`]; [`HttpTransport`] is the
//! production implementation that POSTs JSON over HTTP.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::error::{IntakeError, IntakeResult};
use crate::types::IntakeRecord;

/// Path of the intake endpoint, relative to the API base URL
pub const ENDPOINT_PATH: &str = "/api/pacientes";

/// Default API base URL when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Anything that can deliver one record and report how it went.
///
/// - `Ok(())`: the backend accepted the record
/// - `Err(IntakeError::RequestRejected)`: it answered with a non-success status
/// - `Err(IntakeError::Transport)`: the request never completed
pub trait IntakeTransport: Send + Sync {
    fn send(&self, record: &IntakeRecord) -> impl Future<Output = IntakeResult<()>> + Send;
}

/// Settings for [`HttpTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    /// Origin of the API, e.g. `http://localhost:8080`
    pub base_url: String,
    /// Request timeout; `None` leaves it to the OS/network stack
    pub timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL of the intake endpoint
    pub fn endpoint(&self) -> IntakeResult<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| IntakeError::Config(format!("Invalid API URL '{}': {}", self.base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(IntakeError::Config(format!(
                "Invalid API URL '{}': not a base URL",
                self.base_url
            )));
        }
        base.join(ENDPOINT_PATH)
            .map_err(|e| IntakeError::Config(format!("Invalid API URL '{}': {}", self.base_url, e)))
    }
}

/// POSTs records as JSON to `<base_url>/api/pacientes`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> IntakeResult<Self> {
        let endpoint = config.endpoint()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| IntakeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl IntakeTransport for HttpTransport {
    async fn send(&self, record: &IntakeRecord) -> IntakeResult<()> {
        debug!(endpoint = %self.endpoint, "Posting intake record");

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Intake record accepted");
            Ok(())
        } else {
            warn!(status = status.as_u16(), "Intake record rejected");
            Err(IntakeError::RequestRejected {
                status: status.as_u16(),
            })
        }
    }
}

impl<T: IntakeTransport> IntakeTransport for std::sync::Arc<T> {
    fn send(&self, record: &IntakeRecord) -> impl Future<Output = IntakeResult<()>> + Send {
        (**self).send(record)
    }
}

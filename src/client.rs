use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::OnceCell;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::{DownloadOutcome, Recipe, ServiceStatus, SuggestResponse};

/// Client for the recipe suggestion service.
///
/// Holds the base URL, the Drive folder used for model provisioning, and a
/// one-time readiness guard shared by all callers.
pub struct RecipeClient {
    http: Client,
    base_url: String,
    drive_url: String,
    ready: OnceCell<()>,
}

impl RecipeClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("smartcook-client/0.3")
            .build()?;

        Ok(RecipeClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            drive_url: config.drive_url.clone(),
            ready: OnceCell::new(),
        })
    }

    /// Start building a client with explicit settings
    ///
    /// # Example
    /// ```
    /// use smartcook_client::RecipeClient;
    ///
    /// let client = RecipeClient::builder()
    ///     .base_url("http://127.0.0.1:5000")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder() -> RecipeClientBuilder {
        RecipeClientBuilder::default()
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>, drive_url: impl Into<String>) -> Self {
        RecipeClient {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            drive_url: drive_url.into(),
            ready: OnceCell::new(),
        }
    }

    /// Confirm the service is ready, provisioning models if needed.
    ///
    /// Concurrent callers share a single in-flight initialization; once it
    /// succeeds the check is never repeated for the lifetime of the client.
    /// A failed attempt leaves the guard unset so the next call retries.
    pub async fn ensure_ready(&self) -> Result<(), ClientError> {
        self.ready
            .get_or_try_init(|| self.initialize())
            .await
            .map(|_| ())
    }

    async fn initialize(&self) -> Result<(), ClientError> {
        let status = self.health().await?;
        if status.is_ready() {
            debug!("service ready ({} models loaded)", status.models_count.unwrap_or(0));
            return Ok(());
        }

        debug!(
            "service not ready (status {:?}), requesting model download",
            status.status
        );
        let outcome = self.download_models().await?;
        if outcome.success {
            Ok(())
        } else {
            Err(ClientError::Initialization(
                outcome
                    .error
                    .unwrap_or_else(|| "model download failed".to_string()),
            ))
        }
    }

    /// Fetch the service health report
    pub async fn health(&self) -> Result<ServiceStatus, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        read_json(response).await
    }

    /// Trigger the one-shot model provisioning action on the service.
    ///
    /// The service reports provisioning failures with the same envelope it
    /// uses for success, sometimes under a non-2xx status; the envelope wins
    /// whenever the body parses as one.
    pub async fn download_models(&self) -> Result<DownloadOutcome, ClientError> {
        let response = self
            .http
            .post(format!("{}/download-models", self.base_url))
            .json(&json!({ "drive_url": self.drive_url }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if let Ok(outcome) = serde_json::from_str::<DownloadOutcome>(&body) {
            return Ok(outcome);
        }
        if !status.is_success() {
            return Err(ClientError::Request {
                status,
                message: body.trim().to_string(),
            });
        }
        Err(ClientError::Parse(format!(
            "download-models returned an unrecognized body: {}",
            body.trim()
        )))
    }

    /// Submit an ingredient query and return the suggested recipes.
    ///
    /// The query is one comma-separated string of ingredients. An empty
    /// result list means no matches, not an error. Empty queries are expected
    /// to be rejected by the caller before this is invoked.
    pub async fn suggest(&self, ingredients: &str) -> Result<Vec<Recipe>, ClientError> {
        self.ensure_ready().await?;

        let response = self
            .http
            .post(format!("{}/suggest", self.base_url))
            .json(&json!({ "ingredients": ingredients }))
            .send()
            .await?;

        let envelope: SuggestResponse = read_json(response).await?;
        debug!("service returned {} suggestions", envelope.recipes.len());
        Ok(envelope.recipes)
    }
}

/// Builder for a [`RecipeClient`] with explicit settings
#[derive(Debug, Default)]
pub struct RecipeClientBuilder {
    base_url: Option<String>,
    drive_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeClientBuilder {
    /// Set the base URL of the suggestion service
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the Drive folder the service pulls model assets from
    pub fn drive_url(mut self, url: impl Into<String>) -> Self {
        self.drive_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client, filling unset fields from defaults
    pub fn build(self) -> Result<RecipeClient, ClientError> {
        let mut config = ClientConfig::default();
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(drive_url) = self.drive_url {
            config.drive_url = drive_url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs();
        }
        RecipeClient::new(&config)
    }
}

/// Check the HTTP status, then parse the body against an explicit schema.
///
/// Non-2xx responses become [`ClientError::Request`] with the body text;
/// bodies that do not match the schema become [`ClientError::Parse`].
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ClientError::Request {
            status,
            message: body.trim().to_string(),
        });
    }

    serde_json::from_str(&body).map_err(|err| ClientError::Parse(err.to_string()))
}

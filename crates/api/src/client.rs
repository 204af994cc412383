//! HTTP client for the dashboard API
//!
//! Every read and write goes to one endpoint. Reads select the collection
//! with `?entity=`; writes put the discriminator in the JSON body.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tuning_core::{DashboardConfig, RecordId};
use tuning_model::{EntityRecord, Record};

use crate::error::{ClientError, ClientResult};
use crate::payload::{self, CreatedResponse, ErrorResponse, MessageResponse};

/// Typed client for the single JSON endpoint
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client
    client: Client,
    /// Endpoint URL, e.g. `http://127.0.0.1:8000/api`
    endpoint: String,
}

impl ApiClient {
    /// Create a client for `endpoint` with the given per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: std::time::Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a client from the dashboard configuration
    pub fn from_config(config: &DashboardConfig) -> ClientResult<Self> {
        Self::new(config.api_url.clone(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // ========================================================================
    // Entity operations
    // ========================================================================

    /// Fetch one whole collection
    pub async fn list<R: Record>(&self) -> ClientResult<Vec<R>> {
        let kind = R::KIND;
        tracing::debug!("GET {}?entity={}", self.endpoint, kind);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("entity", kind.as_str())])
            .send()
            .await?;
        let records: Vec<R> = self.handle_response(response).await?;

        tracing::debug!("Fetched {} {}", records.len(), kind);
        Ok(records)
    }

    /// Create a record and return the id assigned by the server
    pub async fn create(&self, record: &EntityRecord) -> ClientResult<RecordId> {
        let body = payload::create_body(record)?;
        tracing::debug!("POST {} entity={}", self.endpoint, record.kind());

        let created: CreatedResponse = self.post(&body).await?;
        created.id.ok_or_else(|| {
            ClientError::UnexpectedResponse(format!(
                "create of {} returned no id",
                record.kind()
            ))
        })
    }

    /// Update an existing record
    pub async fn update(&self, record: &EntityRecord) -> ClientResult<()> {
        let body = payload::update_body(record)?;
        tracing::debug!(
            "PUT {} entity={} id={:?}",
            self.endpoint,
            record.kind(),
            record.id()
        );

        let _: MessageResponse = self.put(&body).await?;
        Ok(())
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    /// Send a POST request with a JSON body and deserialize the response
    async fn post<T: DeserializeOwned, B: Serialize>(&self, body: &B) -> ClientResult<T> {
        let response = self.client.post(&self.endpoint).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Send a PUT request with a JSON body and deserialize the response
    async fn put<T: DeserializeOwned, B: Serialize>(&self, body: &B) -> ClientResult<T> {
        let response = self.client.put(&self.endpoint).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Check the status and deserialize a successful body
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            let message = serde_json::from_slice::<ErrorResponse>(&bytes)
                .ok()
                .map(|body| body.error);
            Err(ClientError::api(status.as_u16(), message))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

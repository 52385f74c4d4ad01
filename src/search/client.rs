use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{AvailabilitySlot, SearchError, SearchRequest};

/// Anything that can answer an availability search.
#[async_trait]
pub trait SlotSource: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<AvailabilitySlot>, SearchError>;
}

/// Talks to the remote availability service over HTTP.
///
/// One POST per search, no retries and no timeout beyond what the
/// underlying client applies.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    details: Option<Value>,
}

impl HttpSearchClient {
    pub const PATH: &'static str = "/courts";

    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), Self::PATH);
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Error for a non-2xx answer: the service's `details` when it sent some,
/// otherwise the generic status message.
fn status_error(status: u16, body: &[u8]) -> SearchError {
    let details = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.details)
        .and_then(|details| match details {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        });

    match details {
        Some(details) => SearchError::Application { status, details },
        None => SearchError::Transport(format!("Request failed with status code {status}")),
    }
}

#[async_trait]
impl SlotSource for HttpSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<AvailabilitySlot>, SearchError> {
        tracing::info!(
            endpoint = %self.endpoint,
            start_date = %request.start_date,
            days = request.days_to_iterate,
            venues = ?request.selected_recintos,
            courts = ?request.selected_canchas,
            "searching courts");

        let response = self.client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .inspect_err(|e| tracing::error!("court search transport failure: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            let error = status_error(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), "court search rejected: {error}");
            return Err(error);
        }

        let slots: Vec<AvailabilitySlot> = response.json().await?;
        tracing::info!(count = slots.len(), "court search answered");
        Ok(slots)
    }
}

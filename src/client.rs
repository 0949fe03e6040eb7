//! HTTP client for the local summarisation service.
//!
//! Uses reqwest for the single outbound POST. The endpoint is fixed.

use crate::summary::{ServiceReply, SummarizeError, SummarizeRequest};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Where the summarisation service listens
pub const SUMMARIZE_URL: &str = "http://127.0.0.1:5000/summarize";

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("vidsum/", env!("CARGO_PKG_VERSION"));

/// Something that can answer a summarise request.
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Send one request and hand back the raw reply.
    async fn summarize(&self, request: &SummarizeRequest) -> Result<ServiceReply, SummarizeError>;
}

/// The real service, reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSummaryService {
    client: Client,
    url: String,
}

impl HttpSummaryService {
    /// Client for the fixed local endpoint
    pub fn new() -> Result<Self, SummarizeError> {
        Self::with_url(SUMMARIZE_URL)
    }

    /// Client for another endpoint, e.g. a mock service in tests
    pub fn with_url(url: impl Into<String>) -> Result<Self, SummarizeError> {
        Ok(Self {
            client: create_client()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// No timeout: a hung service keeps the cycle loading until the call settles.
fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}

#[async_trait]
impl SummaryService for HttpSummaryService {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<ServiceReply, SummarizeError> {
        debug!(url = %self.url, video_id = %request.video_id, "posting summarize request");

        // `json` also sets `Content-Type: application/json`
        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "summarize reply received");
        Ok(ServiceReply { status, body })
    }
}

use std::sync::Mutex;

use bytes::Bytes;
use futures_util::stream;
use thiserror::Error;

use super::http::{HttpClient, HttpResponse};

/// Error produced by a [`StaticClient`] configured to fail.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct StaticClientError(pub String);

/// A request seen by a [`StaticClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// In-memory client answering every request with the same canned response.
///
/// Records every request it sees, so tests can check what was sent.
pub struct StaticClient {
    outcome: std::result::Result<(u16, Vec<Bytes>), String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StaticClient {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self::chunked(status, vec![body.into()])
    }

    /// Deliver the body in several chunks.
    pub fn chunked(status: u16, chunks: Vec<Bytes>) -> Self {
        Self {
            outcome: Ok((status, chunks)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request before any response arrives.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl HttpClient for StaticClient {
    type Error = StaticClientError;

    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_string(),
                headers: headers.to_vec(),
            });
        }

        let (status, chunks) = self.outcome.clone().map_err(StaticClientError)?;
        let body = stream::iter(chunks.into_iter().map(Ok));

        Ok(HttpResponse {
            status,
            body: Box::pin(body),
        })
    }
}

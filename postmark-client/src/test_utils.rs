//! Test-only in-memory transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::PostmarkClient;
use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{ClientError, Result};
use crate::transport::{HttpRequest, HttpResponse, Transport};

pub const TEST_BASE_URL: &str = "http://postmark.test";

/// Replays queued responses in order and records every request it receives.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn push_json(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_error(&self, error: ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ClientError::Transport {
                    detail: "mock transport has no queued response".to_string(),
                })
            })
    }
}

/// Client wired to a fresh [`MockTransport`] at [`TEST_BASE_URL`].
pub fn client_with(credentials: Credentials) -> (PostmarkClient, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::default());
    let client = PostmarkClient::with_transport(
        credentials,
        &ClientConfig::with_base_url(TEST_BASE_URL),
        mock.clone(),
    );
    (client, mock)
}

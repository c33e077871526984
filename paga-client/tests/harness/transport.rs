use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use paga_client::Transport;
use paga_core::format::error::GenericError;

#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub url: String,
    pub body: serde_json::Value,
    pub timeout: u64,
}

/// Replays canned bodies in order and records everything posted to it.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Result<String, GenericError>>>>,
    sent: Arc<Mutex<Vec<SentRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, body: serde_json::Value) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(body.to_string()));
        self
    }

    pub fn reply_raw(&self, body: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(body.to_string()));
        self
    }

    pub fn fail(&self, err: GenericError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn post(&mut self, url: String, body: String, timeout: u64) -> Result<String, GenericError> {
        self.sent.lock().unwrap().push(SentRequest {
            url,
            body: serde_json::from_str(&body).map_err(|_| GenericError::ParsingError)?,
            timeout,
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenericError::Offline))
    }
}

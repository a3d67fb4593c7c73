//! In-memory transport for unit tests.

use crate::error::HttpError;
use crate::http::transport::JsonTransport;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A recorded call: method, URL, query pairs and optional body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub method: &'static str,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

/// Replies with queued results in order and records every call.
///
/// An exhausted queue answers with a 500.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    replies: Mutex<VecDeque<Result<serde_json::Value, HttpError>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, result: Result<serde_json::Value, HttpError>) -> Self {
        self.replies.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn reply_ok(self, body: serde_json::Value) -> Self {
        self.reply(Ok(body))
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: Call) -> Result<serde_json::Value, HttpError> {
        self.calls.lock().unwrap().push(call);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(HttpError::ServerError {
                status: 500,
                body: "no reply queued".to_string(),
            }))
    }
}

impl JsonTransport for FakeTransport {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, HttpError> {
        self.next(Call {
            method: "GET",
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: None,
        })
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        self.next(Call {
            method: "POST",
            url: url.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
    }
}

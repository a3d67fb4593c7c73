//! Low-level HTTP client — `TrackerHttp`.
//!
//! Sends JSON requests, maps non-2xx statuses to [`HttpError`] and pulls the
//! backend's `detail` message out of error bodies. Endpoint knowledge lives in
//! the domain sub-clients; this layer only knows about URLs and JSON.

use crate::error::HttpError;
use crate::http::transport::JsonTransport;

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// reqwest-backed [`JsonTransport`].
#[derive(Debug, Clone)]
pub struct TrackerHttp {
    client: Client,
}

impl TrackerHttp {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        builder = builder.default_headers(headers);

        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn do_request(
        &self,
        method: reqwest::Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, HttpError> {
        tracing::debug!(method = %method, url, "Sending request");

        let mut req = self.client.request(method.clone(), url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<serde_json::Value>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::warn!(method = %method, url, status = status_code, "Request failed");

        Err(status_error(status_code, &body_text))
    }
}

impl JsonTransport for TrackerHttp {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, HttpError> {
        self.do_request(reqwest::Method::GET, url, query, None).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        self.do_request(reqwest::Method::POST, url, &[], Some(body))
            .await
    }
}

/// Maps a non-2xx status and its body to an [`HttpError`].
pub(crate) fn status_error(status: u16, body: &str) -> HttpError {
    let detail = error_detail(body);
    match status {
        400 => HttpError::BadRequest(detail),
        404 => HttpError::NotFound(detail),
        422 => HttpError::Unprocessable(detail),
        500..=599 => HttpError::ServerError {
            status,
            body: detail,
        },
        _ => HttpError::UnexpectedStatus {
            status,
            body: detail,
        },
    }
}

/// Error body format from the backend (`{"detail": ...}`).
#[derive(Debug, Clone, Deserialize)]
struct ErrorResponse {
    #[serde(default, alias = "message", alias = "error")]
    detail: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct FieldError {
    msg: String,
}

/// Human-readable message from an error body.
///
/// `detail` is a string for handled errors and a list of field errors for
/// request validation failures. A non-JSON body is returned as-is.
pub(crate) fn error_detail(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) else {
        return body.trim().to_string();
    };

    match parsed.detail {
        Some(serde_json::Value::String(s)) => s,
        Some(list @ serde_json::Value::Array(_)) => {
            match serde_json::from_value::<Vec<FieldError>>(list.clone()) {
                Ok(fields) => fields
                    .into_iter()
                    .map(|f| f.msg)
                    .collect::<Vec<_>>()
                    .join("; "),
                Err(_) => list.to_string(),
            }
        }
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

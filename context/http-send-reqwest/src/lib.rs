//! Reqwest-based transport for qcloud.
//!
//! `ReqwestHttpSend` implements [`HttpSend`] on top of a [`reqwest::Client`].
//! Every response is returned as-is, whatever its status; failures that
//! leave the caller without a response become [`ErrorKind::Transport`]
//! errors with the reqwest error kept as source.
//!
//! ## Example
//!
//! ```no_run
//! use qcloud_core::Context;
//! use qcloud_http_send_reqwest::ReqwestHttpSend;
//! use std::time::Duration;
//!
//! let client = reqwest::Client::builder()
//!     .connect_timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));
//! ```
//!
//! [`ErrorKind::Transport`]: qcloud_core::ErrorKind::Transport

use async_trait::async_trait;
use bytes::Bytes;
use qcloud_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// HttpSend backed by a reqwest client.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request").with_source(e)
        })?;

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(format!("failed to send request: {e}")).with_source(e))?;

        let mut builder = http::Response::builder()
            .status(resp.status())
            .version(resp.version());
        if let Some(headers) = builder.headers_mut() {
            *headers = resp.headers().clone();
        }

        let body = resp.bytes().await.map_err(|e| {
            Error::transport(format!("failed to read response body: {e}")).with_source(e)
        })?;

        Ok(builder.body(body)?)
    }
}

//! Core components for calling Tencent Cloud APIs.
//!
//! This crate provides the foundational types and traits shared by the
//! qcloud crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Error**: The error taxonomy every call is normalized into
//! - **Traits**: [`HttpSend`] for the transport, [`Env`] for environment access,
//!   [`SigningCredential`] for credential checks and [`Observe`] for call lifecycle events
//!
//! ## Example
//!
//! ```no_run
//! use qcloud_core::{Context, Error, ErrorKind, HttpSend, Result};
//! use async_trait::async_trait;
//! use bytes::Bytes;
//!
//! #[derive(Debug)]
//! struct Offline;
//!
//! #[async_trait]
//! impl HttpSend for Offline {
//!     async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Err(Error::transport("offline"))
//!     }
//! }
//!
//! # async fn example() {
//! let ctx = Context::new().with_http_send(Offline);
//! let req = http::Request::builder()
//!     .method("POST")
//!     .uri("https://ocr.tencentcloudapi.com/")
//!     .body(Bytes::from_static(b"{}"))
//!     .unwrap();
//!
//! let err = ctx.http_send(req).await.unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Transport);
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, FailedResponse, Result};

mod api;
pub use api::{Observe, SigningCredential};

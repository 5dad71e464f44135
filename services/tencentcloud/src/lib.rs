//! Tencent Cloud API client.
//!
//! Signs calls with TC3-HMAC-SHA256 and sends them to
//! `https://<service>.tencentcloudapi.com/`. OCR, FaceID and Captcha have
//! typed clients, any other configured service can be reached through
//! [`Client::call`].
//!
//! ```no_run
//! use qcloud_core::Context;
//! use qcloud_http_send_reqwest::ReqwestHttpSend;
//! use qcloud_tencentcloud::{Client, Config, Params};
//! use serde_json::json;
//!
//! # async fn example() -> qcloud_core::Result<()> {
//! let config = Config::from_toml(
//!     r#"
//! default_profile = "default"
//!
//! [profiles.default]
//! secret_id = "AKIDxxxx"
//! secret_key = "xxxx"
//!
//! [services.ocr]
//! region = "ap-guangzhou"
//! version = "2018-11-19"
//! "#,
//! )?;
//! config.validate()?;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! let ocr = Client::new(ctx, config).ocr()?;
//!
//! let mut params = Params::new();
//! params.insert("ImageUrl".to_string(), json!("https://example.com/id.jpg"));
//! let resp = ocr.id_card_ocr(params, None).await?;
//! println!("{}", serde_json::Value::Object(resp));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Parameters of a call and the decoded body of its response.
pub type Params = serde_json::Map<String, serde_json::Value>;

mod constants;

mod credential;
pub use credential::Profile;

mod config;
pub use config::{Config, LoggingConfig, RequestConfig, ServiceConfig};

mod sign_request;
pub use sign_request::RequestSigner;

mod envelope;
pub use envelope::ApiError;

mod observe;
pub use observe::LogObserver;

mod client;
pub use client::Client;

mod services;
pub use services::{CaptchaClient, FaceIdClient, OcrClient};

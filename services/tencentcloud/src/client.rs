use crate::constants::ENDPOINT_SUFFIX;
use crate::envelope::{parse_body, request_failed};
use crate::{Config, LogObserver, Params, Profile, RequestSigner};
use bytes::Bytes;
use http::Method;
use log::{debug, warn};
use qcloud_core::{Context, Error, Observe, Result, SigningCredential};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

/// Client sends signed calls to Tencent Cloud APIs.
///
/// One call is one signed `POST` to `https://<service>.tencentcloudapi.com/`.
/// The client never retries: every failure goes straight back to the caller.
///
/// ```no_run
/// use qcloud_core::{Context, OsEnv};
/// use qcloud_http_send_reqwest::ReqwestHttpSend;
/// use qcloud_tencentcloud::{Client, Config, Params};
/// use serde_json::json;
///
/// # async fn example() -> qcloud_core::Result<()> {
/// let ctx = Context::new()
///     .with_http_send(ReqwestHttpSend::default())
///     .with_env(OsEnv);
/// let client = Client::new(ctx.clone(), Config::from_env(&ctx));
///
/// let mut params = Params::new();
/// params.insert("ImageUrl".to_string(), json!("https://example.com/id.jpg"));
/// let resp = client.call("ocr", "IdCardOCR", params, None).await?;
/// println!("{}", serde_json::Value::Object(resp));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    config: Arc<Config>,

    default_profile: Option<String>,
    observer: Option<Arc<dyn Observe>>,
    timeout: Option<Duration>,
}

impl Client {
    /// Create a new client.
    ///
    /// Call events go to [`LogObserver`] unless `logging.enabled` is false.
    pub fn new(ctx: Context, config: Config) -> Self {
        let observer: Option<Arc<dyn Observe>> = if config.logging.enabled {
            Some(Arc::new(LogObserver))
        } else {
            None
        };

        Self {
            ctx,
            default_profile: config.default_profile.clone(),
            timeout: config.request.timeout(),
            config: Arc::new(config),
            observer,
        }
    }

    /// Set the profile used when a call names none.
    pub fn with_default_profile(mut self, profile: impl Into<String>) -> Self {
        self.default_profile = Some(profile.into());
        self
    }

    /// Replace the observer receiving call events.
    pub fn with_observer(mut self, observer: impl Observe) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Stop emitting call events.
    pub fn without_observer(mut self) -> Self {
        self.observer = None;
        self
    }

    /// Set the timeout of each HTTP exchange.
    ///
    /// A zero duration waits indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// The config this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The profile used when a call names none.
    pub fn default_profile(&self) -> Option<&str> {
        self.default_profile.as_deref()
    }

    /// Call `action` of `service` with `params`.
    ///
    /// `profile` selects the credential, falling back to the default
    /// profile. Parameters are merged over the service's `Region`, `Version`
    /// and default parameters. A 2xx response returns its JSON body as-is,
    /// any other status fails with [`qcloud_core::ErrorKind::RequestFailed`].
    pub async fn call(
        &self,
        service: &str,
        action: &str,
        params: Params,
        profile: Option<&str>,
    ) -> Result<Params> {
        let profile_name = profile
            .or(self.default_profile.as_deref())
            .ok_or_else(|| {
                Error::config_invalid("no profile provided and no default profile configured")
            })?;
        let service_config = self
            .config
            .service(service)
            .ok_or_else(|| Error::missing_config(&format!("services.{service}")))?;
        let cred = self
            .config
            .profile(profile_name)
            .ok_or_else(|| Error::missing_config(&format!("profiles.{profile_name}")))?;
        if !cred.is_valid() {
            return Err(Error::invalid_config(
                &format!("profiles.{profile_name}"),
                "secret_id and secret_key cannot be empty",
            ));
        }

        let params = service_config.merge_params(params);
        debug!(
            "calling {service}.{action} in region {} with profile {profile_name}",
            service_config.region()
        );

        self.observe(|o| o.on_request(service, action, &params, profile_name));
        match self.send(cred, service, action, &params, profile_name).await {
            Ok(body) => Ok(body),
            Err(err) => {
                self.observe(|o| o.on_error(service, action, &err, profile_name));
                Err(err)
            }
        }
    }

    async fn send(
        &self,
        cred: &Profile,
        service: &str,
        action: &str,
        params: &Params,
        profile_name: &str,
    ) -> Result<Params> {
        let host = format!("{service}.{ENDPOINT_SUFFIX}");

        // The signed bytes and the sent bytes must be the same.
        let body = Bytes::from(serde_json::to_vec(params)?);
        let headers = RequestSigner::new(service).sign(cred, &Method::POST, &host, action, &body)?;

        let mut req = http::Request::builder()
            .method(Method::POST)
            .uri(format!("https://{host}/"))
            .body(body)?;
        *req.headers_mut() = headers;

        let resp = match self.timeout {
            None => self.ctx.http_send(req).await?,
            Some(timeout) => match tokio::time::timeout(timeout, self.ctx.http_send(req)).await {
                Ok(resp) => resp?,
                Err(elapsed) => {
                    return Err(Error::transport(format!(
                        "request timed out after {}s",
                        timeout.as_secs_f64()
                    ))
                    .with_source(elapsed))
                }
            },
        };

        let status = resp.status();
        let body = resp.into_body();
        let json = parse_body(&body);
        self.observe(|o| o.on_response(service, action, &json, status, profile_name));

        if !status.is_success() {
            return Err(request_failed(status, &body, json));
        }
        Ok(json)
    }

    fn observe(&self, f: impl FnOnce(&dyn Observe)) {
        let Some(observer) = &self.observer else {
            return;
        };

        if catch_unwind(AssertUnwindSafe(|| f(observer.as_ref()))).is_err() {
            warn!("observer panicked, event dropped");
        }
    }
}

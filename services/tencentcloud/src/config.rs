use crate::constants::*;
use crate::{Params, Profile};
use qcloud_core::{Context, Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Config for Tencent Cloud API clients.
///
/// It holds the credential profiles, the per-service settings and the request
/// options. A config is loaded once and shared read-only by every call.
///
/// ```
/// use qcloud_tencentcloud::Config;
///
/// let config = Config::from_toml(
///     r#"
///     default_profile = "default"
///
///     [profiles.default]
///     secret_id = "AKIDEXAMPLE"
///     secret_key = "secret"
///
///     [services.ocr]
///     region = "ap-guangzhou"
///     version = "2018-11-19"
///     "#,
/// )
/// .unwrap();
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Profile used when a call names none.
    pub default_profile: Option<String>,
    /// Credential profiles by name.
    pub profiles: BTreeMap<String, Profile>,
    /// Service settings by service name, for example `ocr`.
    pub services: BTreeMap<String, ServiceConfig>,
    /// Request options.
    pub request: RequestConfig,
    /// Logging options.
    pub logging: LoggingConfig,
}

/// Settings of one service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Region sent as the `Region` parameter.
    pub region: Option<String>,
    /// API version sent as the `Version` parameter.
    pub version: Option<String>,
    /// Parameters merged into every call of this service.
    pub defaults: Params,
}

/// Options applied to each HTTP exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Timeout in seconds, `0` waits indefinitely.
    pub timeout: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RequestConfig {
    /// Timeout as a duration, `None` if the exchange is not bounded.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

/// Logging options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Whether call events are written to the log.
    pub enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            Error::config_invalid(format!("failed to parse config: {}", e.message()))
                .with_source(e)
        })
    }

    /// Build config from a JSON value tree.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| {
            Error::config_invalid(format!("failed to parse config: {e}")).with_source(e)
        })
    }

    /// Load config from environment variables.
    ///
    /// A `default` profile is created when both secret id and secret key are
    /// present, and the well-known services get the region from env, or
    /// `ap-beijing` if it is unset.
    pub fn from_env(ctx: &Context) -> Self {
        let secret_id = ctx
            .env_var(TENCENTCLOUD_SECRET_ID)
            .or_else(|| ctx.env_var(TKE_SECRET_ID));
        let secret_key = ctx
            .env_var(TENCENTCLOUD_SECRET_KEY)
            .or_else(|| ctx.env_var(TKE_SECRET_KEY));
        let region = ctx
            .env_var(TENCENTCLOUD_REGION)
            .or_else(|| ctx.env_var(TKE_REGION))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let mut config = Config::default();
        if let (Some(secret_id), Some(secret_key)) = (secret_id, secret_key) {
            config.profiles.insert(
                DEFAULT_PROFILE.to_string(),
                Profile {
                    secret_id,
                    secret_key,
                },
            );
            config.default_profile = Some(DEFAULT_PROFILE.to_string());
        }
        for service in ["ocr", "faceid", "captcha"] {
            config.services.insert(
                service.to_string(),
                ServiceConfig {
                    region: Some(region.clone()),
                    ..Default::default()
                },
            );
        }
        config
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Look up the settings of a service.
    pub fn service(&self, name: &str) -> Option<&ServiceConfig> {
        self.services.get(name)
    }

    /// Check whether a service is configured.
    pub fn has_service(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Validate the whole config.
    ///
    /// Profiles and services must both be present, every profile needs a
    /// secret id and secret key and every service needs a region.
    pub fn validate(&self) -> Result<()> {
        if self.profiles.is_empty() {
            return Err(Error::missing_config("profiles"));
        }
        for (name, profile) in &self.profiles {
            if profile.secret_id.is_empty() {
                return Err(Error::invalid_config(
                    &format!("profiles.{name}.secret_id"),
                    "secret_id is required and cannot be empty",
                ));
            }
            if profile.secret_key.is_empty() {
                return Err(Error::invalid_config(
                    &format!("profiles.{name}.secret_key"),
                    "secret_key is required and cannot be empty",
                ));
            }
        }

        if self.services.is_empty() {
            return Err(Error::missing_config("services"));
        }
        for (name, service) in &self.services {
            if service.region.as_deref().unwrap_or_default().is_empty() {
                return Err(Error::invalid_config(
                    &format!("services.{name}.region"),
                    "region is required and cannot be empty",
                ));
            }
        }

        if let Some(name) = &self.default_profile {
            if !self.profiles.contains_key(name) {
                return Err(Error::invalid_config(
                    "default_profile",
                    &format!("profile {name} is not defined"),
                ));
            }
        }

        Ok(())
    }
}

impl ServiceConfig {
    /// Region of this service, `ap-beijing` if unset.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// API version of this service, `2018-05-22` if unset.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    /// Merge call parameters over this service's parameters.
    ///
    /// Precedence, later wins: `Region`/`Version`, then `defaults`, then
    /// `params`. The merge is shallow: a top-level key is replaced as a whole.
    pub fn merge_params(&self, params: Params) -> Params {
        let mut merged = Params::new();
        merged.insert("Region".to_string(), Value::from(self.region()));
        merged.insert("Version".to_string(), Value::from(self.version()));
        merged.extend(self.defaults.clone());
        merged.extend(params);
        merged
    }
}

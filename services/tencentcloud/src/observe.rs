use crate::Params;
use http::StatusCode;
use log::{debug, error, info};
use qcloud_core::{Error, Observe};

/// LogObserver writes call events through the `log` facade.
///
/// Requests and responses are logged at `info` with their payload at
/// `debug`, failures at `error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observe for LogObserver {
    fn on_request(&self, service: &str, action: &str, params: &Params, profile: &str) {
        info!("qcloud api request: service={service} action={action} profile={profile}");
        debug!("qcloud api request params: {}", serde_json::Value::Object(params.clone()));
    }

    fn on_response(
        &self,
        service: &str,
        action: &str,
        body: &Params,
        status: StatusCode,
        profile: &str,
    ) {
        info!(
            "qcloud api response: service={service} action={action} status={} profile={profile}",
            status.as_u16()
        );
        debug!("qcloud api response body: {}", serde_json::Value::Object(body.clone()));
    }

    fn on_error(&self, service: &str, action: &str, err: &Error, profile: &str) {
        error!(
            "qcloud api error: service={service} action={action} kind={} profile={profile}: {err:?}",
            err.kind()
        );
    }
}

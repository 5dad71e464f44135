use crate::Error;
use http::StatusCode;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// SigningCredential is the trait used by clients to check a credential
/// before signing with it.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

/// Observe receives the lifecycle events of an API call.
///
/// Every method is fire-and-forget: nothing an observer does can change the
/// outcome of the call it is observing.
pub trait Observe: Debug + Send + Sync + 'static {
    /// Called once before the request is signed and sent.
    fn on_request(&self, service: &str, action: &str, params: &Map<String, Value>, profile: &str);

    /// Called once for every response received, whatever its status.
    fn on_response(
        &self,
        service: &str,
        action: &str,
        body: &Map<String, Value>,
        status: StatusCode,
        profile: &str,
    );

    /// Called once for every failure on the send path, before it is returned.
    fn on_error(&self, service: &str, action: &str, err: &Error, profile: &str);
}

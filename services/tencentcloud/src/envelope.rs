use crate::Params;
use bytes::Bytes;
use http::StatusCode;
use qcloud_core::Error;
use serde::Deserialize;
use serde_json::Value;

/// Error returned by Tencent Cloud inside a response body.
///
/// Tencent Cloud reports errors as
/// `{"Response": {"Error": {"Code": "..", "Message": ".."}, "RequestId": ".."}}`.
/// A 2xx response may still carry one, callers that care can check it with
/// [`ApiError::from_body`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ApiError {
    /// Error code, for example `InvalidParameter`.
    pub code: String,
    /// Human readable message.
    pub message: String,
    /// Request id, if the service returned one.
    #[serde(skip)]
    pub request_id: Option<String>,
}

impl ApiError {
    /// Extract the error from a parsed response body, if there is one.
    pub fn from_body(body: &Params) -> Option<ApiError> {
        let (envelope, request_id) = match body.get("Response") {
            Some(Value::Object(resp)) => (
                resp.get("Error"),
                resp.get("RequestId").and_then(Value::as_str),
            ),
            _ => (body.get("Error"), None),
        };

        let mut err = ApiError::deserialize(envelope?).ok()?;
        err.request_id = request_id.map(str::to_string);
        Some(err)
    }
}

/// Parse a response body into a map, empty if it is not a JSON object.
pub(crate) fn parse_body(body: &[u8]) -> Params {
    match serde_json::from_slice(body) {
        Ok(Value::Object(map)) => map,
        _ => Params::new(),
    }
}

/// Build the error for a non-2xx response.
pub(crate) fn request_failed(status: StatusCode, body: &Bytes, json: Params) -> Error {
    let text = String::from_utf8_lossy(body).to_string();
    let message = match ApiError::from_body(&json) {
        Some(api) => format!("HTTP Error {}: {}: {}", status.as_u16(), api.code, api.message),
        None => format!("HTTP Error {}: {}", status.as_u16(), text),
    };

    Error::request_failed(message, status, text, json)
}

use crate::constants::*;
use crate::Profile;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use http::{HeaderMap, HeaderValue, Method};
use log::debug;
use qcloud_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use qcloud_core::time::{format_date, now, DateTime};
use qcloud_core::Result;

/// RequestSigner that implements Tencent Cloud API signature v3.
///
/// - [Signature v3](https://cloud.tencent.com/document/api/213/30654)
///
/// The signer covers the method, the fixed path `/`, the `content-type`,
/// `host` and `x-tc-action` headers and the SHA-256 of the body. Query
/// parameters are never signed.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given service, for example `ocr`.
    pub fn new(service: &str) -> Self {
        Self {
            service: service.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Build the authenticated headers for one request.
    ///
    /// `body` must be the exact bytes sent as the request body, an empty body
    /// is signed as `{}`. The returned map always holds `Authorization`,
    /// `Content-Type`, `Host`, `X-TC-Action`, `X-TC-Timestamp` and
    /// `X-TC-Version`.
    pub fn sign(
        &self,
        cred: &Profile,
        method: &Method,
        host: &str,
        action: &str,
        body: &[u8],
    ) -> Result<HeaderMap> {
        let now = self.time.unwrap_or_else(now);
        let timestamp = now.timestamp();
        let date = format_date(now);

        let body = if body.is_empty() { b"{}".as_slice() } else { body };
        let creq = canonical_request_string(method, host, action, &hex_sha256(body));
        debug!("calculated canonical request: {creq}");

        // Scope: "2019-02-25/<service>/tc3_request"
        let scope = format!("{}/{}/{}", date, self.service, TC3_TERMINATOR);
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // TC3-HMAC-SHA256
        // 1551113065
        // 2019-02-25/<service>/tc3_request
        // <hashed_canonical_request>
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            TC3_ALGORITHM,
            timestamp,
            scope,
            hex_sha256(creq.as_bytes())
        );
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(&cred.secret_key, &date, &self.service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut headers = HeaderMap::with_capacity(6);
        headers.insert(AUTHORIZATION, {
            let mut value = HeaderValue::from_str(&format!(
                "{} Credential={}/{}, SignedHeaders={}, Signature={}",
                TC3_ALGORITHM, cred.secret_id, scope, TC3_SIGNED_HEADERS, signature
            ))?;
            value.set_sensitive(true);
            value
        });
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(TC3_CONTENT_TYPE));
        headers.insert(HOST, HeaderValue::from_str(host)?);
        headers.insert(X_TC_ACTION, HeaderValue::from_str(action)?);
        headers.insert(X_TC_TIMESTAMP, HeaderValue::from(timestamp));
        headers.insert(X_TC_VERSION, HeaderValue::from_static(TC3_PROTOCOL_VERSION));

        Ok(headers)
    }
}

/// CanonicalRequest:
///
/// POST
/// /
///
/// content-type:application/json; charset=utf-8
/// host:<host>
/// x-tc-action:<lowercase action>
///
/// content-type;host;x-tc-action
/// <hashed_payload>
fn canonical_request_string(method: &Method, host: &str, action: &str, hashed_payload: &str) -> String {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    f.push_str(method.as_str());
    f.push('\n');
    f.push('/');
    f.push('\n');
    // Query string is always empty.
    f.push('\n');
    f.push_str("content-type:");
    f.push_str(TC3_CONTENT_TYPE);
    f.push('\n');
    f.push_str("host:");
    f.push_str(host);
    f.push('\n');
    f.push_str("x-tc-action:");
    f.push_str(&action.to_lowercase());
    f.push('\n');
    f.push('\n');
    f.push_str(TC3_SIGNED_HEADERS);
    f.push('\n');
    f.push_str(hashed_payload);

    f
}

fn generate_signing_key(secret: &str, date: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("TC3{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_date.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), TC3_TERMINATOR.as_bytes())
}

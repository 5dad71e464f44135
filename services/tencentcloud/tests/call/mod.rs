use crate::mock::{Event, MockHttpSend, PanickingObserver};
use crate::{client, config, init_logger, params};
use anyhow::Result;
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use qcloud_core::{Context, ErrorKind};
use qcloud_tencentcloud::{ApiError, Client, Params};
use serde_json::json;
use std::time::Duration;
use test_case::test_case;

const SUCCESS: &str = r#"{"Response":{"Name":"Alice","IdNum":"110101199001011234","RequestId":"req-1"}}"#;
const INVALID_PARAMETER: &str = r#"{"Response":{"Error":{"Code":"InvalidParameter","Message":"Invalid parameter"},"RequestId":"req-2"}}"#;

#[tokio::test]
async fn test_call_returns_body_verbatim() -> Result<()> {
    let http = MockHttpSend::respond(StatusCode::OK, SUCCESS);
    let (client, observer) = client(&http);

    let resp = client
        .call("ocr", "IdCardOCR", params(json!({"ImageUrl": "https://example.com/id.jpg"})), None)
        .await?;

    assert_eq!(resp, params(serde_json::from_str(SUCCESS)?));

    let events = observer.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], Event::Request { service, action, profile, .. }
        if service == "ocr" && action == "IdCardOCR" && profile == "default"));
    assert_eq!(
        events[1],
        Event::Response {
            action: "IdCardOCR".to_string(),
            status: 200,
            body: resp,
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_call_sends_signed_post() -> Result<()> {
    let http = MockHttpSend::respond(StatusCode::OK, SUCCESS);
    let (client, _) = client(&http);

    client.call("ocr", "IdCardOCR", Params::new(), None).await?;

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.uri.to_string(), "https://ocr.tencentcloudapi.com/");

    assert_eq!(req.headers.len(), 6);
    assert_eq!(req.headers["host"], "ocr.tencentcloudapi.com");
    assert_eq!(req.headers["x-tc-action"], "IdCardOCR");
    assert_eq!(req.headers["x-tc-version"], "2018-05-22");
    assert_eq!(req.headers["content-type"], "application/json; charset=utf-8");
    assert!(req.headers["x-tc-timestamp"].to_str()?.parse::<i64>().is_ok());

    let authorization = req.headers["authorization"].to_str()?;
    assert!(authorization.starts_with(
        "TC3-HMAC-SHA256 Credential=AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE/"
    ));
    assert!(authorization.contains("/ocr/tc3_request, SignedHeaders=content-type;host;x-tc-action, Signature="));
    Ok(())
}

#[tokio::test]
async fn test_call_merges_params() -> Result<()> {
    let http = MockHttpSend::respond(StatusCode::OK, SUCCESS);
    let (client, observer) = client(&http);

    client
        .call(
            "ocr",
            "GeneralBasicOCR",
            params(json!({"LanguageType": "en", "ImageBase64": "aGVsbG8="})),
            None,
        )
        .await?;

    // Service defaults override Region, call params override defaults.
    let expected = json!({
        "Region": "ap-shanghai",
        "Version": "2018-11-19",
        "LanguageType": "en",
        "ImageBase64": "aGVsbG8="
    });
    assert_eq!(http.requests()[0].json(), expected);

    let Event::Request { params: observed, .. } = &observer.events()[0] else {
        panic!("first event must be a request");
    };
    assert_eq!(serde_json::Value::Object(observed.clone()), expected);
    Ok(())
}

#[tokio::test]
async fn test_call_with_explicit_profile() -> Result<()> {
    let http = MockHttpSend::respond(StatusCode::OK, SUCCESS);
    let (client, observer) = client(&http);

    client.call("faceid", "FaceVerification", Params::new(), Some("backup")).await?;

    let authorization = http.requests()[0].headers["authorization"].to_str()?.to_string();
    assert!(authorization.contains("Credential=AKIDbackupEXAMPLE/"));
    assert!(matches!(&observer.events()[0], Event::Request { profile, .. } if profile == "backup"));
    Ok(())
}

#[tokio::test]
async fn test_call_request_failed() -> Result<()> {
    let http = MockHttpSend::respond(StatusCode::BAD_REQUEST, INVALID_PARAMETER);
    let (client, observer) = client(&http);

    let err = client
        .call("ocr", "IdCardOCR", Params::new(), None)
        .await
        .expect_err("400 must fail");

    assert_eq!(err.kind(), ErrorKind::RequestFailed);
    assert_eq!(err.to_string(), "HTTP Error 400: InvalidParameter: Invalid parameter");
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.response_body(), Some(INVALID_PARAMETER));

    let json = err.response_json().expect("json must be kept");
    let api = ApiError::from_body(json).expect("envelope must parse");
    assert_eq!(api.code, "InvalidParameter");
    assert_eq!(api.request_id.as_deref(), Some("req-2"));

    let events = observer.events();
    assert_eq!(events.len(), 3);
    assert!(matches!(&events[1], Event::Response { status: 400, .. }));
    assert!(matches!(&events[2], Event::Error { message, .. } if message == &err.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_call_server_error_without_envelope() {
    let http = MockHttpSend::respond(StatusCode::BAD_GATEWAY, "Bad Gateway");
    let (client, _) = client(&http);

    let err = client
        .call("ocr", "IdCardOCR", Params::new(), None)
        .await
        .expect_err("502 must fail");

    assert_eq!(err.kind(), ErrorKind::RequestFailed);
    assert_eq!(err.to_string(), "HTTP Error 502: Bad Gateway");
    assert_eq!(err.response_json().map(|m| m.is_empty()), Some(true));
}

#[tokio::test]
async fn test_call_success_with_error_envelope_is_returned() -> Result<()> {
    let http = MockHttpSend::respond(StatusCode::OK, INVALID_PARAMETER);
    let (client, _) = client(&http);

    let resp = client.call("ocr", "IdCardOCR", Params::new(), None).await?;
    assert!(ApiError::from_body(&resp).is_some());
    Ok(())
}

#[tokio::test]
async fn test_call_transport_error() {
    let http = MockHttpSend::fail("connection refused");
    let (client, observer) = client(&http);

    let err = client
        .call("captcha", "DescribeCaptchaResult", Params::new(), None)
        .await
        .expect_err("transport must fail");

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.to_string(), "connection refused");

    let events = observer.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], Event::Request { .. }));
    assert_eq!(
        events[1],
        Event::Error {
            action: "DescribeCaptchaResult".to_string(),
            message: "connection refused".to_string(),
        }
    );
}

#[tokio::test]
async fn test_call_timeout() {
    let http =
        MockHttpSend::respond(StatusCode::OK, SUCCESS).with_delay(Duration::from_secs(5));
    let (client, observer) = client(&http);
    let client = client.with_timeout(Duration::from_millis(50));

    let err = client
        .call("ocr", "IdCardOCR", Params::new(), None)
        .await
        .expect_err("slow server must time out");

    assert!(err.is_transport_error());
    assert!(err.to_string().contains("timed out"));
    assert_eq!(observer.events().len(), 2);
}

#[tokio::test]
async fn test_call_zero_timeout_waits() -> Result<()> {
    init_logger();
    let http =
        MockHttpSend::respond(StatusCode::OK, SUCCESS).with_delay(Duration::from_millis(20));
    let mut config = config();
    config.request.timeout = 0;
    let client = Client::new(Context::new().with_http_send(http.clone()), config);

    let resp = client.call("ocr", "IdCardOCR", Params::new(), None).await?;
    assert!(resp.contains_key("Response"));

    let resp = client
        .with_timeout(Duration::ZERO)
        .call("ocr", "IdCardOCR", Params::new(), None)
        .await?;
    assert!(resp.contains_key("Response"));
    assert_eq!(http.requests().len(), 2);
    Ok(())
}

#[test_case("unknown", None, "Missing required configuration: services.unknown"; "unknown service")]
#[test_case("ocr", Some("missing"), "Missing required configuration: profiles.missing"; "unknown profile")]
#[test_case("ocr", Some("empty"), "Invalid configuration for 'profiles.empty': secret_id and secret_key cannot be empty"; "empty secrets")]
#[tokio::test]
async fn test_call_config_invalid(service: &str, profile: Option<&str>, message: &str) {
    let http = MockHttpSend::respond(StatusCode::OK, SUCCESS);
    let (client, observer) = client(&http);

    let err = client
        .call(service, "IdCardOCR", Params::new(), profile)
        .await
        .expect_err("config must be rejected");

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert_eq!(err.to_string(), message);
    assert!(http.requests().is_empty());
    assert!(observer.events().is_empty());
}

#[tokio::test]
async fn test_call_without_any_profile() {
    init_logger();
    let http = MockHttpSend::respond(StatusCode::OK, SUCCESS);
    let mut config = config();
    config.default_profile = None;
    let client = Client::new(Context::new().with_http_send(http.clone()), config);

    let err = client
        .call("ocr", "IdCardOCR", Params::new(), None)
        .await
        .expect_err("no profile must be rejected");

    assert!(err.is_config_error());
    assert!(http.requests().is_empty());

    // A default set on the client is enough.
    let client = client.with_default_profile("backup");
    assert!(client.call("ocr", "IdCardOCR", Params::new(), None).await.is_ok());
}

#[tokio::test]
async fn test_call_survives_panicking_observer() -> Result<()> {
    let http = MockHttpSend::respond(StatusCode::OK, SUCCESS);
    let (client, _) = client(&http);
    let client = client.with_observer(PanickingObserver);

    let resp = client.call("ocr", "IdCardOCR", Params::new(), None).await?;
    assert!(resp.contains_key("Response"));

    let http = MockHttpSend::fail("connection reset");
    let (client, _) = crate::client(&http);
    let err = client
        .with_observer(PanickingObserver)
        .call("ocr", "IdCardOCR", Params::new(), None)
        .await
        .expect_err("transport must fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
    Ok(())
}

#[test]
fn test_logging_disabled_drops_observer() {
    let mut config = config();
    config.logging.enabled = false;
    let client = Client::new(Context::new(), config);

    assert!(format!("{client:?}").contains("observer: None"));
}

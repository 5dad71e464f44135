// Env values used in tencent cloud.
pub const TENCENTCLOUD_REGION: &str = "TENCENTCLOUD_REGION";
pub const TKE_REGION: &str = "TKE_REGION";
pub const TENCENTCLOUD_SECRET_ID: &str = "TENCENTCLOUD_SECRET_ID";
pub const TKE_SECRET_ID: &str = "TKE_SECRET_ID";
pub const TENCENTCLOUD_SECRET_KEY: &str = "TENCENTCLOUD_SECRET_KEY";
pub const TKE_SECRET_KEY: &str = "TKE_SECRET_KEY";

// TC3 signing.
pub const TC3_ALGORITHM: &str = "TC3-HMAC-SHA256";
pub const TC3_TERMINATOR: &str = "tc3_request";
pub const TC3_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const TC3_SIGNED_HEADERS: &str = "content-type;host;x-tc-action";
/// Value of `X-TC-Version` sent with every signed request.
pub const TC3_PROTOCOL_VERSION: &str = "2018-05-22";

pub const X_TC_ACTION: &str = "x-tc-action";
pub const X_TC_TIMESTAMP: &str = "x-tc-timestamp";
pub const X_TC_VERSION: &str = "x-tc-version";

// Defaults.
pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_REGION: &str = "ap-beijing";
pub const DEFAULT_API_VERSION: &str = "2018-05-22";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const ENDPOINT_SUFFIX: &str = "tencentcloudapi.com";

use qcloud_core::utils::Redact;
use qcloud_core::SigningCredential;
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

/// Profile is a named credential pair used to sign requests.
#[derive(Default, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Secret ID
    pub secret_id: String,
    /// Secret Key
    pub secret_key: String,
}

impl Profile {
    /// Create a new profile from a secret id and secret key.
    pub fn new(secret_id: &str, secret_key: &str) -> Self {
        Self {
            secret_id: secret_id.to_string(),
            secret_key: secret_key.to_string(),
        }
    }
}

impl Debug for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("secret_id", &Redact::from(&self.secret_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Profile {
    fn is_valid(&self) -> bool {
        !self.secret_id.is_empty() && !self.secret_key.is_empty()
    }
}

use std::fmt::{Debug, Formatter};

use waybill_core::{utils::Redact, SigningCredential};

/// Credential for the Chaoneng platform.
#[derive(Clone)]
pub struct Credential {
    /// Application id issued by the platform, sent as `appid`.
    pub app_key: String,
    /// Application secret the signature is derived from.
    pub app_secret: String,
    /// Default seller id for shop-scoped operations.
    pub seller_id: Option<String>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("app_key", &Redact::from(&self.app_key))
            .field("app_secret", &Redact::from(&self.app_secret))
            .field("seller_id", &self.seller_id)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.app_key.is_empty() && !self.app_secret.is_empty()
    }
}

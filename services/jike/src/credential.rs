use std::fmt::{Debug, Formatter};

use waybill_core::{utils::Redact, SigningCredential};

/// Credential for the Jike platform.
///
/// Owned by one client for its whole lifetime; the optional fields are shop
/// identity hints that are sent as parameters but never signed.
#[derive(Clone)]
pub struct Credential {
    /// Application key issued by the platform.
    pub app_key: String,
    /// Application secret the signature is derived from.
    pub app_secret: String,
    /// Default shop user id.
    pub user_id: Option<String>,
    /// Shop code assigned by the platform.
    pub shop_code: Option<String>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("app_key", &Redact::from(&self.app_key))
            .field("app_secret", &Redact::from(&self.app_secret))
            .field("user_id", &self.user_id)
            .field("shop_code", &self.shop_code)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.app_key.is_empty() && !self.app_secret.is_empty()
    }
}

use std::fmt::{Debug, Formatter};

use super::constants::*;
use waybill_core::{utils::Redact, Context};

/// Config carries all the configuration for the Jike client.
#[derive(Clone, Default)]
pub struct Config {
    /// `app_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`JIKE_APP_KEY`]
    pub app_key: Option<String>,
    /// `app_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`JIKE_APP_SECRET`]
    pub app_secret: Option<String>,
    /// Default shop user id, used when an operation is not given one.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`JIKE_USER_ID`]
    pub user_id: Option<String>,
    /// Shop code assigned by the platform.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`JIKE_SHOP_CODE`]
    pub shop_code: Option<String>,
    /// API endpoint, defaults to the production gateway.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`JIKE_ENDPOINT`]
    pub endpoint: Option<String>,
}

impl Config {
    /// Create a new Config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set app_key.
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Set app_secret.
    pub fn with_app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Set user_id.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set shop_code.
    pub fn with_shop_code(mut self, shop_code: impl Into<String>) -> Self {
        self.shop_code = Some(shop_code.into());
        self
    }

    /// Set endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(JIKE_APP_KEY) {
            self.app_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(JIKE_APP_SECRET) {
            self.app_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(JIKE_USER_ID) {
            self.user_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(JIKE_SHOP_CODE) {
            self.shop_code.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(JIKE_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_key", &self.app_key.as_ref().map(Redact::from))
            .field("app_secret", &self.app_secret.as_ref().map(Redact::from))
            .field("user_id", &self.user_id)
            .field("shop_code", &self.shop_code)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waybill_core::StaticEnv;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: [
                (JIKE_APP_KEY.to_string(), "key-from-env".to_string()),
                (JIKE_APP_SECRET.to_string(), "secret-from-env".to_string()),
            ]
            .into(),
        });

        let config = Config::new().with_app_key("explicit-key").from_env(&ctx);
        // Explicit values win over the environment.
        assert_eq!(config.app_key.as_deref(), Some("explicit-key"));
        assert_eq!(config.app_secret.as_deref(), Some("secret-from-env"));
        assert_eq!(config.user_id, None);
    }
}

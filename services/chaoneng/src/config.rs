use std::fmt::{Debug, Formatter};

use super::constants::*;
use waybill_core::{utils::Redact, Context};

/// Config carries all the configuration for the Chaoneng client.
#[derive(Clone, Default)]
pub struct Config {
    /// `app_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`CHAONENG_APP_KEY`]
    pub app_key: Option<String>,
    /// `app_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`CHAONENG_APP_SECRET`]
    pub app_secret: Option<String>,
    /// Default seller id, used when an operation is not given one.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`CHAONENG_SELLER_ID`]
    pub seller_id: Option<String>,
    /// API endpoint, defaults to the production gateway.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`CHAONENG_ENDPOINT`]
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

    /// Set seller_id.
    pub fn with_seller_id(mut self, seller_id: impl Into<String>) -> Self {
        self.seller_id = Some(seller_id.into());
        self
    }

    /// Set endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(CHAONENG_APP_KEY) {
            self.app_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(CHAONENG_APP_SECRET) {
            self.app_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(CHAONENG_SELLER_ID) {
            self.seller_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(CHAONENG_ENDPOINT) {
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
            .field("seller_id", &self.seller_id)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

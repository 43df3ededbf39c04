use super::auth::RequestAuth;
use super::constants::*;
use super::credential::Credential;
use super::Config;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use waybill_core::{
    ApiClient, Context, EnvelopeSpec, Error, RequestSpec, Result, SuccessCode,
};

/// Envelope rules for the Jike gateway.
///
/// The upstream double-encodes its body: the outer JSON value is a
/// JSON-encoded string, hence decode depth 2.
const ENVELOPE: EnvelopeSpec = EnvelopeSpec {
    code_field: "code",
    message_field: "message",
    payload_field: "result",
    success: SuccessCode::Number(10000),
    decode_depth: 2,
};

/// Paging and filter parameters for [`Jike::shop_orders`].
///
/// Filters are `Option` on purpose: the upstream treats them as optional, so
/// optionality is explicit here instead of hidden behind positional defaults.
#[derive(Debug, Clone)]
pub struct ShopOrdersQuery {
    /// Inclusive lower bound of the order time range.
    pub start_time: String,
    /// Inclusive upper bound of the order time range.
    pub end_time: String,
    /// Zero-based page number.
    pub page: u32,
    /// Page size, platform default is 100.
    pub page_size: u32,
    /// Filter by seller remark text.
    pub remark: Option<String>,
    /// Filter by remark tag id.
    pub remark_tag: Option<i64>,
    /// Filter by remark tag name.
    pub remark_tag_name: Option<String>,
}

impl Default for ShopOrdersQuery {
    fn default() -> Self {
        Self {
            start_time: String::new(),
            end_time: String::new(),
            page: 0,
            page_size: 100,
            remark: None,
            remark_tag: None,
            remark_tag_name: None,
        }
    }
}

/// Client for the Jike waybill aggregator.
///
/// Every operation signs a fresh auth block, performs one round trip and
/// returns the unwrapped `result` payload. GET operations carry auth and
/// business fields in the query; POST operations carry auth in the query and
/// business fields form-encoded in the body.
#[derive(Clone, Debug)]
pub struct Jike {
    client: ApiClient<Credential>,
}

impl Jike {
    /// Create a new client from the given config.
    ///
    /// Missing credentials are not an error here; they surface as a
    /// configuration error on the first signed call.
    pub fn new(ctx: Context, config: Config) -> Self {
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let credential = Credential {
            app_key: config.app_key.unwrap_or_default(),
            app_secret: config.app_secret.unwrap_or_default(),
            user_id: config.user_id,
            shop_code: config.shop_code,
        };

        Self {
            client: ApiClient::new(ctx, endpoint, RequestAuth::new(), credential, ENVELOPE),
        }
    }

    /// Get shop information for the given owner name.
    pub async fn shop_info(&self, owner_name: &str) -> Result<Value> {
        let mut query = self.client.auth_data()?;
        query.push(("ownerName".to_string(), owner_name.to_string()));
        self.client
            .call(RequestSpec::get(PATH_SHOP_INFO).with_query(query))
            .await
    }

    /// Get the shop's configured refund address.
    pub async fn refund_address(&self, owner_id: &str) -> Result<Value> {
        let mut query = self.client.auth_data()?;
        query.push(("ownerId".to_string(), owner_id.to_string()));
        self.client
            .call(RequestSpec::get(PATH_REFUND_ADDRESS).with_query(query))
            .await
    }

    /// List shop orders within a time range, paged.
    pub async fn shop_orders(&self, owner_id: &str, orders: &ShopOrdersQuery) -> Result<Value> {
        let mut query = self.client.auth_data()?;
        query.push(("ownerId".to_string(), owner_id.to_string()));
        query.push(("startTime".to_string(), orders.start_time.clone()));
        query.push(("endTime".to_string(), orders.end_time.clone()));
        query.push(("page".to_string(), orders.page.to_string()));
        query.push(("pageSize".to_string(), orders.page_size.to_string()));
        if let Some(remark) = &orders.remark {
            query.push(("remark".to_string(), remark.clone()));
        }
        if let Some(tag) = orders.remark_tag {
            query.push(("remarkTag".to_string(), tag.to_string()));
        }
        if let Some(tag_name) = &orders.remark_tag_name {
            query.push(("remarkTagName".to_string(), tag_name.clone()));
        }
        self.client
            .call(RequestSpec::get(PATH_SHOP_ORDERS).with_query(query))
            .await
    }

    /// Get order details by order numbers (comma separated).
    pub async fn shop_order_details(&self, owner_id: &str, order_sns: &str) -> Result<Value> {
        let mut query = self.client.auth_data()?;
        query.push(("ownerId".to_string(), owner_id.to_string()));
        query.push(("orderSns".to_string(), order_sns.to_string()));
        self.client
            .call(RequestSpec::get(PATH_SHOP_ORDER_DETAILS).with_query(query))
            .await
    }

    /// Issue waybills for the given order payload.
    pub async fn waybill(&self, params: &impl Serialize) -> Result<Value> {
        self.post_params(PATH_WAYBILL, params).await
    }

    /// Issue waybills for free-form (off-platform) orders.
    pub async fn free_waybill(&self, params: &impl Serialize) -> Result<Value> {
        self.post_params(PATH_FREE_WAYBILL, params).await
    }

    /// Create a free-form order.
    pub async fn create_free_order(
        &self,
        owner_id: &str,
        params: &impl Serialize,
    ) -> Result<Value> {
        let auth = self.client.auth_data()?;
        let body = vec![
            ("ownerId".to_string(), owner_id.to_string()),
            ("params".to_string(), encode_params(params)?),
        ];
        self.client
            .call(
                RequestSpec::post(PATH_CREATE_FREE_ORDER)
                    .with_query(auth)
                    .with_body(body),
            )
            .await
    }

    /// Issue waybills for a batch of free-form orders.
    pub async fn batch_free_waybill(&self, params: &impl Serialize) -> Result<Value> {
        self.post_params(PATH_BATCH_FREE_WAYBILL, params).await
    }

    /// Recycle waybill numbers (comma separated) for the given carrier code.
    pub async fn cancel_waybill(
        &self,
        owner_id: &str,
        wp_code: &str,
        waybill_codes: &str,
    ) -> Result<Value> {
        let auth = self.client.auth_data()?;
        let body = vec![
            ("ownerId".to_string(), owner_id.to_string()),
            ("wpCode".to_string(), wp_code.to_string()),
            ("waybillCodes".to_string(), waybill_codes.to_string()),
        ];
        self.client
            .call(
                RequestSpec::post(PATH_CANCEL_WAYBILL)
                    .with_query(auth)
                    .with_body(body),
            )
            .await
    }

    /// Notify the platform that orders have shipped.
    pub async fn notify_platform_online(&self, params: &impl Serialize) -> Result<Value> {
        self.post_params(PATH_NOTIFY_ONLINE, params).await
    }

    /// Re-sync orders by order numbers.
    pub async fn sync_orders_by_sn(&self, params: &impl Serialize) -> Result<Value> {
        self.post_params(PATH_SYNC_ORDER_BY_SN, params).await
    }

    /// Look up the shop's owner id.
    ///
    /// Derived convenience: calls [`Jike::shop_info`] with the given (or
    /// configured) user id and projects the `ownerId` field. The result is
    /// stable per shop; callers that look it up often own the caching policy,
    /// this client performs a fresh lookup every time.
    pub async fn owner_id(&self, user_id: Option<&str>) -> Result<String> {
        let user_id = match user_id {
            Some(v) => v.to_string(),
            None => self
                .client
                .credential()
                .user_id
                .clone()
                .ok_or_else(|| Error::config_invalid("user id is not configured"))?,
        };

        let info = self.shop_info(&user_id).await?;
        let owner_id = match info.get("ownerId") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(Error::envelope_invalid(
                    "shop info payload has no `ownerId`",
                ))
            }
        };
        debug!("resolved owner id {owner_id} for user {user_id}");
        Ok(owner_id)
    }

    /// Get the configured shop code.
    pub fn shop_code(&self) -> Option<&str> {
        self.client.credential().shop_code.as_deref()
    }

    /// POST with auth in the query and the business payload JSON-encoded
    /// under a single `params` form field, the shape most Jike write
    /// endpoints expect.
    async fn post_params(&self, path: &str, params: &impl Serialize) -> Result<Value> {
        let auth = self.client.auth_data()?;
        let body = vec![("params".to_string(), encode_params(params)?)];
        self.client
            .call(RequestSpec::post(path).with_query(auth).with_body(body))
            .await
    }
}

fn encode_params(params: &impl Serialize) -> Result<String> {
    serde_json::to_string(params)
        .map_err(|e| Error::unexpected("failed to encode business params").with_source(e))
}

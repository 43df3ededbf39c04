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

/// Envelope rules for the Chaoneng gateway.
const ENVELOPE: EnvelopeSpec = EnvelopeSpec {
    code_field: "code",
    message_field: "msg",
    payload_field: "data",
    success: SuccessCode::Text("2000"),
    decode_depth: 1,
};

/// Paging and filter parameters for [`Chaoneng::sync_orders_by_page`].
///
/// The upstream treats every field as optional, so optionality is explicit
/// here instead of hidden behind positional defaults.
#[derive(Debug, Clone, Default)]
pub struct SyncOrdersQuery {
    /// Inclusive lower bound of the order time range, epoch seconds.
    pub start_time: Option<i64>,
    /// Inclusive upper bound of the order time range, epoch seconds.
    pub end_time: Option<i64>,
    /// Page number.
    pub page_no: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Comma-separated field list to return.
    pub fields: Option<String>,
}

/// Client for the Chaoneng waybill aggregator.
///
/// Every operation signs a fresh auth block, performs one round trip and
/// returns the unwrapped `data` payload. GET operations carry auth in the
/// query; POST operations carry auth and business fields together in the
/// form body.
#[derive(Clone, Debug)]
pub struct Chaoneng {
    client: ApiClient<Credential>,
}

impl Chaoneng {
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
            seller_id: config.seller_id,
        };

        Self {
            client: ApiClient::new(ctx, endpoint, RequestAuth::new(), credential, ENVELOPE),
        }
    }

    /// Build the shop authorization URL the seller has to visit.
    ///
    /// `callback_url` is where the authorization flow reports back to; it is
    /// an explicit parameter, never inferred from ambient server state.
    pub async fn authorization_url(
        &self,
        callback_params: &str,
        callback_url: &str,
    ) -> Result<String> {
        let auth = self.client.auth_data()?;
        let payload = self
            .client
            .call(RequestSpec::get(PATH_AUTH_URL).with_query(auth))
            .await?;

        let tb_url = payload
            .get("tb_url")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::envelope_invalid("auth url payload has no `tb_url`"))?;
        Ok(format!("{tb_url}{callback_params};back_{callback_url}"))
    }

    /// Get shop information for the given (or configured) seller.
    pub async fn shop_info(&self, seller_id: Option<&str>) -> Result<Value> {
        let mut body = self.client.auth_data()?;
        body.push(("sellerId".to_string(), self.seller_id(seller_id)?));
        self.client
            .call(RequestSpec::post(PATH_SHOP_INFO).with_body(body))
            .await
    }

    /// Sync shop orders, paged.
    pub async fn sync_orders_by_page(
        &self,
        seller_id: Option<&str>,
        orders: &SyncOrdersQuery,
    ) -> Result<Value> {
        let mut body = self.client.auth_data()?;
        body.push(("sellerId".to_string(), self.seller_id(seller_id)?));
        if let Some(end_time) = orders.end_time {
            body.push(("endTime".to_string(), end_time.to_string()));
        }
        if let Some(start_time) = orders.start_time {
            body.push(("startTime".to_string(), start_time.to_string()));
        }
        if let Some(page_no) = orders.page_no {
            body.push(("page_no".to_string(), page_no.to_string()));
        }
        if let Some(page_size) = orders.page_size {
            body.push(("page_size".to_string(), page_size.to_string()));
        }
        if let Some(fields) = &orders.fields {
            body.push(("fields".to_string(), fields.clone()));
        }
        self.client
            .call(RequestSpec::post(PATH_SYNC_ORDER_BY_PAGE).with_body(body))
            .await
    }

    /// Sync orders by order numbers.
    pub async fn sync_orders_by_sn(&self, owner_id: &str, order_sns: &[String]) -> Result<Value> {
        let mut body = self.client.auth_data()?;
        body.push(("owner_id".to_string(), owner_id.to_string()));
        // The gateway expects indexed array keys for the order number list.
        for (i, sn) in order_sns.iter().enumerate() {
            body.push((format!("orderSns[{i}]"), sn.clone()));
        }
        self.client
            .call(RequestSpec::post(PATH_SYNC_ORDER_BY_SN).with_body(body))
            .await
    }

    /// Issue a waybill for the given order payload.
    pub async fn waybill(&self, seller_id: Option<&str>, params: &impl Serialize) -> Result<Value> {
        let mut body = self.client.auth_data()?;
        body.push(("sellerId".to_string(), self.seller_id(seller_id)?));
        body.push(("param".to_string(), encode_params(params)?));
        self.client
            .call(RequestSpec::post(PATH_WAYBILL).with_body(body))
            .await
    }

    /// Mark a batch of orders as shipped.
    pub async fn ship_multiple(&self, params: &impl Serialize) -> Result<Value> {
        let mut body = self.client.auth_data()?;
        body.push(("params".to_string(), encode_params(params)?));
        self.client
            .call(RequestSpec::post(PATH_SHIP_MULTIPLE).with_body(body))
            .await
    }

    /// Get the carrier codes known to the platform.
    pub async fn cp_code(&self) -> Result<Value> {
        let auth = self.client.auth_data()?;
        self.client
            .call(RequestSpec::get(PATH_CP_CODE).with_query(auth))
            .await
    }

    /// Get the electronic waybill templates configured for the shop.
    pub async fn express_templates(&self) -> Result<Value> {
        let auth = self.client.auth_data()?;
        self.client
            .call(RequestSpec::get(PATH_EXPRESS_TEMPLATES).with_query(auth))
            .await
    }

    /// Look up the shop id.
    ///
    /// Derived convenience: calls [`Chaoneng::shop_info`] and projects the
    /// `sid` field.
    pub async fn shop_id(&self, seller_id: Option<&str>) -> Result<String> {
        let info = self.shop_info(seller_id).await?;
        let shop_id = match info.get("sid") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(Error::envelope_invalid("shop info payload has no `sid`")),
        };
        debug!("resolved shop id {shop_id}");
        Ok(shop_id)
    }

    fn seller_id(&self, explicit: Option<&str>) -> Result<String> {
        match explicit {
            Some(v) => Ok(v.to_string()),
            None => self
                .client
                .credential()
                .seller_id
                .clone()
                .ok_or_else(|| Error::config_invalid("seller id is not configured")),
        }
    }
}

fn encode_params(params: &impl Serialize) -> Result<String> {
    serde_json::to_string(params)
        .map_err(|e| Error::unexpected("failed to encode business params").with_source(e))
}

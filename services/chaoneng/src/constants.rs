// Env value used by config loader.
pub const CHAONENG_APP_KEY: &str = "CHAONENG_APP_KEY";
pub const CHAONENG_APP_SECRET: &str = "CHAONENG_APP_SECRET";
pub const CHAONENG_SELLER_ID: &str = "CHAONENG_SELLER_ID";
pub const CHAONENG_ENDPOINT: &str = "CHAONENG_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "http://smart.koo49.com/v2/tb";

/// Nonce length the gateway expects in the `nostr` field.
pub const NONCE_LENGTH: usize = 20;

// Operation paths.
pub const PATH_AUTH_URL: &str = "/getAuthUrl";
pub const PATH_SHOP_INFO: &str = "/getShopInfo";
pub const PATH_SYNC_ORDER_BY_PAGE: &str = "/syncTbOrderByPage";
pub const PATH_SYNC_ORDER_BY_SN: &str = "/syncTbOrderByOrderSn";
pub const PATH_WAYBILL: &str = "/getTbWaybill";
pub const PATH_SHIP_MULTIPLE: &str = "/tbShipMul";
pub const PATH_CP_CODE: &str = "/getTbCpCode";
pub const PATH_EXPRESS_TEMPLATES: &str = "/getTbExpTpl";

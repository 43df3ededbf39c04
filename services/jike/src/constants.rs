// Env value used by config loader.
pub const JIKE_APP_KEY: &str = "JIKE_APP_KEY";
pub const JIKE_APP_SECRET: &str = "JIKE_APP_SECRET";
pub const JIKE_USER_ID: &str = "JIKE_USER_ID";
pub const JIKE_SHOP_CODE: &str = "JIKE_SHOP_CODE";
pub const JIKE_ENDPOINT: &str = "JIKE_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "http://pddjk.qzzo.com";

// Operation paths.
pub const PATH_SHOP_INFO: &str = "/api/opt/plat/shop/info";
pub const PATH_REFUND_ADDRESS: &str = "/api/opt/plat/shop/refund/address";
pub const PATH_SHOP_ORDERS: &str = "/api/opt/plat/shop/orders";
pub const PATH_SHOP_ORDER_DETAILS: &str = "/api/opt/plat/shop/orders/info";
pub const PATH_WAYBILL: &str = "/api/opt/plat/get_waybill_code/v2";
pub const PATH_FREE_WAYBILL: &str = "/api/opt/plat/free/get_waybill_code/v2";
pub const PATH_CREATE_FREE_ORDER: &str = "/api/opt/plat/free/order/create";
pub const PATH_BATCH_FREE_WAYBILL: &str = "/api/opt/plat/free/batch/get_waybill_code/v2";
pub const PATH_CANCEL_WAYBILL: &str = "/api/opt/plat/waybill/cancel";
pub const PATH_NOTIFY_ONLINE: &str = "/api/opt/plat/notify/online";
pub const PATH_SYNC_ORDER_BY_SN: &str = "/api/opt/plat/sync/orderBySn";

use waybill_core::{Context, OsEnv};
use waybill_http_send_reqwest::ReqwestHttpSend;

/// Create a context wired with the standard components: the reqwest
/// transport with its fixed 5-second timeout and OS environment access.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

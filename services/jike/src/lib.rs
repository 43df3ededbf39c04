//! Signed client for the Jike waybill aggregator.
//!
//! Jike fronts PDD shops: order sync, waybill issuing and cancellation. Its
//! envelope is `{code, message, result}` with numeric success code `10000`,
//! and the upstream double-encodes the response body.

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod auth;
pub use auth::RequestAuth;

mod client;
pub use client::{Jike, ShopOrdersQuery};

mod constants;

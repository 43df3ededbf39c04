//! Signed client for the Chaoneng waybill aggregator.
//!
//! Chaoneng fronts Taobao shops: authorization, order sync, waybill issuing
//! and batch shipping. Its envelope is `{code, msg, data}` with string
//! success code `"2000"`, single-encoded.

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod auth;
pub use auth::RequestAuth;

mod client;
pub use client::{Chaoneng, SyncOrdersQuery};

mod constants;

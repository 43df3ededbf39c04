//! Core components for signed waybill platform clients.
//!
//! This crate provides the foundational types and traits shared by every
//! provider crate in the waybill ecosystem. A provider call always follows
//! the same shape: build a fresh authentication block, merge it with
//! operation parameters, dispatch one HTTP round trip with browser-emulation
//! headers, then validate and unwrap the provider's response envelope.
//!
//! ## Overview
//!
//! - **Context**: holds the HTTP transport and environment access
//! - **Traits**: [`SigningCredential`] for secret material, [`AuthScheme`]
//!   for the per-provider signature composition
//! - **RequestSpec / dispatch**: request construction with independent query
//!   and body parameter placement
//! - **EnvelopeSpec / parse_envelope**: per-provider envelope interpretation
//!   (success sentinel, payload field, decode depth)
//! - **ApiClient**: the composition provider clients build their business
//!   operations on
//!
//! ## Example
//!
//! ```no_run
//! use waybill_core::{
//!     ApiClient, AuthData, AuthScheme, Context, EnvelopeSpec, RequestSpec, Result,
//!     SigningCredential, SuccessCode,
//! };
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     app_key: String,
//!     app_secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.app_key.is_empty() && !self.app_secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyAuth;
//!
//! impl AuthScheme for MyAuth {
//!     type Credential = MyCredential;
//!
//!     fn build_auth_data(&self, cred: &Self::Credential) -> Result<AuthData> {
//!         let ts = waybill_core::time::timestamp_millis(waybill_core::time::now());
//!         let sign = waybill_core::hash::hex_md5_upper(
//!             format!("{ts}{}", cred.app_secret).as_bytes(),
//!         );
//!         Ok(vec![
//!             ("sendTime".into(), ts.to_string()),
//!             ("appKey".into(), cred.app_key.clone()),
//!             ("sign".into(), sign),
//!         ])
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let envelope = EnvelopeSpec {
//!     code_field: "code",
//!     message_field: "message",
//!     payload_field: "result",
//!     success: SuccessCode::Number(10000),
//!     decode_depth: 1,
//! };
//!
//! let credential = MyCredential {
//!     app_key: "my-app-key".to_string(),
//!     app_secret: "my-app-secret".to_string(),
//! };
//! let client = ApiClient::new(
//!     Context::new(),
//!     "http://provider.example",
//!     MyAuth,
//!     credential,
//!     envelope,
//! );
//!
//! let auth = client.auth_data()?;
//! let payload = client.call(RequestSpec::get("/shop/info").with_query(auth)).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;
pub use context::StaticHttpSend;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{AuthData, AuthScheme, SigningCredential};

mod dispatch;
pub use dispatch::{dispatch, RequestSpec};

mod envelope;
pub use envelope::{parse_envelope, EnvelopeSpec, SuccessCode};

mod client;
pub use client::ApiClient;

use crate::dispatch::{dispatch, RequestSpec};
use crate::envelope::{parse_envelope, EnvelopeSpec};
use crate::{AuthData, AuthScheme, Context, Error, Result, SigningCredential};
use serde_json::Value;
use std::sync::Arc;

/// ApiClient is the signed-call core a provider client composes its business
/// operations from.
///
/// It owns the credential for its whole lifetime and wires the provider's
/// auth scheme, the dispatcher and the envelope rules together. Every call is
/// exactly one network round trip; there is no retry, no caching and no state
/// shared between calls.
#[derive(Clone, Debug)]
pub struct ApiClient<C: SigningCredential> {
    ctx: Context,
    endpoint: String,
    scheme: Arc<dyn AuthScheme<Credential = C>>,
    credential: C,
    envelope: EnvelopeSpec,
}

impl<C: SigningCredential> ApiClient<C> {
    /// Create a new client.
    pub fn new(
        ctx: Context,
        endpoint: impl Into<String>,
        scheme: impl AuthScheme<Credential = C>,
        credential: C,
        envelope: EnvelopeSpec,
    ) -> Self {
        Self {
            ctx,
            endpoint: endpoint.into(),
            scheme: Arc::new(scheme),
            credential,
            envelope,
        }
    }

    /// Get the credential this client signs with.
    pub fn credential(&self) -> &C {
        &self.credential
    }

    /// Build a fresh authentication block for one call.
    ///
    /// Fails with a configuration error when required credential fields are
    /// empty, before any network I/O happens.
    pub fn auth_data(&self) -> Result<AuthData> {
        if !self.credential.is_valid() {
            return Err(Error::config_invalid(
                "credential is missing required fields",
            ));
        }

        self.scheme.build_auth_data(&self.credential)
    }

    /// Dispatch the request and unwrap the provider envelope.
    pub async fn call(&self, spec: RequestSpec) -> Result<Value> {
        let resp = dispatch(&self.ctx, &self.endpoint, &spec).await?;
        let (parts, body) = resp.into_parts();
        parse_envelope(&self.envelope, parts.status, &body)
    }
}

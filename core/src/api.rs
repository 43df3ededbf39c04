use crate::Result;
use std::fmt::Debug;

/// Ephemeral authentication fields computed fresh for one call.
///
/// Holds at minimum a timestamp, the provider identity field(s) and the
/// computed signature. Never reuse an `AuthData` across calls: nonce and
/// timestamp must vary per request.
pub type AuthData = Vec<(String, String)>;

/// SigningCredential is the secret material a provider signs with.
pub trait SigningCredential: Clone + Debug + Send + Sync + 'static {
    /// Check if every field required for signing is present and non-empty.
    fn is_valid(&self) -> bool;
}

/// AuthScheme builds the per-call authentication block for one provider.
///
/// Providers differ structurally here: one signs a single MD5 pass over
/// `timestamp + secret`, another a truncated double pass that mixes in a
/// random nonce. Implementations must be deterministic given fixed inputs and
/// perform no network or state access.
pub trait AuthScheme: Debug + Send + Sync + 'static {
    /// Credential used by this scheme.
    type Credential: SigningCredential;

    /// Construct the authentication fields for one call.
    ///
    /// The credential has already been validated by the caller; this only
    /// fills in a fresh timestamp, nonce where the scheme requires one, and
    /// the signature over them.
    fn build_auth_data(&self, credential: &Self::Credential) -> Result<AuthData>;
}

use super::constants::NONCE_LENGTH;
use super::credential::Credential;
use waybill_core::hash::hex_md5;
use waybill_core::time::{now, timestamp_secs, DateTime};
use waybill_core::utils::random_nonce;
use waybill_core::{AuthData, AuthScheme, Result};

/// AuthScheme that implements the Chaoneng request signature.
///
/// Every call sends `{appid, nostr, timestamps, sign}` where `timestamps` is
/// epoch seconds, `nostr` a fresh 20-character nonce, and `sign` a truncated
/// double MD5 pass over `secret + appid + timestamps + nostr + secret`.
#[derive(Debug, Clone, Default)]
pub struct RequestAuth {
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestAuth {
    /// Create a new scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// A fixed nonce defeats the replay protection the gateway expects.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}

impl AuthScheme for RequestAuth {
    type Credential = Credential;

    fn build_auth_data(&self, credential: &Self::Credential) -> Result<AuthData> {
        let timestamps = timestamp_secs(self.time.unwrap_or_else(now)).to_string();
        let nostr = self
            .nonce
            .clone()
            .unwrap_or_else(|| random_nonce(NONCE_LENGTH));
        let sign = sign(
            &credential.app_secret,
            &credential.app_key,
            &timestamps,
            &nostr,
        );

        Ok(vec![
            ("appid".to_string(), credential.app_key.clone()),
            ("nostr".to_string(), nostr),
            ("timestamps".to_string(), timestamps),
            ("sign".to_string(), sign),
        ])
    }
}

/// Truncated hex digest of a double MD5 pass over
/// `secret + appid + timestamps + nostr + secret`.
///
/// The hex text of the first pass is re-hashed, then characters `[3..21]` of
/// the second digest are kept. Both quirks are part of the gateway contract.
fn sign(secret: &str, appid: &str, timestamps: &str, nostr: &str) -> String {
    let first = hex_md5(format!("{secret}{appid}{timestamps}{nostr}{secret}").as_bytes());
    let second = hex_md5(first.as_bytes());
    second[3..21].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    const NONCE: &str = "abcdefghij0123456789";

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign("shhh", "app-1", "1700000000", NONCE);
        let b = sign("shhh", "app-1", "1700000000", NONCE);
        assert_eq!(a, b);
        assert_eq!(a, "be3ce3187102836ee0");
        assert_eq!(a.len(), 18);
    }

    #[test]
    fn test_sign_varies_with_each_input() {
        assert_eq!(sign("shhh", "app-1", "1700000001", NONCE), "5a5606b00b274e82aa");
        assert_eq!(sign("shhh", "app-2", "1700000000", NONCE), "03cbb882b330aa526a");
        assert_eq!(sign("shhi", "app-1", "1700000000", NONCE), "44aef3e11b59b963d9");
        assert_eq!(
            sign("shhh", "app-1", "1700000000", "abcdefghij0123456788"),
            "6563ff71bd1d7792fe"
        );
    }

    #[test]
    fn test_build_auth_data() {
        let credential = Credential {
            app_key: "app-1".to_string(),
            app_secret: "shhh".to_string(),
            seller_id: None,
        };
        let scheme = RequestAuth::new()
            .with_time(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap())
            .with_nonce(NONCE);

        let auth = scheme.build_auth_data(&credential).unwrap();
        assert_eq!(
            auth,
            vec![
                ("appid".to_string(), "app-1".to_string()),
                ("nostr".to_string(), NONCE.to_string()),
                ("timestamps".to_string(), "1700000000".to_string()),
                ("sign".to_string(), "be3ce3187102836ee0".to_string()),
            ]
        );
    }

    #[test]
    fn test_nonce_varies_between_calls() {
        let credential = Credential {
            app_key: "app-1".to_string(),
            app_secret: "shhh".to_string(),
            seller_id: None,
        };
        let scheme = RequestAuth::new();

        let first = scheme.build_auth_data(&credential).unwrap();
        let second = scheme.build_auth_data(&credential).unwrap();
        assert_ne!(first[1], second[1], "nostr must differ per call");
    }
}

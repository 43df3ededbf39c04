use super::credential::Credential;
use waybill_core::hash::hex_md5_upper;
use waybill_core::time::{now, timestamp_millis, DateTime};
use waybill_core::{AuthData, AuthScheme, Result};

/// AuthScheme that implements the Jike request signature.
///
/// Every call sends `{sendTime, appKey, sign}` where `sendTime` is epoch
/// milliseconds and `sign` covers the timestamp and the app secret. The
/// scheme has no nonce: replay protection is the timestamp window.
#[derive(Debug, Clone, Default)]
pub struct RequestAuth {
    time: Option<DateTime>,
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
}

impl AuthScheme for RequestAuth {
    type Credential = Credential;

    fn build_auth_data(&self, credential: &Self::Credential) -> Result<AuthData> {
        let send_time = timestamp_millis(self.time.unwrap_or_else(now)).to_string();
        let sign = sign(&credential.app_secret, &send_time);

        Ok(vec![
            ("sendTime".to_string(), send_time),
            ("appKey".to_string(), credential.app_key.clone()),
            ("sign".to_string(), sign),
        ])
    }
}

/// Uppercase hex digest of one MD5 pass over `timestamp + secret`.
fn sign(secret: &str, timestamp: &str) -> String {
    hex_md5_upper(format!("{timestamp}{secret}").as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign("s3cr3t", "1700000000000");
        let b = sign("s3cr3t", "1700000000000");
        assert_eq!(a, b);
        assert_eq!(a, "0A0D7973E45A5EE9E658A81AC0816795");
    }

    #[test]
    fn test_sign_varies_with_each_input() {
        assert_eq!(sign("s3cr3t", "1700000000001"), "E1AA19A743DCE75E66D6B86CD63293B1");
        assert_eq!(sign("s3cr3u", "1700000000000"), "17824ABD9C67A5D74FADB83B22337AF3");
    }

    #[test]
    fn test_build_auth_data() {
        let credential = Credential {
            app_key: "app-key".to_string(),
            app_secret: "s3cr3t".to_string(),
            user_id: None,
            shop_code: None,
        };
        let scheme = RequestAuth::new()
            .with_time(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap());

        let auth = scheme.build_auth_data(&credential).unwrap();
        assert_eq!(
            auth,
            vec![
                ("sendTime".to_string(), "1700000000000".to_string()),
                ("appKey".to_string(), "app-key".to_string()),
                ("sign".to_string(), "0A0D7973E45A5EE9E658A81AC0816795".to_string()),
            ]
        );
    }
}

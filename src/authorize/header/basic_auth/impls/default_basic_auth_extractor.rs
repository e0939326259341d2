use std::string::FromUtf8Error;

use base64::Engine;
use http::HeaderMap;

use crate::authorize::header::{
    basic_auth::{basic_auth_extractor::BasicAuthExtractor, credentials::BasicCredentials},
    header_extractor::HeaderExtractor,
    impls::default_header_extractor::{DefaultHeaderError, DefaultHeaderExtractor},
};

const BASIC_PREFIX: &str = "Basic ";

/// Reads [`BasicCredentials`] from the `Authorization` header.
///
/// Every stage is exposed on its own so callers can run them separately:
/// [`extract_base64_authorization_header`](Self::extract_base64_authorization_header),
/// [`decode_base64_authorization_header`](Self::decode_base64_authorization_header) and
/// [`extract_user_credentials`](Self::extract_user_credentials).
#[derive(Debug, Clone)]
pub struct DefaultBasicAuthExtractor {
    // Not generic, the header name is always "Authorization"
    header_extractor: DefaultHeaderExtractor,
}

impl DefaultBasicAuthExtractor {
    pub fn new() -> Self {
        Self {
            header_extractor: DefaultHeaderExtractor::authorization(),
        }
    }

    /// Returns what follows the case-sensitive `"Basic "` prefix.
    pub fn extract_base64_authorization_header(
        authorization: &str,
    ) -> Result<&str, DefaultBasicAuthError> {
        authorization
            .strip_prefix(BASIC_PREFIX)
            .ok_or(DefaultBasicAuthError::Format)
    }

    pub fn decode_base64_authorization_header(
        encoded: &str,
    ) -> Result<String, DefaultBasicAuthError> {
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(DefaultBasicAuthError::Decode)?;

        let decoded = String::from_utf8(decoded).map_err(DefaultBasicAuthError::Utf8)?;

        Ok(decoded)
    }

    /// Splits on the first colon only, passwords may contain colons.
    pub fn extract_user_credentials(
        decoded: &str,
    ) -> Result<BasicCredentials, DefaultBasicAuthError> {
        match decoded.split_once(':') {
            Some((email, password)) => Ok(BasicCredentials::new(email, password)),
            None => Err(DefaultBasicAuthError::Colon),
        }
    }
}

impl Default for DefaultBasicAuthExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicAuthExtractor for DefaultBasicAuthExtractor {
    type Error = DefaultBasicAuthError;

    #[tracing::instrument(skip_all)]
    fn extract_basic_auth(&self, headers: &HeaderMap) -> Result<BasicCredentials, Self::Error> {
        let authorization = self.header_extractor.extract_header(headers)?;
        let encoded = Self::extract_base64_authorization_header(authorization)?;
        let decoded = Self::decode_base64_authorization_header(encoded)?;

        Self::extract_user_credentials(&decoded)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefaultBasicAuthError {
    #[error("Authorization header extraction error: {0}")]
    Header(
        #[source]
        #[from]
        DefaultHeaderError,
    ),
    #[error("Authorization header is not in the form: `Basic xyz`")]
    Format,
    #[error("Authorization header base64 decode error: {0}")]
    Decode(base64::DecodeError),
    #[error("Authorization header utf-8 error: {0}")]
    Utf8(FromUtf8Error),
    #[error("Authorization header does not contain a colon")]
    Colon,
}

#[cfg(test)]
mod tests {
    use http::{header::AUTHORIZATION, HeaderValue};

    use super::*;

    type Extractor = DefaultBasicAuthExtractor;

    fn headers(authorization: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(authorization));
        headers
    }

    #[test]
    fn extract_base64_requires_basic_prefix() {
        assert_eq!(
            Extractor::extract_base64_authorization_header("Basic SG9sYmVydG9u").ok(),
            Some("SG9sYmVydG9u")
        );
        assert_eq!(
            Extractor::extract_base64_authorization_header("Basic ").ok(),
            Some("")
        );

        for invalid in ["Holberton", "Basic", "basic SG9s", "BasicSG9s", "Bearer SG9s", ""] {
            assert!(
                matches!(
                    Extractor::extract_base64_authorization_header(invalid),
                    Err(DefaultBasicAuthError::Format)
                ),
                "{invalid:?} should be rejected"
            );
        }
    }

    #[test]
    fn extract_base64_recovers_payload_exactly() {
        let payload = base64::engine::general_purpose::STANDARD.encode("a@b.c:pwd");
        let header = format!("Basic {payload}");

        assert_eq!(
            Extractor::extract_base64_authorization_header(&header).ok(),
            Some(payload.as_str())
        );
    }

    #[test]
    fn decode_base64() {
        assert_eq!(
            Extractor::decode_base64_authorization_header("SG9sYmVydG9u").ok(),
            Some(String::from("Holberton"))
        );
        assert!(matches!(
            Extractor::decode_base64_authorization_header("Holberton"),
            Err(DefaultBasicAuthError::Decode(_))
        ));
        // base64 of [0xff, 0xfe]
        assert!(matches!(
            Extractor::decode_base64_authorization_header("//4="),
            Err(DefaultBasicAuthError::Utf8(_))
        ));
    }

    #[test]
    fn credentials_split_on_first_colon() {
        let credentials = Extractor::extract_user_credentials("a:b:c").expect("has a colon");

        assert_eq!(credentials, BasicCredentials::new("a", "b:c"));

        let credentials = Extractor::extract_user_credentials("bob@hbtn.io:").expect("has a colon");

        assert_eq!(credentials, BasicCredentials::new("bob@hbtn.io", ""));

        assert!(matches!(
            Extractor::extract_user_credentials("Holberton School"),
            Err(DefaultBasicAuthError::Colon)
        ));
    }

    #[test]
    fn extract_basic_auth_from_headers() {
        // bob@hbtn.io:H0lbertonSchool98!
        let headers = headers("Basic Ym9iQGhidG4uaW86SDBsYmVydG9uU2Nob29sOTgh");

        let credentials = Extractor::new()
            .extract_basic_auth(&headers)
            .expect("valid basic auth");

        assert_eq!(
            credentials,
            BasicCredentials::new("bob@hbtn.io", "H0lbertonSchool98!")
        );
    }

    #[test]
    fn extract_basic_auth_without_header() {
        assert!(matches!(
            Extractor::new().extract_basic_auth(&HeaderMap::new()),
            Err(DefaultBasicAuthError::Header(DefaultHeaderError::Missing))
        ));
    }
}

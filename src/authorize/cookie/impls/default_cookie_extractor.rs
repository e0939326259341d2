use std::borrow::Cow;

use cookie::Cookie;
use http::{header::COOKIE, HeaderMap};

use crate::authorize::cookie::cookie_extractor::CookieExtractor;

/// Environment variable holding the session cookie name.
pub const SESSION_NAME_VAR: &str = "SESSION_NAME";

/// Reads a cookie by name from the `Cookie` headers.
///
/// Without a cookie name every extraction fails, whatever cookies the request carries.
/// Values are read as UTF-8, a `Cookie` header that is not valid UTF-8 is skipped.
#[derive(Debug, Clone, Default)]
pub struct DefaultCookieExtractor {
    cookie_name: Option<Cow<'static, str>>,
}

impl DefaultCookieExtractor {
    pub fn new(cookie_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            cookie_name: Some(cookie_name.into()),
        }
    }

    pub const fn unnamed() -> Self {
        Self { cookie_name: None }
    }

    /// Uses the value of [`SESSION_NAME_VAR`] as cookie name.
    pub fn from_env() -> Self {
        Self {
            cookie_name: std::env::var(SESSION_NAME_VAR).ok().map(Cow::Owned),
        }
    }
}

impl<N> From<Option<N>> for DefaultCookieExtractor
where
    N: Into<Cow<'static, str>>,
{
    fn from(cookie_name: Option<N>) -> Self {
        Self {
            cookie_name: cookie_name.map(Into::into),
        }
    }
}

impl CookieExtractor for DefaultCookieExtractor {
    type Error = DefaultCookieError;

    fn cookie_name(&self) -> Option<&str> {
        self.cookie_name.as_deref()
    }

    #[tracing::instrument(skip_all, fields(cookie_name = ?self.cookie_name))]
    fn extract_cookie(&self, headers: &HeaderMap) -> Result<String, Self::Error> {
        let cookie_name = self.cookie_name().ok_or(DefaultCookieError::Unnamed)?;

        for header in headers.get_all(COOKIE) {
            let Ok(header) = std::str::from_utf8(header.as_bytes()) else {
                tracing::debug!("Skipping non UTF-8 cookie header");

                continue;
            };

            let found = Cookie::split_parse(header)
                .filter_map(Result::ok)
                .find(|cookie| cookie.name() == cookie_name);

            if let Some(cookie) = found {
                return Ok(cookie.value().to_string());
            }
        }

        Err(DefaultCookieError::Missing)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefaultCookieError {
    #[error("No cookie name configured")]
    Unnamed,
    #[error("Cookie not found")]
    Missing,
}

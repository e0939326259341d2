use std::{fmt::Display, future::Future, marker::PhantomData};

use http::HeaderMap;

use super::{
    cookie::{CookieExtractor, DefaultCookieExtractor},
    excluded_paths,
    header::{DefaultHeaderExtractor, HeaderExtractor},
};

/// Authentication strategy.
///
/// A router first asks [`Auth::require_auth`] whether a path is protected,
/// then resolves the caller with [`Auth::current_user`].
/// Every method answers "absent" instead of failing, turning that into a `401` or `403` is up to the caller.
pub trait Auth {
    type User: Clone + Send + Sync + 'static;

    /// See [`require_auth`](excluded_paths::require_auth).
    fn require_auth<P>(&self, path: &str, excluded_paths: &[P]) -> bool
    where
        P: AsRef<str>,
    {
        excluded_paths::require_auth(path, excluded_paths)
    }

    #[tracing::instrument(skip_all)]
    fn authorization_header<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        DefaultHeaderExtractor::authorization()
            .extract_header(headers)
            .ok()
    }

    /// Value of the session cookie, whatever the strategy.
    ///
    /// The built-in strategies read the cookie named by their configured cookie extractor,
    /// so a session cookie counts as credentials even when it cannot resolve a user.
    fn session_cookie(&self, _headers: &HeaderMap) -> Option<String> {
        None
    }

    fn current_user(
        &self,
        _headers: &HeaderMap,
    ) -> impl Future<Output = Option<Self::User>> + Send {
        std::future::ready(None)
    }
}

#[tracing::instrument(skip_all)]
pub(crate) fn read_session_cookie<C>(cookie_extractor: &C, headers: &HeaderMap) -> Option<String>
where
    C: CookieExtractor,
    C::Error: Display,
{
    match cookie_extractor.extract_cookie(headers) {
        Ok(session_id) => Some(session_id),
        Err(err) => {
            tracing::debug!(%err, "Session cookie extraction failed");

            None
        }
    }
}

/// Never resolves a user.
///
/// Behind [`AuthLayer`](crate::extension::AuthLayer) only excluded paths are reachable:
/// other requests are rejected with `401` without credentials and `403` with them.
pub struct NoAuth<U> {
    cookie_extractor: DefaultCookieExtractor,
    _user: PhantomData<fn() -> U>,
}

impl<U> NoAuth<U> {
    pub const fn new() -> Self {
        Self::with_cookie_extractor(DefaultCookieExtractor::unnamed())
    }

    pub const fn with_cookie_extractor(cookie_extractor: DefaultCookieExtractor) -> Self {
        Self {
            cookie_extractor,
            _user: PhantomData,
        }
    }
}

impl<U> Default for NoAuth<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Clone for NoAuth<U> {
    fn clone(&self) -> Self {
        Self::with_cookie_extractor(self.cookie_extractor.clone())
    }
}

impl<U> core::fmt::Debug for NoAuth<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoAuth")
            .field("cookie_extractor", &self.cookie_extractor)
            .finish()
    }
}

impl<U> Auth for NoAuth<U>
where
    U: Clone + Send + Sync + 'static,
{
    type User = U;

    fn session_cookie(&self, headers: &HeaderMap) -> Option<String> {
        read_session_cookie(&self.cookie_extractor, headers)
    }
}

use std::{fmt::Display, ops::Deref, sync::Arc};

use http::HeaderMap;

use crate::authorize::{
    auth::{read_session_cookie, Auth},
    cookie::DefaultCookieExtractor,
    header::basic_auth::BasicAuthExtractor,
    user::{AuthUser, UserStore},
};

#[derive(Debug)]
pub struct BasicAuthInner<Ba, S> {
    basic_auth_extractor: Ba,
    user_store: S,
    cookie_extractor: DefaultCookieExtractor,
}

impl<Ba, S> BasicAuthInner<Ba, S> {
    pub const fn new(
        basic_auth_extractor: Ba,
        user_store: S,
        cookie_extractor: DefaultCookieExtractor,
    ) -> Self {
        Self {
            basic_auth_extractor,
            user_store,
            cookie_extractor,
        }
    }

    pub fn user_store(&self) -> &S {
        &self.user_store
    }

    /// Names the session cookie, which never resolves a user here.
    pub fn cookie_extractor(&self) -> &DefaultCookieExtractor {
        &self.cookie_extractor
    }
}

impl<Ba, S> BasicAuthInner<Ba, S>
where
    S: UserStore,
{
    /// Looks the user up by `email` and checks `password` against the first match only.
    #[tracing::instrument(skip_all)]
    pub async fn user_object_from_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Option<S::User> {
        let users = match self.user_store.search(email).await {
            Ok(users) => users,
            Err(err) => {
                tracing::warn!(%err, "User store search failed");

                return None;
            }
        };

        let Some(user) = users.into_iter().next() else {
            tracing::debug!("No user registered with this email");

            return None;
        };

        if !user.is_valid_password(password) {
            tracing::debug!(user_id = user.id(), "Invalid password");

            return None;
        }

        Some(user)
    }
}

/// Resolves the caller from `Authorization: Basic <base64(email:password)>`.
#[derive(Debug)]
pub struct BasicAuth<Ba, S> {
    inner: Arc<BasicAuthInner<Ba, S>>,
}

impl<Ba, S> BasicAuth<Ba, S> {
    /// Without a session cookie name.
    pub fn new(basic_auth_extractor: Ba, user_store: S) -> Self {
        Self::with_cookie_extractor(
            basic_auth_extractor,
            user_store,
            DefaultCookieExtractor::unnamed(),
        )
    }

    pub fn with_cookie_extractor(
        basic_auth_extractor: Ba,
        user_store: S,
        cookie_extractor: DefaultCookieExtractor,
    ) -> Self {
        Self {
            inner: Arc::new(BasicAuthInner::new(
                basic_auth_extractor,
                user_store,
                cookie_extractor,
            )),
        }
    }
}

impl<Ba, S> Clone for BasicAuth<Ba, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<Ba, S> Deref for BasicAuth<Ba, S> {
    type Target = BasicAuthInner<Ba, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<Ba, S> Auth for BasicAuth<Ba, S>
where
    Ba: BasicAuthExtractor + Send + Sync,
    Ba::Error: Display,
    S: UserStore + Send + Sync,
{
    type User = S::User;

    fn session_cookie(&self, headers: &HeaderMap) -> Option<String> {
        read_session_cookie(&self.cookie_extractor, headers)
    }

    #[tracing::instrument(skip_all)]
    async fn current_user(&self, headers: &HeaderMap) -> Option<Self::User> {
        let credentials = match self.basic_auth_extractor.extract_basic_auth(headers) {
            Ok(credentials) => credentials,
            Err(err) => {
                tracing::debug!(%err, "Basic auth extraction failed");

                return None;
            }
        };

        self.user_object_from_credentials(&credentials.email, &credentials.password)
            .await
    }
}

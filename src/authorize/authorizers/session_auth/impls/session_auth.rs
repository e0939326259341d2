use std::{fmt::Display, ops::Deref, sync::Arc};

use http::HeaderMap;

use crate::authorize::{
    auth::{read_session_cookie, Auth},
    authorizers::session_auth::session_store::SessionStore,
    cookie::CookieExtractor,
    user::UserStore,
};

use super::session_id::SessionId;

#[derive(Debug)]
pub struct SessionAuthInner<C, St, S> {
    cookie_extractor: C,
    session_store: St,
    user_store: S,
}

impl<C, St, S> SessionAuthInner<C, St, S> {
    pub const fn new(cookie_extractor: C, session_store: St, user_store: S) -> Self {
        Self {
            cookie_extractor,
            session_store,
            user_store,
        }
    }

    pub fn cookie_extractor(&self) -> &C {
        &self.cookie_extractor
    }

    pub fn session_store(&self) -> &St {
        &self.session_store
    }

    pub fn user_store(&self) -> &S {
        &self.user_store
    }
}

impl<C, St, S> SessionAuthInner<C, St, S>
where
    St: SessionStore,
{
    /// Starts a new session for `user_id`. Every call mints a fresh id.
    #[tracing::instrument(skip_all)]
    pub async fn create_session(&self, user_id: impl Into<String>) -> SessionId {
        let session_id = SessionId::new();

        self.session_store
            .insert(session_id.clone(), user_id.into())
            .await;

        tracing::debug!("Session created");

        session_id
    }

    pub async fn user_id_for_session_id(&self, session_id: &str) -> Option<String> {
        self.session_store.user_id(session_id).await
    }
}

impl<C, St, S> SessionAuthInner<C, St, S>
where
    C: CookieExtractor,
    C::Error: Display,
{
    /// Value of the configured session cookie.
    pub fn session_cookie(&self, headers: &HeaderMap) -> Option<String> {
        read_session_cookie(&self.cookie_extractor, headers)
    }
}

impl<C, St, S> SessionAuthInner<C, St, S>
where
    C: CookieExtractor,
    C::Error: Display,
    St: SessionStore,
{
    /// Ends the session referenced by the request's session cookie.
    ///
    /// Returns `false` if the request carries no session cookie or the session is unknown.
    #[tracing::instrument(skip_all)]
    pub async fn destroy_session(&self, headers: &HeaderMap) -> bool {
        let Some(session_id) = self.session_cookie(headers) else {
            return false;
        };

        self.session_store.remove(&session_id).await.is_some()
    }
}

/// Resolves the caller from a session cookie minted by [`create_session`](SessionAuthInner::create_session).
#[derive(Debug)]
pub struct SessionAuth<C, St, S> {
    inner: Arc<SessionAuthInner<C, St, S>>,
}

impl<C, St, S> SessionAuth<C, St, S> {
    pub fn new(cookie_extractor: C, session_store: St, user_store: S) -> Self {
        Self {
            inner: Arc::new(SessionAuthInner::new(
                cookie_extractor,
                session_store,
                user_store,
            )),
        }
    }
}

impl<C, St, S> Clone for SessionAuth<C, St, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C, St, S> Deref for SessionAuth<C, St, S> {
    type Target = SessionAuthInner<C, St, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<C, St, S> Auth for SessionAuth<C, St, S>
where
    C: CookieExtractor + Send + Sync,
    C::Error: Display,
    St: SessionStore + Send + Sync,
    S: UserStore + Send + Sync,
{
    type User = S::User;

    fn session_cookie(&self, headers: &HeaderMap) -> Option<String> {
        self.inner.session_cookie(headers)
    }

    #[tracing::instrument(skip_all)]
    async fn current_user(&self, headers: &HeaderMap) -> Option<Self::User> {
        let session_id = self.inner.session_cookie(headers)?;

        let Some(user_id) = self.user_id_for_session_id(&session_id).await else {
            tracing::debug!("Unknown session");

            return None;
        };

        match self.user_store.get(&user_id).await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(%err, "User store lookup failed");

                None
            }
        }
    }
}

use http::HeaderMap;

use super::auth::{Auth, NoAuth};

/// Strategy chosen at runtime, usually from [`AuthConfig`](crate::config::AuthConfig).
#[derive(Debug, Clone)]
pub enum AnyAuth<U, B, S> {
    None(NoAuth<U>),
    Basic(B),
    Session(S),
}

impl<U, B, S> AnyAuth<U, B, S> {
    pub const fn as_basic(&self) -> Option<&B> {
        match self {
            Self::Basic(basic) => Some(basic),
            _ => None,
        }
    }

    pub const fn as_session(&self) -> Option<&S> {
        match self {
            Self::Session(session) => Some(session),
            _ => None,
        }
    }
}

impl<U, B, S> Auth for AnyAuth<U, B, S>
where
    U: Clone + Send + Sync + 'static,
    B: Auth<User = U> + Sync,
    S: Auth<User = U> + Sync,
{
    type User = U;

    fn authorization_header<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        match self {
            Self::None(none) => none.authorization_header(headers),
            Self::Basic(basic) => basic.authorization_header(headers),
            Self::Session(session) => session.authorization_header(headers),
        }
    }

    fn session_cookie(&self, headers: &HeaderMap) -> Option<String> {
        match self {
            Self::None(none) => none.session_cookie(headers),
            Self::Basic(basic) => basic.session_cookie(headers),
            Self::Session(session) => session.session_cookie(headers),
        }
    }

    async fn current_user(&self, headers: &HeaderMap) -> Option<Self::User> {
        match self {
            Self::None(none) => none.current_user(headers).await,
            Self::Basic(basic) => basic.current_user(headers).await,
            Self::Session(session) => session.current_user(headers).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderValue,
    };

    use crate::authorize::{
        basic_auth::BasicAuth,
        cookie::DefaultCookieExtractor,
        header::basic_auth::DefaultBasicAuthExtractor,
        session_auth::{InMemorySessionStore, SessionAuth},
        user::{InMemoryUserStore, SimpleUser},
    };

    use super::*;

    type TestAnyAuth = AnyAuth<
        SimpleUser,
        BasicAuth<DefaultBasicAuthExtractor, InMemoryUserStore<SimpleUser>>,
        SessionAuth<DefaultCookieExtractor, InMemorySessionStore, InMemoryUserStore<SimpleUser>>,
    >;

    fn users() -> InMemoryUserStore<SimpleUser> {
        InMemoryUserStore::new([SimpleUser::new("1", "bob@hbtn.io", "pwd")])
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        // bob@hbtn.io:pwd
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_static("Basic Ym9iQGhidG4uaW86cHdk"),
        );
        headers.insert(COOKIE, HeaderValue::from_static("_my_session_id=abc"));
        headers
    }

    #[tokio::test]
    async fn none_resolves_nobody() {
        let auth = TestAnyAuth::None(NoAuth::new());

        assert_eq!(auth.authorization_header(&headers()), Some("Basic Ym9iQGhidG4uaW86cHdk"));
        assert_eq!(auth.session_cookie(&headers()), None);
        assert_eq!(auth.current_user(&headers()).await, None);

        let auth = TestAnyAuth::None(NoAuth::with_cookie_extractor(DefaultCookieExtractor::new(
            "_my_session_id",
        )));

        assert_eq!(auth.session_cookie(&headers()).as_deref(), Some("abc"));
        assert_eq!(auth.current_user(&headers()).await, None);
    }

    #[tokio::test]
    async fn delegates_to_basic() {
        let auth = TestAnyAuth::Basic(BasicAuth::new(DefaultBasicAuthExtractor::new(), users()));

        let user = auth.current_user(&headers()).await;

        assert_eq!(user.map(|user| user.id), Some("1".into()));
        assert_eq!(auth.session_cookie(&headers()), None);
        assert!(auth.as_basic().is_some());
        assert!(auth.as_session().is_none());
    }

    #[tokio::test]
    async fn delegates_to_session() {
        let session = SessionAuth::new(
            DefaultCookieExtractor::new("_my_session_id"),
            InMemorySessionStore::new(),
            users(),
        );
        let auth = TestAnyAuth::Session(session.clone());

        assert_eq!(auth.session_cookie(&headers()).as_deref(), Some("abc"));
        assert_eq!(auth.current_user(&headers()).await, None);

        let session_id = session.create_session("1").await;
        let mut headers = headers();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("_my_session_id={session_id}"))
                .expect("valid header value"),
        );

        let user = auth.current_user(&headers).await;

        assert_eq!(user.map(|user| user.id), Some("1".into()));
    }
}

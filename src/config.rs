//! Strategy selection from the environment.

use std::{borrow::Cow, str::FromStr};

use crate::authorize::{
    basic_auth::BasicAuth,
    cookie::{DefaultCookieExtractor, SESSION_NAME_VAR},
    header::basic_auth::DefaultBasicAuthExtractor,
    session_auth::{InMemorySessionStore, SessionAuth},
    user::UserStore,
    AnyAuth, ExcludedPaths, NoAuth,
};

/// Environment variable selecting the [`AuthType`].
pub const AUTH_TYPE_VAR: &str = "AUTH_TYPE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthType {
    #[default]
    None,
    Basic,
    Session,
}

impl AuthType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "auth",
            Self::Basic => "basic_auth",
            Self::Session => "session_auth",
        }
    }
}

impl core::fmt::Display for AuthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = AuthTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auth" => Ok(Self::None),
            "basic_auth" => Ok(Self::Basic),
            "session_auth" => Ok(Self::Session),
            other => Err(AuthTypeError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthTypeError {
    #[error("Unknown auth type: `{0}`, expected one of `auth`, `basic_auth`, `session_auth`")]
    Unknown(String),
}

/// Strategy produced by [`AuthConfig::build`].
pub type ConfiguredAuth<S> = AnyAuth<
    <S as UserStore>::User,
    BasicAuth<DefaultBasicAuthExtractor, S>,
    SessionAuth<DefaultCookieExtractor, InMemorySessionStore, S>,
>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub auth_type: AuthType,
    /// Session cookie name. Without it no session cookie is ever found.
    pub session_name: Option<Cow<'static, str>>,
    pub excluded_paths: ExcludedPaths,
}

impl AuthConfig {
    pub fn new(auth_type: AuthType) -> Self {
        Self {
            auth_type,
            ..Self::default()
        }
    }

    pub fn with_session_name(mut self, session_name: impl Into<Cow<'static, str>>) -> Self {
        self.session_name = Some(session_name.into());
        self
    }

    pub fn with_excluded_paths(mut self, excluded_paths: ExcludedPaths) -> Self {
        self.excluded_paths = excluded_paths;
        self
    }

    /// Reads [`AUTH_TYPE_VAR`] and [`SESSION_NAME_VAR`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// An unset or unknown auth type falls back to [`AuthType::None`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_type = match lookup(AUTH_TYPE_VAR).as_deref().map(AuthType::from_str) {
            Some(Ok(auth_type)) => auth_type,
            Some(Err(err)) => {
                tracing::warn!(%err, "Falling back to no authentication");

                AuthType::None
            }
            None => AuthType::None,
        };

        Self {
            auth_type,
            session_name: lookup(SESSION_NAME_VAR).map(Cow::Owned),
            excluded_paths: ExcludedPaths::default(),
        }
    }

    pub fn cookie_extractor(&self) -> DefaultCookieExtractor {
        DefaultCookieExtractor::from(self.session_name.clone())
    }

    /// Builds the configured strategy on top of `user_store`.
    ///
    /// Every strategy reads the session cookie, only [`AuthType::Session`] resolves users from it.
    #[tracing::instrument(skip_all, fields(auth_type = %self.auth_type))]
    pub fn build<S>(&self, user_store: S) -> ConfiguredAuth<S>
    where
        S: UserStore,
    {
        tracing::debug!("Building auth strategy");

        match self.auth_type {
            AuthType::None => AnyAuth::None(NoAuth::with_cookie_extractor(self.cookie_extractor())),
            AuthType::Basic => AnyAuth::Basic(BasicAuth::with_cookie_extractor(
                DefaultBasicAuthExtractor::new(),
                user_store,
                self.cookie_extractor(),
            )),
            AuthType::Session => AnyAuth::Session(SessionAuth::new(
                self.cookie_extractor(),
                InMemorySessionStore::new(),
                user_store,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::authorize::{
        cookie::CookieExtractor,
        user::{InMemoryUserStore, SimpleUser},
    };

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn parse_auth_type() {
        assert_eq!("basic_auth".parse::<AuthType>().ok(), Some(AuthType::Basic));
        assert_eq!("session_auth".parse::<AuthType>().ok(), Some(AuthType::Session));
        assert_eq!("auth".parse::<AuthType>().ok(), Some(AuthType::None));
        assert!("Basic_Auth".parse::<AuthType>().is_err());

        for auth_type in [AuthType::None, AuthType::Basic, AuthType::Session] {
            assert_eq!(auth_type.to_string().parse::<AuthType>().ok(), Some(auth_type));
        }
    }

    #[test]
    fn from_lookup() {
        let config = AuthConfig::from_lookup(lookup(&[
            ("AUTH_TYPE", "session_auth"),
            ("SESSION_NAME", "_my_session_id"),
        ]));

        assert_eq!(config.auth_type, AuthType::Session);
        assert_eq!(config.session_name.as_deref(), Some("_my_session_id"));
        assert_eq!(
            config.cookie_extractor().cookie_name(),
            Some("_my_session_id")
        );
    }

    #[test]
    fn unset_or_unknown_auth_type_is_no_auth() {
        let config = AuthConfig::from_lookup(lookup(&[]));

        assert_eq!(config, AuthConfig::default());
        assert_eq!(config.cookie_extractor().cookie_name(), None);

        let config = AuthConfig::from_lookup(lookup(&[("AUTH_TYPE", "jwt")]));

        assert_eq!(config.auth_type, AuthType::None);
    }

    #[test]
    fn build_selects_strategy() {
        let users = || InMemoryUserStore::<SimpleUser>::new([]);

        assert!(matches!(
            AuthConfig::new(AuthType::None).build(users()),
            AnyAuth::None(_)
        ));
        assert!(matches!(
            AuthConfig::new(AuthType::Basic).build(users()),
            AnyAuth::Basic(_)
        ));

        let session = AuthConfig::new(AuthType::Session)
            .with_session_name("_my_session_id")
            .build(users());

        let cookie_name = session
            .as_session()
            .and_then(|session| session.cookie_extractor().cookie_name());

        assert_eq!(cookie_name, Some("_my_session_id"));

        let basic = AuthConfig::new(AuthType::Basic)
            .with_session_name("_my_session_id")
            .build(users());

        let cookie_name = basic
            .as_basic()
            .and_then(|basic| basic.cookie_extractor().cookie_name());

        assert_eq!(cookie_name, Some("_my_session_id"));
    }
}

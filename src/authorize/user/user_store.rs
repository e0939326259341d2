use std::{fmt::Display, future::Future};

use super::auth_user::AuthUser;

/// Lookup side of the persistence layer owning the users.
///
/// Errors are never surfaced to clients: the strategies treat a failing store as "no user".
#[cfg_attr(test, mockall::automock(type User = crate::authorize::user::SimpleUser; type Error = anyhow::Error;))]
pub trait UserStore {
    type User: AuthUser;

    type Error: Display + Send;

    /// All users registered with `email`.
    fn search(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Vec<Self::User>, Self::Error>> + Send;

    fn get(&self, id: &str) -> impl Future<Output = Result<Option<Self::User>, Self::Error>> + Send;
}

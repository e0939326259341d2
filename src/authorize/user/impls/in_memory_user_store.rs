use std::{convert::Infallible, sync::Arc};

use crate::authorize::user::{auth_user::AuthUser, user_store::UserStore};

/// Fixed set of users, kept in insertion order.
#[derive(Debug)]
pub struct InMemoryUserStore<U> {
    users: Arc<[U]>,
}

impl<U> InMemoryUserStore<U> {
    pub fn new(users: impl IntoIterator<Item = U>) -> Self {
        Self {
            users: users.into_iter().collect(),
        }
    }
}

impl<U> Clone for InMemoryUserStore<U> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
        }
    }
}

impl<U> FromIterator<U> for InMemoryUserStore<U> {
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<U> UserStore for InMemoryUserStore<U>
where
    U: AuthUser,
{
    type User = U;

    type Error = Infallible;

    async fn search(&self, email: &str) -> Result<Vec<Self::User>, Self::Error> {
        Ok(self
            .users
            .iter()
            .filter(|user| user.email() == email)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Self::User>, Self::Error> {
        Ok(self.users.iter().find(|user| user.id() == id).cloned())
    }
}

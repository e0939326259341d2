use std::borrow::Cow;

use crate::authorize::user::auth_user::AuthUser;

/// User holding its password in clear text, for tests and demos.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SimpleUser {
    pub id: Cow<'static, str>,
    pub email: Cow<'static, str>,
    pub password: Cow<'static, str>,
}

impl core::fmt::Debug for SimpleUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"...")
            .finish()
    }
}

impl SimpleUser {
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        email: impl Into<Cow<'static, str>>,
        password: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl AuthUser for SimpleUser {
    fn id(&self) -> &str {
        &self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn is_valid_password(&self, password: &str) -> bool {
        self.password == password
    }
}

use std::ops::Deref;

/// User resolved by [`AuthService`](crate::extension::AuthService), stored in the request extensions.
///
/// Only this crate can create it, so handlers extracting [`Authorized`](super::authorized::Authorized)
/// can rely on the user having been resolved by an [`Auth`](crate::authorize::Auth) strategy
/// and not inserted by arbitrary code.
#[derive(Debug, Clone)]
pub struct SealedAuthorized<T>(pub(crate) T);

impl<T> SealedAuthorized<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for SealedAuthorized<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

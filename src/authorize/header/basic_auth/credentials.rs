/// `email:password` pair carried by a `Basic` authorization header.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

impl core::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("email", &self.email)
            .field("password", &"...")
            .finish()
    }
}

impl BasicCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl<E, P> From<(E, P)> for BasicCredentials
where
    E: Into<String>,
    P: Into<String>,
{
    fn from(value: (E, P)) -> Self {
        Self::new(value.0, value.1)
    }
}

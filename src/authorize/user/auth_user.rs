pub trait AuthUser: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;

    fn email(&self) -> &str;

    fn is_valid_password(&self, password: &str) -> bool;
}

use http::HeaderMap;

pub trait CookieExtractor {
    type Error;

    /// `None` if no cookie name is configured.
    fn cookie_name(&self) -> Option<&str>;

    fn extract_cookie(&self, headers: &HeaderMap) -> Result<String, Self::Error>;
}

use http::HeaderMap;

pub trait HeaderExtractor {
    type Error;

    fn header_name(&self) -> &str;

    fn extract_header<'a>(&self, headers: &'a HeaderMap) -> Result<&'a str, Self::Error>;
}

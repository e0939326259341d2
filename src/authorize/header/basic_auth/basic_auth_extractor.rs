use http::HeaderMap;

use super::credentials::BasicCredentials;

pub trait BasicAuthExtractor {
    type Error;

    fn extract_basic_auth(&self, headers: &HeaderMap) -> Result<BasicCredentials, Self::Error>;
}

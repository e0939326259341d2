mod basic_auth_extractor;
mod credentials;
mod impls;

pub use basic_auth_extractor::BasicAuthExtractor;
pub use credentials::BasicCredentials;
pub use impls::default_basic_auth_extractor::{DefaultBasicAuthError, DefaultBasicAuthExtractor};

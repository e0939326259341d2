mod cookie_extractor;
mod impls;

pub use cookie_extractor::CookieExtractor;
pub use impls::default_cookie_extractor::{
    DefaultCookieError, DefaultCookieExtractor, SESSION_NAME_VAR,
};

mod impls;

pub use impls::basic_auth::BasicAuth;

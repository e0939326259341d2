pub mod basic_auth;
pub mod session_auth;

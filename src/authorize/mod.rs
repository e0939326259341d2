//! Authentication strategies and the building blocks they are made of.

mod any_auth;
mod auth;
pub mod authorizers;
pub mod cookie;
mod excluded_paths;
pub mod extract;
pub mod header;
pub mod user;

pub use any_auth::AnyAuth;
pub use auth::{Auth, NoAuth};
pub use authorizers::{basic_auth, session_auth};
pub use excluded_paths::{require_auth, ExcludedPaths};

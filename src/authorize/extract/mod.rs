mod authorized;
mod sealed_authorized;

pub use authorized::Authorized;
pub use sealed_authorized::SealedAuthorized;

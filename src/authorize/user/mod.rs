//! Contract of the user store the strategies resolve identities against.

mod auth_user;
mod impls;
mod user_store;

pub use auth_user::AuthUser;
pub use impls::{in_memory_user_store::InMemoryUserStore, simple_user::SimpleUser};
pub use user_store::UserStore;

#[cfg(test)]
pub use user_store::MockUserStore;

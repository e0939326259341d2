mod impls;
mod session_store;

pub use impls::{
    in_memory_session_store::InMemorySessionStore, session_auth::SessionAuth,
    session_id::SessionId,
};
pub use session_store::SessionStore;

pub mod in_memory_session_store;
pub mod session_auth;
pub mod session_id;

pub mod in_memory_user_store;
pub mod simple_user;

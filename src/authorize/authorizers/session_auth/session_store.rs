use std::future::Future;

use super::impls::session_id::SessionId;

/// Owner of the session id to user id mapping.
///
/// Implementations must be safe to share between concurrent requests:
/// each session id maps to exactly one user id and no insert is lost.
pub trait SessionStore {
    fn insert(&self, session_id: SessionId, user_id: String) -> impl Future<Output = ()> + Send;

    fn user_id(&self, session_id: &str) -> impl Future<Output = Option<String>> + Send;

    /// Returns the user id the removed session belonged to.
    fn remove(&self, session_id: &str) -> impl Future<Output = Option<String>> + Send;
}

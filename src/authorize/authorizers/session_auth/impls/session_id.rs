use std::borrow::Borrow;

use uuid::Uuid;

/// Opaque, randomly generated session identifier in UUID format.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Random (v4) UUID. Collisions are not checked for.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionId").field(&"...").finish()
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `SessionId` be queried with a `&str`.
impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<SessionId> for String {
    fn from(value: SessionId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_a_hyphenated_uuid() {
        let session_id = SessionId::new();

        let parsed = Uuid::parse_str(session_id.as_str()).expect("valid uuid");

        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(session_id.as_str(), parsed.hyphenated().to_string());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn debug_hides_value() {
        let session_id = SessionId::new();

        assert!(!format!("{session_id:?}").contains(session_id.as_str()));
    }
}

//! SessionState - Session Context State
//!
//! Opaque session context established by the app shell and readable by every
//! descendant view. Token storage and refresh live behind the auth service
//! boundary; the shell only exposes the current status.

/// Authentication status of the current session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Session is being established
    #[default]
    Loading,
    /// A user is signed in
    Authenticated {
        /// Display name of the signed-in user
        user: String,
    },
    /// No user is signed in
    Unauthenticated,
}

/// State for the session context
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub status: SessionStatus,
}

impl SessionState {
    pub fn set_status(&mut self, status: SessionStatus) {
        self.status = status;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated { .. })
    }

    /// Display name of the signed-in user, if any
    pub fn user(&self) -> Option<&str> {
        match &self.status {
            SessionStatus::Authenticated { user } => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state = SessionState::default();
        assert_eq!(state.status, SessionStatus::Loading);
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn test_authenticated_user() {
        let mut state = SessionState::default();
        state.set_status(SessionStatus::Authenticated {
            user: "ada".to_string(),
        });
        assert!(state.is_authenticated());
        assert_eq!(state.user(), Some("ada"));
    }
}

//! Session types and the auth provider seam.
//!
//! The session is an explicitly passed handle, not ambient global state:
//! the manager asks its `AuthProvider` before every protected action, and
//! an absent session fails that action with `SessionExpired`.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// An authenticated user session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Source of the current session. Store access is implicitly scoped to it.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The current session, or `None` if signed out / expired.
    async fn current_session(&self) -> Option<Session>;

    /// End the current session.
    async fn sign_out(&self) -> Result<()>;
}

/// An auth provider holding a fixed session in memory. Suitable for tests
/// and single-user embedding; `sign_out` clears the session.
#[derive(Default)]
pub struct StaticAuth {
    session: RwLock<Option<Session>>,
}

impl StaticAuth {
    /// Signed-in provider.
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    /// Signed-out provider.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Replace the current session (a fresh sign-in).
    pub async fn sign_in(&self, session: Session) {
        *self.session.write().await = Some(session);
    }
}

#[async_trait]
impl AuthProvider for StaticAuth {
    async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    async fn sign_out(&self) -> Result<()> {
        *self.session.write().await = None;
        Ok(())
    }
}

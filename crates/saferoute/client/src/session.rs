//! Auth collaborator seam.

use saferoute_types::User;
use tokio::sync::watch;
use tracing::info;

use crate::error::{ClientError, ClientResult};

/// Who is signed in right now, as reported by the auth collaborator.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;

    /// The signed-in user, or `Unauthenticated`.
    fn require_user(&self) -> ClientResult<User> {
        self.current_user().ok_or(ClientError::Unauthenticated)
    }
}

/// Process-local session holder.
#[derive(Debug)]
pub struct LocalSession {
    user: watch::Sender<Option<User>>,
}

impl LocalSession {
    pub fn signed_out() -> Self {
        let (user, _) = watch::channel(None);
        Self { user }
    }

    pub fn signed_in(user: User) -> Self {
        let (user, _) = watch::channel(Some(user));
        Self { user }
    }

    pub fn sign_in(&self, user: User) {
        info!(user_id = %user.id, "User signed in");
        self.user.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        if let Some(user) = self.user.send_replace(None) {
            info!(user_id = %user.id, "User signed out");
        }
    }

    /// Watch sign-in and sign-out.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user.subscribe()
    }
}

impl Default for LocalSession {
    fn default() -> Self {
        Self::signed_out()
    }
}

impl SessionProvider for LocalSession {
    fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_sign_in_and_out() {
        let session = LocalSession::default();
        assert!(matches!(
            session.require_user(),
            Err(ClientError::Unauthenticated)
        ));

        let user = User::new("Sam Lee", "sam@example.com", Utc::now());
        session.sign_in(user.clone());
        assert_eq!(session.require_user().unwrap(), user);

        session.sign_out();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let session = LocalSession::default();
        let mut receiver = session.subscribe();

        session.sign_in(User::new("Sam Lee", "sam@example.com", Utc::now()));

        assert!(receiver.has_changed().unwrap());
        assert!(receiver.borrow_and_update().is_some());
    }
}

//! # Session state
//!
//! [`Session`] is the client's view of who is signed in: an optional bearer
//! token and an optional role. `is_authenticated` is derived from the token,
//! so "authenticated without a token" cannot be represented.
//!
//! A session is created once at application start from whatever the
//! [`CredentialStore`] holds ([`Session::restore`]) and then mutated only by
//! [`Session::set_credentials`] (successful login) and [`Session::log_out`].
//! Both take the credential store explicitly; there is no global instance.

use crate::credentials::{CredentialStore, KeyValueStore};

/// The only role allowed into the admin console.
pub const ADMIN_ROLE: &str = "ADMIN";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role: Option<String>,
}

impl Session {
    /// An unauthenticated session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Initialize from durable storage.
    pub fn restore<S: KeyValueStore>(credentials: &CredentialStore<S>) -> Self {
        match credentials.load() {
            Some(stored) => Self {
                token: Some(stored.token),
                role: stored.role,
            },
            None => Self::anonymous(),
        }
    }

    /// Record a successful login and persist it.
    pub fn set_credentials<S: KeyValueStore>(
        &mut self,
        credentials: &CredentialStore<S>,
        token: String,
        role: String,
    ) {
        credentials.save(&token, &role);
        tracing::info!(role = %role, "session established");
        self.token = Some(token);
        self.role = Some(role);
    }

    /// Drop the session and wipe all durable client state. Idempotent.
    pub fn log_out<S: KeyValueStore>(&mut self, credentials: &CredentialStore<S>) {
        if self.token.is_some() {
            tracing::info!("session cleared");
        }
        self.token = None;
        self.role = None;
        credentials.clear_all();
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(ADMIN_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyValueStore, MemoryStore};

    fn credentials() -> CredentialStore<MemoryStore> {
        CredentialStore::new(MemoryStore::new())
    }

    #[test]
    fn test_restore_empty_store() {
        let session = Session::restore(&credentials());
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.role().is_none());
    }

    #[test]
    fn test_restore_after_reload() {
        let creds = credentials();
        let mut session = Session::anonymous();
        session.set_credentials(&creds, "tok".into(), "ADMIN".into());

        // A fresh process reads the same store
        let restored = Session::restore(&creds);
        assert_eq!(restored, session);
        assert!(restored.is_authenticated());
        assert!(restored.is_admin());
    }

    #[test]
    fn test_restore_token_without_role() {
        let creds = credentials();
        creds.inner().set("token", "tok");

        let session = Session::restore(&creds);
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_log_out_is_idempotent_and_wipes_storage() {
        let creds = credentials();
        creds.inner().set("unrelated", "value");
        let mut session = Session::anonymous();
        session.set_credentials(&creds, "tok".into(), "ADMIN".into());

        session.log_out(&creds);
        let once = session.clone();
        session.log_out(&creds);

        assert_eq!(session, once);
        assert_eq!(session, Session::anonymous());
        assert!(!session.is_authenticated());
        assert!(creds.inner().is_empty());
    }

    #[test]
    fn test_non_admin_role_is_authenticated_but_not_admin() {
        let creds = credentials();
        let mut session = Session::anonymous();
        session.set_credentials(&creds, "tok".into(), "USER".into());

        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.role(), Some("USER"));
    }
}

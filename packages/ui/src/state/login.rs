use api::{AdminBackend, LoginRequest};
use store::ADMIN_ROLE;

pub const ACCESS_DENIED: &str = "Access Denied. Admin privileges required.";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Admin credentials; the caller stores them in the session.
    Granted { token: String, role: String },
    /// Shown inline on the form. The session is left untouched.
    Denied(String),
}

/// Submit credentials and apply the admin-role rule.
///
/// A valid login for any role other than `ADMIN` is refused here, before the
/// token ever reaches the session.
pub async fn authenticate<B: AdminBackend>(
    backend: &B,
    email: &str,
    password: &str,
) -> LoginOutcome {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    match backend.login(&request).await {
        Ok(response) if response.role == ADMIN_ROLE => LoginOutcome::Granted {
            token: response.token,
            role: response.role,
        },
        Ok(response) => {
            tracing::warn!(role = %response.role, "refusing non-admin login");
            LoginOutcome::Denied(ACCESS_DENIED.to_string())
        }
        Err(e) => {
            tracing::warn!("login failed: {e}");
            LoginOutcome::Denied(e.message_or(LOGIN_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fake::FakeBackend;
    use store::{CredentialStore, MemoryStore, Session};

    #[tokio::test]
    async fn test_admin_is_granted() {
        let backend = FakeBackend::with_role("ADMIN");
        let outcome = authenticate(&backend, "admin@example.com", "pw").await;
        let LoginOutcome::Granted { token, role } = outcome else {
            panic!("expected admin to be granted");
        };

        let credentials = CredentialStore::new(MemoryStore::new());
        let mut session = Session::anonymous();
        session.set_credentials(&credentials, token, role);
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert_eq!(credentials.load().map(|c| c.token), Some("fake-token".into()));
    }

    #[tokio::test]
    async fn test_non_admin_is_denied() {
        let backend = FakeBackend::with_role("USER");
        let outcome = authenticate(&backend, "user@example.com", "pw").await;
        assert_eq!(outcome, LoginOutcome::Denied(ACCESS_DENIED.to_string()));
    }

    #[tokio::test]
    async fn test_server_message_is_shown() {
        let backend = FakeBackend::with_role("ADMIN");
        backend.fail("login", 401, Some("Invalid credentials"));
        let outcome = authenticate(&backend, "admin@example.com", "wrong").await;
        assert_eq!(outcome, LoginOutcome::Denied("Invalid credentials".to_string()));
    }

    #[tokio::test]
    async fn test_fallback_message_without_body() {
        let backend = FakeBackend::with_role("ADMIN");
        backend.fail("login", 500, None);
        let outcome = authenticate(&backend, "admin@example.com", "pw").await;
        assert_eq!(outcome, LoginOutcome::Denied(LOGIN_FAILED.to_string()));
    }
}

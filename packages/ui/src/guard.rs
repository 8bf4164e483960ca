//! Access rule for the protected part of the console.

use store::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allowed,
    /// Send the visitor to the login screen.
    Blocked,
}

/// Only an authenticated session with the `ADMIN` role gets in.
pub fn evaluate(session: &Session) -> Access {
    if session.is_authenticated() && session.is_admin() {
        Access::Allowed
    } else {
        Access::Blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{CredentialStore, MemoryStore};

    fn session(token: Option<&str>, role: Option<&str>) -> Session {
        let credentials = CredentialStore::new(MemoryStore::new());
        if let Some(token) = token {
            credentials.save(token, role.unwrap_or(""));
        }
        Session::restore(&credentials)
    }

    #[test]
    fn test_access_table() {
        let cases = [
            (None, None, Access::Blocked),
            (None, Some("ADMIN"), Access::Blocked),
            (Some("t"), Some("ADMIN"), Access::Allowed),
            (Some("t"), Some("USER"), Access::Blocked),
            (Some("t"), Some("admin"), Access::Blocked),
            (Some("t"), None, Access::Blocked),
        ];
        for (token, role, expected) in cases {
            assert_eq!(
                evaluate(&session(token, role)),
                expected,
                "token={token:?} role={role:?}"
            );
        }
    }

    #[test]
    fn test_logout_blocks_again() {
        let credentials = CredentialStore::new(MemoryStore::new());
        let mut session = Session::anonymous();
        session.set_credentials(&credentials, "t".into(), "ADMIN".into());
        assert_eq!(evaluate(&session), Access::Allowed);

        session.log_out(&credentials);
        assert_eq!(evaluate(&session), Access::Blocked);
    }
}

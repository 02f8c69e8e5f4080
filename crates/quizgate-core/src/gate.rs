//! Session gate.
//!
//! Compares a login attempt against one static credential pair. There is no
//! hashing, lockout, or rate limiting; every attempt is independent.

use crate::{error::GateError, session::Session};

/// Default username accepted by the gate.
pub const DEFAULT_USERNAME: &str = "student";

/// Default password accepted by the gate.
pub const DEFAULT_PASSWORD: &str = "password";

/// Static username/password pair.
///
/// # Security
///
/// - **Debug Redaction**: The `Debug` impl redacts `password` so the
///   credential can be logged with the rest of the configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    /// Create a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Accepted username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact string equality on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &format_args!("<redacted {} bytes>", self.password.len()))
            .finish()
    }
}

/// Gate in front of the quiz view.
#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    credential: Credential,
}

impl SessionGate {
    /// Create a gate accepting `credential`.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// The accepted credential.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Authenticate `session` if both fields match.
    ///
    /// On failure the session is left untouched.
    pub fn attempt_login(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<(), GateError> {
        if !self.credential.matches(username, password) {
            tracing::debug!(username, "login rejected");
            return Err(GateError::InvalidCredentials);
        }

        session.authenticate();
        tracing::info!(username, "login accepted");
        Ok(())
    }

    /// End an authenticated session. Returns whether anything changed.
    pub fn logout(&self, session: &mut Session) -> bool {
        let was_authenticated = session.is_authenticated();
        session.revoke();
        was_authenticated
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn default_credential_logs_in() {
        let gate = SessionGate::default();
        let mut session = Session::new();

        gate.attempt_login(&mut session, "student", "password").unwrap();
        assert!(session.is_authenticated());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let gate = SessionGate::default();
        let mut session = Session::new();

        let result = gate.attempt_login(&mut session, "student", "Password");
        assert_eq!(result, Err(GateError::InvalidCredentials));
        assert_eq!(session, Session::new());
    }

    #[test]
    fn fields_are_not_trimmed() {
        let gate = SessionGate::default();
        let mut session = Session::new();

        assert!(gate.attempt_login(&mut session, "student ", "password").is_err());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn retries_are_unlimited() {
        let gate = SessionGate::default();
        let mut session = Session::new();

        for _ in 0..100 {
            assert!(gate.attempt_login(&mut session, "student", "nope").is_err());
        }
        gate.attempt_login(&mut session, "student", "password").unwrap();
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_keeps_warnings() {
        let gate = SessionGate::default();
        let mut session = Session::new();
        gate.attempt_login(&mut session, "student", "password").unwrap();
        session.record_warning();

        assert!(gate.logout(&mut session));
        assert!(!gate.logout(&mut session));
        assert!(!session.is_authenticated());
        assert_eq!(session.warning_count(), 1);
    }

    #[test]
    fn debug_redacts_password() {
        let credential = Credential::new("student", "hunter2");
        insta::assert_snapshot!(
            format!("{credential:?}"),
            @r#"Credential { username: "student", password: <redacted 7 bytes> }"#
        );
    }

    proptest! {
        #[test]
        fn any_other_pair_is_rejected(username in ".{0,12}", password in ".{0,12}") {
            prop_assume!(username != DEFAULT_USERNAME || password != DEFAULT_PASSWORD);

            let gate = SessionGate::default();
            let mut session = Session::new();

            prop_assert_eq!(
                gate.attempt_login(&mut session, &username, &password),
                Err(GateError::InvalidCredentials)
            );
            prop_assert!(!session.is_authenticated());
        }
    }
}

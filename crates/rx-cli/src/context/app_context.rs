use anyhow::Context;
use rx_auth::{CredentialSet, Session, SessionStore};
use rx_config::RxConfig;
use rx_core::FactStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: RxConfig,
    pub store: &'static FactStore,
    pub credentials: CredentialSet,
    pub sessions: SessionStore,
}

impl AppContext {
    /// Build the context from loaded configuration.
    pub fn init(config: RxConfig) -> anyhow::Result<Self> {
        let sessions =
            SessionStore::default_location().context("failed to locate the session store")?;
        Ok(Self::with_sessions(config, sessions))
    }

    /// Build the context with an explicit session store location.
    #[must_use]
    pub fn with_sessions(config: RxConfig, sessions: SessionStore) -> Self {
        let credentials = CredentialSet::from_config(&config.auth);
        let store = FactStore::global();
        tracing::debug!(
            facts = store.len(),
            session_path = %sessions.path().display(),
            "application context ready"
        );
        Self {
            config,
            store,
            credentials,
            sessions,
        }
    }

    /// Gate for commands that reach the matcher.
    pub fn require_session(&self) -> anyhow::Result<Session> {
        let session = rx_auth::require_session(&self.sessions, &self.credentials)?;
        tracing::debug!(email = %session.email, "session accepted");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use rx_auth::{AuthError, Session, SessionStore};
    use rx_config::RxConfig;

    use super::AppContext;

    fn config_with(emails: &str, passwords: &str) -> RxConfig {
        let mut config = RxConfig::default();
        config.auth.user_emails = emails.into();
        config.auth.user_passwords = passwords.into();
        config
    }

    #[test]
    fn gate_refuses_without_stored_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = AppContext::with_sessions(
            config_with("a@b.co", "pw"),
            SessionStore::in_dir(dir.path()),
        );
        let error = ctx.require_session().expect_err("no session stored");
        assert!(matches!(
            error.downcast_ref::<AuthError>(),
            Some(AuthError::NotAuthenticated)
        ));
    }

    #[test]
    fn gate_accepts_stored_session_for_listed_email() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = AppContext::with_sessions(
            config_with("a@b.co", "pw"),
            SessionStore::in_dir(dir.path()),
        );
        let session = Session::start("a@b.co").expect("session");
        ctx.sessions.save(&session).expect("save");
        assert_eq!(ctx.require_session().expect("gate").email, "a@b.co");
    }

    #[test]
    fn gate_refuses_session_whose_email_was_removed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sessions = SessionStore::in_dir(dir.path());
        sessions
            .save(&Session::start("old@b.co").expect("session"))
            .expect("save");

        let ctx = AppContext::with_sessions(config_with("a@b.co", "pw"), sessions);
        let error = ctx.require_session().expect_err("revoked");
        assert!(matches!(
            error.downcast_ref::<AuthError>(),
            Some(AuthError::SessionRevoked(email)) if email == "old@b.co"
        ));
    }
}

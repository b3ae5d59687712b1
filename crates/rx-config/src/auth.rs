//! Credential lists for the login gate.

use serde::{Deserialize, Serialize};

/// Comma-separated email and password lists, paired by position.
///
/// Usually supplied as `USER_EMAILS` / `USER_PASSWORDS` (or
/// `RXCHECK_AUTH__USER_EMAILS` / `RXCHECK_AUTH__USER_PASSWORDS`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub user_emails: String,

    #[serde(default)]
    pub user_passwords: String,
}

impl AuthConfig {
    /// Whether at least one email is listed.
    pub fn is_configured(&self) -> bool {
        self.user_emails.split(',').any(|email| !email.trim().is_empty())
    }
}

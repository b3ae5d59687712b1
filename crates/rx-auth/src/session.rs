use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    /// Random 128-bit hex token identifying the session.
    pub token: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for `email` with a fresh random token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenGeneration` if the OS random source fails.
    pub fn start(email: &str) -> Result<Self, AuthError> {
        Ok(Self {
            email: email.trim().to_string(),
            token: random_token()?,
            logged_in_at: Utc::now(),
        })
    }
}

fn random_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes).map_err(|e| AuthError::TokenGeneration(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_hex_and_distinct() {
        let first = Session::start("a@x.io").unwrap();
        let second = Session::start("a@x.io").unwrap();
        assert_eq!(first.token.len(), 32);
        assert!(first.token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first.token, second.token);
    }

    #[test]
    fn email_is_trimmed() {
        assert_eq!(Session::start("  a@x.io ").unwrap().email, "a@x.io");
    }
}

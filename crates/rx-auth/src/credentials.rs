//! Email/password pairs supplied through configuration.

use rx_config::AuthConfig;

use crate::email::is_valid_email;
use crate::error::LoginError;

/// Allowed logins. The i-th email owns the i-th password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    emails: Vec<String>,
    passwords: Vec<String>,
}

impl CredentialSet {
    /// Parse comma-separated lists. Items are trimmed; positions are kept so
    /// pairing survives blank entries.
    #[must_use]
    pub fn from_lists(emails: &str, passwords: &str) -> Self {
        let split = |list: &str| -> Vec<String> {
            if list.trim().is_empty() {
                return Vec::new();
            }
            list.split(',').map(|item| item.trim().to_string()).collect()
        };
        let set = Self {
            emails: split(emails),
            passwords: split(passwords),
        };
        if set.emails.len() != set.passwords.len() {
            tracing::warn!(
                emails = set.emails.len(),
                passwords = set.passwords.len(),
                "credential lists differ in length; unpaired emails cannot log in"
            );
        }
        set
    }

    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::from_lists(&config.user_emails, &config.user_passwords)
    }

    /// Whether no usable email is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.iter().all(String::is_empty)
    }

    /// Whether `email` is listed.
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        let email = email.trim();
        !email.is_empty() && self.emails.iter().any(|listed| listed == email)
    }

    /// Check a login attempt.
    ///
    /// Checks run in a fixed order so the first problem a user can fix is the
    /// one reported: missing fields, email shape, unknown email, password.
    ///
    /// # Errors
    ///
    /// Returns the [`LoginError`] describing the first failed check.
    pub fn verify(&self, email: &str, password: &str) -> Result<(), LoginError> {
        let email = email.trim();
        match (email.is_empty(), password.is_empty()) {
            (true, true) => return Err(LoginError::MissingBoth),
            (true, false) => return Err(LoginError::MissingEmail),
            (false, true) => return Err(LoginError::MissingPassword),
            (false, false) => {}
        }

        if !is_valid_email(email) {
            return Err(LoginError::MalformedEmail);
        }

        let Some(index) = self.emails.iter().position(|listed| listed == email) else {
            return Err(LoginError::UnknownEmail);
        };

        match self.passwords.get(index) {
            Some(expected) if expected == password => Ok(()),
            _ => Err(LoginError::WrongPassword),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn creds() -> CredentialSet {
        CredentialSet::from_lists(
            "nurse@example.com, doc@example.com,lonely@example.com",
            "s3cret, hunter2",
        )
    }

    #[rstest]
    #[case("", "", LoginError::MissingBoth)]
    #[case("  ", "pw", LoginError::MissingEmail)]
    #[case("nurse@example.com", "", LoginError::MissingPassword)]
    #[case("nurse.example.com", "pw", LoginError::MalformedEmail)]
    #[case("stranger@example.com", "pw", LoginError::UnknownEmail)]
    #[case("nurse@example.com", "hunter2", LoginError::WrongPassword)]
    #[case("lonely@example.com", "anything", LoginError::WrongPassword)]
    fn rejections(#[case] email: &str, #[case] password: &str, #[case] expected: LoginError) {
        assert_eq!(creds().verify(email, password), Err(expected));
    }

    #[test]
    fn positional_pairing() {
        let creds = creds();
        assert_eq!(creds.verify("nurse@example.com", "s3cret"), Ok(()));
        assert_eq!(creds.verify(" doc@example.com ", "hunter2"), Ok(()));
    }

    #[test]
    fn first_listed_duplicate_wins() {
        let creds = CredentialSet::from_lists("a@x.io,a@x.io", "one,two");
        assert_eq!(creds.verify("a@x.io", "one"), Ok(()));
        assert_eq!(creds.verify("a@x.io", "two"), Err(LoginError::WrongPassword));
    }

    #[test]
    fn blank_entries_keep_positions() {
        let creds = CredentialSet::from_lists(",b@x.io", "pa,pb");
        assert_eq!(creds.verify("b@x.io", "pb"), Ok(()));
    }

    #[test]
    fn empty_lists() {
        let creds = CredentialSet::from_lists("", "");
        assert!(creds.is_empty());
        assert!(!creds.contains(""));
        assert_eq!(
            creds.verify("a@x.io", "pw"),
            Err(LoginError::UnknownEmail)
        );
    }

    #[test]
    fn messages_match_user_facing_text() {
        assert_eq!(
            LoginError::MissingBoth.to_string(),
            "Both email and password fields must be filled!"
        );
        assert_eq!(LoginError::UnknownEmail.to_string(), "Invalid email address");
        assert_eq!(LoginError::WrongPassword.to_string(), "Invalid credentials");
    }
}

//! # rx-auth
//!
//! Login gate for rxcheck.
//!
//! Users authenticate against email/password lists supplied through
//! configuration (`USER_EMAILS` / `USER_PASSWORDS`). A successful login yields
//! a [`Session`]; the CLI persists it with [`SessionStore`] and every command
//! that reaches the matcher calls [`require_session`] first.

pub mod credentials;
pub mod email;
pub mod error;
pub mod session;
pub mod session_store;

pub use credentials::CredentialSet;
pub use email::is_valid_email;
pub use error::{AuthError, LoginError};
pub use session::Session;
pub use session_store::SessionStore;

/// Verify credentials and start a session.
///
/// # Errors
///
/// Returns `AuthError::Login` with the user-facing reason when the attempt is
/// refused, or `AuthError::TokenGeneration` if no token can be minted.
pub fn login(credentials: &CredentialSet, email: &str, password: &str) -> Result<Session, AuthError> {
    credentials.verify(email, password)?;
    let session = Session::start(email)?;
    tracing::info!(email = %session.email, "login successful");
    Ok(session)
}

/// Load the stored session and confirm its email is still allowed.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` when no session is stored,
/// `AuthError::SessionRevoked` when its email was removed from the credential
/// list, or `AuthError::SessionStoreError` if the file cannot be read.
pub fn require_session(
    store: &SessionStore,
    credentials: &CredentialSet,
) -> Result<Session, AuthError> {
    let session = store.load()?.ok_or(AuthError::NotAuthenticated)?;
    if !credentials.contains(&session.email) {
        return Err(AuthError::SessionRevoked(session.email));
    }
    Ok(session)
}

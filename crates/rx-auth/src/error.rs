use thiserror::Error;

/// Reasons a login attempt is refused. Messages are shown to users verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Both email and password fields must be filled!")]
    MissingBoth,

    #[error("Please enter an email address.")]
    MissingEmail,

    #[error("Please enter a password.")]
    MissingPassword,

    #[error("Please enter a valid email address (e.g., example@gmail.com).")]
    MalformedEmail,

    #[error("Invalid email address")]
    UnknownEmail,

    #[error("Invalid credentials")]
    WrongPassword,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in; run `rxc auth login`")]
    NotAuthenticated,

    #[error("session for {0} is no longer valid; run `rxc auth login`")]
    SessionRevoked(String),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error("session store error: {0}")]
    SessionStoreError(String),

    #[error("failed to generate session token: {0}")]
    TokenGeneration(String),
}

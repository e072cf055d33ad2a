use thiserror::Error;

/// Why a request was refused. Only ever logged; clients see a generic
/// denial so the reasons cannot be used to enumerate accounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("Unable to find the auth header")]
    MissingCredentials,
    #[error("Unable to find username: {0}")]
    UnknownUser(String),
    #[error("Authentication failed for username: {0}")]
    BadPassword(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome<U> {
    Authenticated(U),
    Denied(AuthFailure),
}

impl<U> AuthOutcome<U> {
    pub fn into_result(self) -> Result<U, AuthFailure> {
        match self {
            AuthOutcome::Authenticated(user) => Ok(user),
            AuthOutcome::Denied(failure) => Err(failure),
        }
    }
}

impl<U> From<AuthFailure> for AuthOutcome<U> {
    fn from(failure: AuthFailure) -> Self {
        AuthOutcome::Denied(failure)
    }
}

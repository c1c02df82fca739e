//! Error types for port operations.

/// Player store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Nothing is stored under the token.
    #[error("No player record for token {0}")]
    MissingRecord(String),

    /// A record exists but does not decode into a valid player.
    #[error("Player record {token} is unreadable: {reason}")]
    Unreadable { token: String, reason: String },
}

impl RepoError {
    pub fn unreadable(token: &str, reason: impl ToString) -> Self {
        Self::Unreadable {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Combat resolver failures. None of these leave a safe partial state.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolverError {
    #[error("Combat resolver request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid combat resolver response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum InterpreterError {
    #[error("Interpreter request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid interpreter response: {0}")]
    InvalidResponse(String),
}

//! Errors raised while turning wire records into domain snapshots.

use operator_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The payload was not valid JSON for the expected record.
    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The record decoded but breaks a domain invariant.
    #[error("Invalid record: {0}")]
    Invalid(#[from] DomainError),

    /// A function-invocation envelope reported a failure status.
    #[error("Remote call returned status {status_code}: {body}")]
    RemoteStatus { status_code: u16, body: String },
}

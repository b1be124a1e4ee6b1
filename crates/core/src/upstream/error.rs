use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies which of the three upstream lookups a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamKind {
    PersonalDetails,
    ContactDetails,
    ComplianceForm,
}

impl fmt::Display for UpstreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpstreamKind::PersonalDetails => "personal details",
            UpstreamKind::ContactDetails => "contact details",
            UpstreamKind::ComplianceForm => "compliance form",
        };
        f.write_str(name)
    }
}

/// Transport-level failures talking to an upstream provider.
///
/// An explicit "not found" is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("{kind} request timed out")]
    Timeout { kind: UpstreamKind },
    #[error("{kind} connection failed: {message}")]
    ConnectionFailed { kind: UpstreamKind, message: String },
    #[error("{kind} returned status {status}")]
    UnexpectedStatus { kind: UpstreamKind, status: u16 },
    #[error("{kind} returned an invalid payload: {message}")]
    InvalidPayload { kind: UpstreamKind, message: String },
}

impl UpstreamError {
    /// Returns which upstream lookup failed.
    pub fn kind(&self) -> UpstreamKind {
        match self {
            UpstreamError::Timeout { kind }
            | UpstreamError::ConnectionFailed { kind, .. }
            | UpstreamError::UnexpectedStatus { kind, .. }
            | UpstreamError::InvalidPayload { kind, .. } => *kind,
        }
    }
}

/// Result type for upstream operations.
pub type Result<T> = std::result::Result<T, UpstreamError>;

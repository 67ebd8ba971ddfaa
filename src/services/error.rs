use std::fmt;
use thiserror::Error;

/// Which upstream collaborator an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamService {
    Users,
    Preferences,
}

impl fmt::Display for UpstreamService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamService::Users => write!(f, "Users"),
            UpstreamService::Preferences => write!(f, "Preferences"),
        }
    }
}

/// Errors from calls to the Users or Preferences services.
///
/// `Status` carries the upstream HTTP status and body text for
/// debuggability; `Transport` covers connection refusals and timeouts,
/// where no upstream status exists.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{service} service error ({status}): {body}")]
    Status {
        service: UpstreamService,
        status: u16,
        body: String,
    },

    #[error("{service} service unreachable: {message}")]
    Transport {
        service: UpstreamService,
        message: String,
    },

    #[error("{service} service returned an unreadable body: {message}")]
    Decode {
        service: UpstreamService,
        message: String,
    },
}

impl UpstreamError {
    pub fn transport(service: UpstreamService, err: reqwest::Error) -> Self {
        UpstreamError::Transport {
            service,
            message: err.to_string(),
        }
    }

    pub fn decode(service: UpstreamService, err: reqwest::Error) -> Self {
        UpstreamError::Decode {
            service,
            message: err.to_string(),
        }
    }

    /// The upstream HTTP status, when the upstream answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn service(&self) -> UpstreamService {
        match self {
            UpstreamError::Status { service, .. }
            | UpstreamError::Transport { service, .. }
            | UpstreamError::Decode { service, .. } => *service,
        }
    }
}

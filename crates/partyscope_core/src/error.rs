//! Error taxonomy for remote query operations.
//!
//! Every failure a query operation can produce is one of the five kinds
//! below, and every one of them is converted into the error variant of
//! [`crate::Outcome`] before it reaches a caller. The `Display` form is the
//! bare human-readable message with no kind prefix: callers distinguish
//! failure origin only by message text, while the kind stays available
//! programmatically through [`ToolError::kind`].

use std::fmt;

/// Result type for query operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Classified failure of a single query operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Caller input malformed; rejected before any network access
    Validation {
        /// What the caller got wrong
        message: String,
    },

    /// Remote answered with a non-2xx status
    RemoteHttp {
        /// HTTP status code of the response
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// No response received (connection refused, DNS failure, timeout)
    RemoteTransport {
        /// Description of the underlying transport fault
        message: String,
    },

    /// Response received, but the remote flagged an application-level failure
    RemoteBusiness {
        /// Message reported by the remote service
        message: String,
    },

    /// Any other unexpected fault, including malformed response bodies
    Internal {
        /// String representation of the fault
        message: String,
    },
}

impl ToolError {
    /// Validation failure with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Unexpected internal failure with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RemoteHttp { .. } => ErrorKind::RemoteHttp,
            Self::RemoteTransport { .. } => ErrorKind::RemoteTransport,
            Self::RemoteBusiness { .. } => ErrorKind::RemoteBusiness,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// The human-readable message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::RemoteHttp { message, .. }
            | Self::RemoteTransport { message }
            | Self::RemoteBusiness { message }
            | Self::Internal { message } => message,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ToolError {}

/// Discriminant of [`ToolError`], for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller input malformed
    Validation,
    /// Non-2xx HTTP status
    RemoteHttp,
    /// No response received
    RemoteTransport,
    /// Application-level failure flagged by the remote
    RemoteBusiness,
    /// Unexpected fault
    Internal,
}

impl ErrorKind {
    /// Stable lowercase name of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::RemoteHttp => "remote_http",
            Self::RemoteTransport => "remote_transport",
            Self::RemoteBusiness => "remote_business",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

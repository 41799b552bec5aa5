//! Shared error type across algometrics crates.

use thiserror::Error;

/// Stable error codes, independent of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Depth exit without a matching enter.
    UnbalancedExit,
    /// Invalid or rejected configuration.
    BadConfig,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// An instrumented algorithm produced a wrong result.
    Verification,
    /// Filesystem failure.
    Io,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnbalancedExit => "UNBALANCED_EXIT",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Verification => "VERIFICATION",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Unified error type used by core and bench.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("exit_recursion called at depth {depth} without a matching enter")]
    UnbalancedExit { depth: i32 },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error("verification failed: {0}")]
    Verification(String),
    #[error("io: {0}")]
    Io(String),
}

impl TrackerError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            TrackerError::UnbalancedExit { .. } => ErrorCode::UnbalancedExit,
            TrackerError::BadConfig(_) => ErrorCode::BadConfig,
            TrackerError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            TrackerError::Verification(_) => ErrorCode::Verification,
            TrackerError::Io(_) => ErrorCode::Io,
        }
    }
}

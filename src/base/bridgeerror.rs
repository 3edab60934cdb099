use thiserror::Error;

/// Errors surfaced across the bridge boundary.
///
/// Every variant maps to a short machine-readable code via [`BridgeError::code`]
/// and a human-readable message via `Display`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BridgeError {
    // Argument Errors
    #[error("Missing {name}")]
    MissingArgument { name: String },

    // Store Errors
    #[error("Cookie store unavailable: {reason}")]
    StoreUnavailable { reason: String },
    #[error("Cookie clear incomplete: {failed} of {total} deletions failed")]
    ClearIncomplete { failed: usize, total: usize },

    // Dispatch Errors
    #[error("Operation not implemented: {method}")]
    UnsupportedOperation { method: String },
}

impl BridgeError {
    pub const ARGUMENT_ERROR: &'static str = "ARGUMENT_ERROR";
    pub const STORE_UNAVAILABLE: &'static str = "STORE_UNAVAILABLE";
    pub const CLEAR_INCOMPLETE: &'static str = "CLEAR_INCOMPLETE";
    pub const NOT_IMPLEMENTED: &'static str = "NOT_IMPLEMENTED";

    /// Machine-readable code reported to the shell.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::MissingArgument { .. } => Self::ARGUMENT_ERROR,
            BridgeError::StoreUnavailable { .. } => Self::STORE_UNAVAILABLE,
            BridgeError::ClearIncomplete { .. } => Self::CLEAR_INCOMPLETE,
            BridgeError::UnsupportedOperation { .. } => Self::NOT_IMPLEMENTED,
        }
    }

    pub fn missing_argument(name: impl Into<String>) -> Self {
        BridgeError::MissingArgument { name: name.into() }
    }

    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        BridgeError::StoreUnavailable {
            reason: reason.into(),
        }
    }

    pub fn unsupported(method: impl Into<String>) -> Self {
        BridgeError::UnsupportedOperation {
            method: method.into(),
        }
    }

    pub fn is_argument_error(&self) -> bool {
        self.code() == Self::ARGUMENT_ERROR
    }
}

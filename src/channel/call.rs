//! Method call and result envelopes exchanged with the shell.

use crate::base::bridgeerror::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single method invocation from the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Call with no arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }

    /// Required string argument.
    pub fn required_str(&self, name: &str) -> Result<&str, BridgeError> {
        self.arguments
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| BridgeError::missing_argument(name))
    }

    /// Optional boolean argument. Anything other than a boolean, including a
    /// missing key, yields `default`.
    pub fn optional_bool(&self, name: &str, default: bool) -> bool {
        match self.arguments.get(name) {
            None | Some(Value::Null) => default,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                tracing::debug!(argument = %name, value = %other, "ignoring non-boolean argument");
                default
            }
        }
    }
}

/// Outcome of a method call as reported back to the shell.
///
/// `NotImplemented` is kept apart from `Error` so shells can detect a
/// bridge/version mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "camelCase")]
pub enum MethodResult {
    Success(Value),
    Error {
        code: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodResult {
    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success(_))
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            MethodResult::Error { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<BridgeError> for MethodResult {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::UnsupportedOperation { .. } => MethodResult::NotImplemented,
            other => MethodResult::Error {
                code: other.code().to_string(),
                message: other.to_string(),
                details: None,
            },
        }
    }
}

impl From<Result<Value, BridgeError>> for MethodResult {
    fn from(result: Result<Value, BridgeError>) -> Self {
        match result {
            Ok(value) => MethodResult::Success(value),
            Err(err) => err.into(),
        }
    }
}

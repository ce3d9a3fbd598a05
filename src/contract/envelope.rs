//! Uniform success/error response envelopes.
//!
//! The envelope is the only structured wire contract this layer owns.
//! Every orchestrator operation returns one; failures carry an error code
//! from the closed taxonomy below instead of crossing the module boundary
//! as an `Err` or a panic.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error codes carried by failure envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No request file is associated with the named clause.
    RequestNotFound,
    /// The engine failed while assembling or executing a clause request.
    ClauseExecutionFailed,
    /// The engine evaluated the request and explicitly refused it.
    ClauseExecutionDenied,
    /// Contract initialization failed before or inside the engine.
    ContractInitializationFailed,
    /// The freshly initialized state could not be written to disk.
    SaveStateError,
}

/// Response wrapper returned by every orchestrator operation.
///
/// Invariant: `error_code` (and `error`) are present exactly when
/// `success` is false; `content` is present exactly when it is true.
/// Build envelopes through [`Envelope::ok`] and [`Envelope::fail`], which
/// uphold this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// True when the operation completed and `content` holds its result.
    pub success: bool,
    /// Result payload of a successful operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    /// Error detail of a failed operation (message or rejection payload).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    /// Taxonomy code of a failed operation.
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
}

impl Envelope {
    /// Wrap a successful result.
    pub fn ok(content: Value) -> Self {
        Self {
            success: true,
            content: Some(content),
            error: None,
            error_code: None,
        }
    }

    /// Wrap a failure with its taxonomy code and the actual error detail.
    pub fn fail(code: ErrorCode, error: impl Into<Value>) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(error.into()),
            error_code: Some(code),
        }
    }

    /// Whether this envelope reports success.
    pub fn is_success(&self) -> bool {
        self.success
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

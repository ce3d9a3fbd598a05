//! Boundary to the external contract-execution engine.
//!
//! Contract parsing, clause evaluation and state-transition semantics all
//! belong to the engine collaborator, not to this crate. The orchestrator
//! reaches it through [`ContractEngine`], so deployments inject the real
//! engine and tests inject a scripted one.

mod template;

pub use template::{Clause, Template};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Outcome of a successful engine invocation: the updated contract state
/// plus the response payload for the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineResponse {
    /// New contract state to persist.
    pub state: Value,
    /// Response payload returned to the caller.
    pub response: Value,
}

/// Errors surfaced by the engine boundary.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The template handle could not be obtained.
    #[error("failed to load template: {0}")]
    Template(String),

    /// The engine evaluated the request and refused it.
    #[error("clause rejected the request: {reason}")]
    Rejected { reason: Value },

    /// Any other failure inside the engine.
    #[error("clause execution failed: {0}")]
    Execution(String),
}

/// Contract-execution engine collaborator.
#[async_trait]
pub trait ContractEngine: Send + Sync {
    /// Initialize a clause, producing the contract's starting state.
    async fn init(&self, clause: &Clause) -> Result<EngineResponse, EngineError>;

    /// Evaluate `request` against `clause` and the current `state`.
    async fn trigger(
        &self,
        clause: &Clause,
        request: &Value,
        state: &Value,
    ) -> Result<EngineResponse, EngineError>;
}

#[cfg(test)]
pub(crate) mod mock;

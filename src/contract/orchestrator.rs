//! Contract orchestration over the engine boundary.
//!
//! Loads the contract's on-disk artifacts, delegates initialization and
//! clause triggering to the injected engine, persists the updated state,
//! and normalizes every outcome into an [`Envelope`]. Neither operation
//! returns `Err`: filesystem, parse and engine failures all become
//! failure envelopes carrying the actual error detail.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::contract::config::ContractConfig;
use crate::contract::envelope::{Envelope, ErrorCode};
use crate::contract::store;
use crate::engine::{Clause, ContractEngine, EngineError, Template};

/// Drives a smart-legal-contract through the engine collaborator.
pub struct ContractOrchestrator {
    engine: Arc<dyn ContractEngine>,
    config: ContractConfig,
    /// Serializes read-modify-write cycles over the state file. Two
    /// overlapping calls would otherwise both read the same state and the
    /// later write would drop the earlier update.
    state_lock: Mutex<()>,
}

impl ContractOrchestrator {
    /// Create an orchestrator over `engine` and the given artifact layout.
    pub fn new(engine: Arc<dyn ContractEngine>, config: ContractConfig) -> Self {
        Self {
            engine,
            config,
            state_lock: Mutex::new(()),
        }
    }

    /// The artifact configuration this orchestrator operates on.
    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Initialize the contract from its static artifacts and store the
    /// generated state, unless `persist` is disabled.
    pub async fn init_contract(&self, persist: bool) -> Envelope {
        let data = match store::load_json(&self.config.data_path()) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Contract initialization failed: {}", e);
                return Envelope::fail(ErrorCode::ContractInitializationFailed, e.to_string());
            }
        };

        let clause = match self.build_clause(data).await {
            Ok(clause) => clause,
            Err(e) => {
                log::error!("Contract initialization failed: {}", e);
                return Envelope::fail(ErrorCode::ContractInitializationFailed, e.to_string());
            }
        };

        let _guard = self.state_lock.lock().await;

        match self.engine.init(&clause).await {
            Ok(res) => {
                if persist {
                    if let Err(e) = store::save_json(&self.config.state_path(), &res.state) {
                        log::error!("Writing state failed: {}", e);
                        return Envelope::fail(ErrorCode::SaveStateError, e.to_string());
                    }
                }
                Envelope::ok(res.response)
            }
            Err(e) => {
                log::error!("Contract initialization failed: {}", e);
                Envelope::fail(ErrorCode::ContractInitializationFailed, engine_error_detail(&e))
            }
        }
    }

    /// Trigger a named clause with its configured request payload and
    /// store the state change, unless `persist` is disabled.
    pub async fn make_request(&self, clause_name: &str, persist: bool) -> Envelope {
        let request_path = match self.config.request_path(clause_name) {
            Some(path) => path,
            None => {
                log::error!("No request associated to clause {}", clause_name);
                return Envelope::fail(
                    ErrorCode::RequestNotFound,
                    format!("no request associated to clause {}", clause_name),
                );
            }
        };

        let request = match store::load_json(&request_path) {
            Ok(request) => request,
            Err(e) => {
                log::error!("Request to contract failed: {}", e);
                return Envelope::fail(ErrorCode::ClauseExecutionFailed, e.to_string());
            }
        };

        let _guard = self.state_lock.lock().await;

        let state = match store::load_json(&self.config.state_path()) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Request to contract failed: {}", e);
                return Envelope::fail(ErrorCode::ClauseExecutionFailed, e.to_string());
            }
        };

        let data = match store::load_json(&self.config.data_path()) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Request to contract failed: {}", e);
                return Envelope::fail(ErrorCode::ClauseExecutionFailed, e.to_string());
            }
        };

        let clause = match self.build_clause(data).await {
            Ok(clause) => clause,
            Err(e) => {
                log::error!("Request to contract failed: {}", e);
                return Envelope::fail(ErrorCode::ClauseExecutionFailed, e.to_string());
            }
        };

        match self.engine.trigger(&clause, &request, &state).await {
            Ok(res) => {
                if persist {
                    // SAVE_STATE_ERROR is an initialization-only code; a
                    // failed write here is logged but the engine response
                    // is still returned.
                    if let Err(e) = store::save_json(&self.config.state_path(), &res.state) {
                        log::error!("Writing state failed: {}", e);
                    }
                }
                Envelope::ok(res.response)
            }
            Err(EngineError::Rejected { reason }) => {
                log::warn!("Clause {} denied the request", clause_name);
                Envelope::fail(ErrorCode::ClauseExecutionDenied, reason)
            }
            Err(e) => {
                log::error!("Request to contract failed: {}", e);
                Envelope::fail(ErrorCode::ClauseExecutionFailed, e.to_string())
            }
        }
    }

    /// Load the template and bind a clause with `data` injected, the same
    /// way for both operations.
    async fn build_clause(&self, data: Value) -> Result<Clause, EngineError> {
        let template = Template::from_directory(self.config.template_dir.clone()).await?;
        let mut clause = Clause::new(template);
        clause.set_data(data);
        Ok(clause)
    }
}

fn engine_error_detail(err: &EngineError) -> Value {
    match err {
        EngineError::Rejected { reason } => reason.clone(),
        other => Value::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

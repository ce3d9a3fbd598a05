//! Scripted engine used by orchestrator and scenario tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Clause, ContractEngine, EngineError, EngineResponse};

/// One recorded `trigger` invocation: the clause data plus the request and
/// state the orchestrator passed in.
#[derive(Debug, Clone)]
pub(crate) struct TriggerCall {
    pub data: Value,
    pub request: Value,
    pub state: Value,
}

/// Engine double returning scripted results and recording every call.
pub(crate) struct MockEngine {
    init_result: Result<EngineResponse, EngineError>,
    trigger_results: Mutex<VecDeque<Result<EngineResponse, EngineError>>>,
    pub init_calls: Mutex<Vec<Value>>,
    pub trigger_calls: Mutex<Vec<TriggerCall>>,
}

impl MockEngine {
    pub fn with_init(init_result: Result<EngineResponse, EngineError>) -> Self {
        Self {
            init_result,
            trigger_results: Mutex::new(VecDeque::new()),
            init_calls: Mutex::new(Vec::new()),
            trigger_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_triggers(results: Vec<Result<EngineResponse, EngineError>>) -> Self {
        Self {
            init_result: Ok(EngineResponse {
                state: json!({}),
                response: json!({}),
            }),
            trigger_results: Mutex::new(results.into()),
            init_calls: Mutex::new(Vec::new()),
            trigger_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ContractEngine for MockEngine {
    async fn init(&self, clause: &Clause) -> Result<EngineResponse, EngineError> {
        self.init_calls.lock().unwrap().push(clause.data().clone());
        self.init_result.clone()
    }

    async fn trigger(
        &self,
        clause: &Clause,
        request: &Value,
        state: &Value,
    ) -> Result<EngineResponse, EngineError> {
        self.trigger_calls.lock().unwrap().push(TriggerCall {
            data: clause.data().clone(),
            request: request.clone(),
            state: state.clone(),
        });
        self.trigger_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(EngineError::Execution("unscripted trigger".to_string())))
    }
}

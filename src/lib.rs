//! # slc-gateway
//!
//! HTTP gateway and orchestration layer for a smart-legal-contract
//! execution engine.
//!
//! The crate owns a deliberately thin slice of the system: it maps clause
//! names to on-disk request payloads, reads and writes the contract's
//! `state.json`/`data.json` artifacts, normalizes every outcome into a
//! uniform response envelope, and serves a small HTTP surface. Clause
//! evaluation and state-transition semantics live behind the
//! [`engine::ContractEngine`] trait and are supplied by the caller.

pub mod contract;
pub mod engine;
pub mod server;

pub use contract::{ContractConfig, ContractOrchestrator, Envelope, ErrorCode, StoreError};
pub use engine::{Clause, ContractEngine, EngineError, EngineResponse, Template};

/// Library version.
pub const VERSION: &str = "0.1.0";

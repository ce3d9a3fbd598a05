//! Smart-legal-contract orchestration layer.
//!
//! Everything between the HTTP surface and the execution engine lives
//! here: artifact configuration, on-disk JSON access, response envelopes,
//! and the orchestrator that ties them together.
//!
//! # Modules
//!
//! - [`envelope`] — uniform success/error response wrapper and error codes
//! - [`config`] — injected template directory and clause → request mapping
//! - [`store`] — on-disk JSON artifact loading and persistence
//! - [`orchestrator`] — the two public operations, [`ContractOrchestrator::init_contract`]
//!   and [`ContractOrchestrator::make_request`]

pub mod config;
pub mod envelope;
pub mod orchestrator;
pub mod store;

pub use config::ContractConfig;
pub use envelope::{Envelope, ErrorCode};
pub use orchestrator::ContractOrchestrator;
pub use store::StoreError;

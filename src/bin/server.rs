//! slc-gateway HTTP server binary.
//!
//! Starts the axum HTTP server that fronts the smart-legal-contract
//! gateway.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 3000)
//! - `ROLE` — deployment-role identifier returned by the greeting route
//! - `SLC_CONTRACT_DIR` — contract artifact directory
//!   (default: ./contracts/refrigerated-transportation)
//! - `RUST_LOG` — tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use slc_gateway::server::{app_router, AppState};
use slc_gateway::ContractConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,slc_gateway=debug".into()),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    // Startup sanity log for the contract artifacts the orchestrator
    // would be pointed at.
    let contract_dir = std::env::var("SLC_CONTRACT_DIR")
        .unwrap_or_else(|_| "./contracts/refrigerated-transportation".to_string());
    let config = ContractConfig::new(contract_dir);
    if config.template_dir.is_dir() {
        tracing::info!(
            "contract artifacts at {} ({} clauses mapped)",
            config.template_dir.display(),
            config.requests.len()
        );
    } else {
        tracing::warn!(
            "contract artifact directory {} does not exist",
            config.template_dir.display()
        );
    }

    let state = AppState::from_env();
    let app = app_router(state);

    tracing::info!("slc-gateway server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health             — liveness probe");
    tracing::info!("  GET  /api/signature/get  — deployment-role greeting");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Chit Dashboard smoke driver
//!
//! Wires the API client, the local seed stub, and the controller together,
//! runs one initialization pass against the configured backend, and logs the
//! resulting state snapshot. A rendering layer would consume the same
//! controller; this binary only proves the plumbing.

use chit_dashboard::dashboard::Phase;
use chit_dashboard::{ApiClient, Config, DashboardController, LocalStub};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let client = ApiClient::new(config.base_url.clone());
    let mut dashboard = DashboardController::new(client, LocalStub::new());

    dashboard.initialize().await;

    match &dashboard.view().phase {
        Phase::Ready => info!(
            templates = dashboard.templates().len(),
            agents = dashboard.agents().len(),
            active_agents = dashboard.active_agent_count(),
            executions = dashboard.execution_count(),
            "Dashboard ready"
        ),
        Phase::Failed { message } => error!(error = %message, "Dashboard failed to initialize"),
        Phase::Loading => unreachable!("initialize resolves the loading phase"),
    }

    Ok(())
}

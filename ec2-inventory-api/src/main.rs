use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use ec2_inventory_api::config::{HostingMode, InventoryConfig};
use ec2_inventory_api::provider_manager::ProviderManager;
use ec2_inventory_api::routes::create_router;
use ec2_inventory_api::{lambda, AppState, RequestHandler};

fn init_tracing(hosting: HostingMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt().with_env_filter(filter);
    match hosting {
        // CloudWatch stamps every line already and does not render colours.
        HostingMode::Lambda => fmt.with_ansi(false).without_time().init(),
        HostingMode::Server => fmt.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = InventoryConfig::from_env();
    init_tracing(config.hosting);

    tracing::info!(
        region = %config.region,
        provider = %config.provider,
        hosting = config.hosting.as_str(),
        "🚀 starting ec2-inventory-api"
    );

    let provider = ProviderManager::get_provider(&config).await?;
    let handler = Arc::new(RequestHandler::new(provider));

    match config.hosting {
        HostingMode::Lambda => lambda::run(handler)
            .await
            .map_err(|e| anyhow::anyhow!(e))
            .context("lambda runtime stopped")?,
        HostingMode::Server => {
            let addr: SocketAddr = config
                .api_addr
                .parse()
                .with_context(|| format!("invalid API_ADDR {}", config.api_addr))?;
            let app = create_router().with_state(AppState::new(handler));

            tracing::info!("Listening on {}", addr);
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {addr}"))?;
            axum::serve(listener, app).await.context("server error")?;
        }
    }

    Ok(())
}

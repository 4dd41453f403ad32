use reelvault_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelvault=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, storage, pipelines, routes)
    let (_state, router) = reelvault_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    reelvault_api::setup::server::start_server(&config, router).await?;

    Ok(())
}

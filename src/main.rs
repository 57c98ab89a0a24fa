use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studio_gateway::{api, config, HfClient, ReplicateClient};

#[tokio::main]
async fn main() {
    // Load configuration
    config::Config::dotenv_load();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studio_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match config::Config::new() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    config.log_summary();

    // Create provider clients
    let image_provider = HfClient::new(
        config.hf_base_url.clone(),
        config.hf_token.clone(),
        config.image_model().to_string(),
    );
    let remix_provider = ReplicateClient::new(
        config.replicate_base_url.clone(),
        config.replicate_token.clone(),
        config.poll_interval,
    );
    tracing::info!(model = image_provider.model(), "Image provider ready");

    let state = Arc::new(api::AppState {
        config: Arc::clone(&config),
        image_provider: Arc::new(image_provider),
        remix_provider: Arc::new(remix_provider),
    });
    let app = api::router(state);

    // Run our application with safe parsing
    let ip: std::net::IpAddr = config.api_host.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", config.api_host);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = config.api_port.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8189", config.api_port);
        8189
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    if let Err(e) = axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

use syntaxshift_api::{AppState, Server};
use syntaxshift_core::ServerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> syntaxshift_core::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syntaxshift_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new()?;
    let server = Server::new(ServerConfig::default(), state);
    server.run().await
}

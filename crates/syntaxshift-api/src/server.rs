use crate::{create_router, AppState};
use syntaxshift_core::{Result, ServerConfig};
use tokio::signal;
use tracing::info;

pub struct Server {
    state: AppState,
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { state, config }
    }

    pub async fn run(self) -> Result<()> {
        let router = create_router(self.state);
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Server listening on http://{}", addr);
        info!("API documentation:");
        info!("  POST /api/transform - Transform, optimize, convert or explain code");
        info!("  GET /api/languages - Supported language registry");
        info!("  GET /api/health - Liveness probe");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}

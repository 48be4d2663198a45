#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod health;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{Router, routing::get};
use sotto_config::Config;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

/// Address used when the configuration does not pin one.
const DEFAULT_LISTEN_ADDRESS: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8000);

/// HTTP server hosting the transcription endpoints
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Assemble the router around an already-initialized transcription server
    pub fn new(config: &Config, stt: Arc<stt::Server>) -> Self {
        let mut router = Router::new();

        if config.server.health.enabled {
            router = router.route(&config.server.health.path, get(health::health_handler));
        }

        let router = router
            .merge(stt::endpoint_router().with_state(stt))
            .layer(TraceLayer::new_for_http());

        Self {
            router,
            listen_address: config
                .server
                .listen_address
                .unwrap_or(DEFAULT_LISTEN_ADDRESS),
        }
    }

    /// Address the server will bind to
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server, returning its router
    ///
    /// Useful for serving on an externally managed listener.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve until the cancellation token fires, then drain in-flight requests
    pub async fn serve(self, shutdown: CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.listen_address).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

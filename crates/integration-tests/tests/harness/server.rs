//! Test server wrapper that starts sotto on a random port

use std::net::SocketAddr;
use std::sync::Arc;

use sotto_config::Config;
use sotto_server::Server;
use stt::engine::{DecodeOptions, SpeechEngine};
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server around the given engine
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config, engine: Arc<dyn SpeechEngine>) -> anyhow::Result<Self> {
        let stt = Arc::new(stt::Server::new(engine, DecodeOptions::default()));
        let server = Server::new(&config, stt);
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Server address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

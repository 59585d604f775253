//! Server startup and binding
//!
//! Provides functionality to start the Axum server with configurable host/port.

use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes::{self, AppState};
use crate::store::demo_records;

/// Server instance that can be started
pub struct Server {
    /// Server configuration
    config: Arc<ServerConfig>,
    /// Shared handler state
    state: AppState,
    /// The built router
    router: Router,
}

impl Server {
    /// Create a new server instance with the given configuration
    ///
    /// Loads the demonstration book when the configuration asks for it.
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState::new(config.clone());

        if config.should_seed_demo_data() {
            let stored = state.store.seed(demo_records(), state.clock.now());
            tracing::info!(stored, "Loaded demonstration option book");
        }

        Self::with_state(state)
    }

    /// Create a server around prepared state
    pub fn with_state(state: AppState) -> Self {
        let router = routes::build_router(state.clone());
        Self {
            config: state.config.clone(),
            state,
            router,
        }
    }

    /// Get the socket address the server will bind to
    ///
    /// # Errors
    /// Returns an error when the configured host is not an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.config.socket_addr().parse()
    }

    /// Get the configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared handler state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server until Ctrl-C
    ///
    /// Binds to the configured host/port; host names are resolved.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener, true).await
    }

    /// Run the server with a specific listener
    ///
    /// This is useful for testing where you want to use a listener bound to port 0
    /// to get a random available port.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.serve(listener, false).await
    }

    async fn serve(self, listener: TcpListener, graceful: bool) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", addr);

        let serve = axum::serve(listener, self.router);
        if graceful {
            serve.with_graceful_shutdown(shutdown_signal()).await
        } else {
            serve.await
        }
    }

    /// Create a test server and return the bound address
    ///
    /// This binds to port 0 to get a random available port, starts the server
    /// in a background task, and returns the actual bound address.
    #[cfg(test)]
    pub async fn spawn_test_server(state: AppState) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Self::with_state(state);
        let handle = tokio::spawn(async move {
            server.run_with_listener(listener).await.ok();
        });

        // Give the server a moment to start
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        (addr, handle)
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::routes::test_support::seeded_state;
    use reqwest::StatusCode;

    #[test]
    fn test_server_socket_addr() {
        let mut config = ServerConfig::default();
        config.host = "127.0.0.1".to_string();
        config.port = 3000;
        config.seed_demo_data = Some(false);

        let server = Server::new(config);
        let addr = server.socket_addr().unwrap();

        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_server_socket_addr_rejects_hostname() {
        let mut config = ServerConfig::default();
        config.host = "localhost".to_string();
        config.seed_demo_data = Some(false);

        let server = Server::new(config);
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn test_production_starts_empty() {
        let mut config = ServerConfig::default();
        config.environment = Environment::Production;

        let server = Server::new(config);
        assert!(server.state().store.is_empty());
    }

    #[test]
    fn test_server_config_access() {
        let mut config = ServerConfig::default();
        config.port = 9999;
        config.seed_demo_data = Some(false);

        let server = Server::new(config);

        assert_eq!(server.config().port, 9999);
    }

    #[tokio::test]
    async fn test_server_health_endpoint() {
        let (addr, handle) = Server::spawn_test_server(seeded_state()).await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storedOptions"], 4);

        handle.abort();
    }

    #[tokio::test]
    async fn test_server_create_then_value() {
        let (addr, handle) = Server::spawn_test_server(seeded_state()).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("http://{}/market_options", addr))
            .json(&serde_json::json!({
                "commodity": "BRN",
                "contract_month": "Oct24",
                "strike_price": 80.0,
                "option_type": "Put",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: serde_json::Value = response.json().await.unwrap();
        assert_eq!(created["id"], 5);

        let response = client
            .post(format!("http://{}/market_options/pv", addr))
            .json(&serde_json::json!({
                "commodity": "BRN",
                "interest_rate": 0.2,
                "volatility": 0.3,
                "spot_price": 78.94,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let results: serde_json::Value = response.json().await.unwrap();
        let ids: Vec<u64> = results
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 3, 5]);

        handle.abort();
    }

    #[tokio::test]
    async fn test_server_unknown_route_returns_404() {
        let (addr, handle) = Server::spawn_test_server(seeded_state()).await;

        let response = reqwest::Client::new()
            .get(format!("http://{}/unknown/path", addr))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        handle.abort();
    }

    #[tokio::test]
    async fn test_multiple_servers_on_different_ports() {
        let (addr1, handle1) = Server::spawn_test_server(seeded_state()).await;
        let (addr2, handle2) = Server::spawn_test_server(seeded_state()).await;

        assert_ne!(addr1.port(), addr2.port());

        let client = reqwest::Client::new();
        for addr in [addr1, addr2] {
            let response = client
                .get(format!("http://{}/ready", addr))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        handle1.abort();
        handle2.abort();
    }
}

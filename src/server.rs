use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
};

use anyhow::Context;
use axum::{middleware, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};

use crate::{
    middleware::{
        cors::cors_headers, method_not_allowed::method_not_allowed, not_found::not_found,
        trace_headers::trace_headers,
    },
    route,
    state::ApiState,
    storage::{BookStore, DatabaseConfig},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    socket_address: SocketAddr,
    database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 5000),
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    pub async fn from_config_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Reads the config file if it exists, otherwise falls back to the defaults.
    pub async fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();

        match tokio::fs::try_exists(path).await {
            Ok(true) => Self::from_config_file(path).await,
            _ => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");

                Ok(Self::default())
            }
        }
    }

    pub fn with_database_url(mut self, url: String) -> Self {
        self.database.url = url;
        self
    }
}

/// Builds the `/api` router with every layer applied.
pub(crate) fn router(state: ApiState) -> Router {
    let api = Router::new()
        .nest("/api", route::app())
        .fallback(not_found)
        .layer(middleware::from_fn(method_not_allowed));

    cors_headers()
        .fold(api, |api, layer| api.layer(layer))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                )
                .layer(middleware::from_fn(trace_headers)),
        )
}

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!(config = ?self.config, "Configuration");

        let book_store =
            BookStore::connect_lazy(&self.config.database).context("Invalid database url")?;
        let state = ApiState::new(book_store.clone());

        let app = router(state);

        tracing::info!(addr = %self.config.socket_address, "Starting server");

        let listener = TcpListener::bind(&self.config.socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server failed")?;

        book_store.close().await;

        tracing::info!("Server stopped");

        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum ShutdownSignal {
    CtrlC,
    Terminate,
}

/// Resolves once a shutdown signal arrives. A handler that cannot be installed never resolves.
async fn wait_for_signal() -> ShutdownSignal {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ShutdownSignal::CtrlC,
            Err(err) => {
                tracing::error!(%err, "Failed to install CTRL+C signal handler");

                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;

                ShutdownSignal::Terminate
            }
            Err(err) => {
                tracing::error!(%err, "Failed to install SIGTERM signal handler");

                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<ShutdownSignal>();

    tokio::select! {
        signal = ctrl_c => signal,
        signal = terminate => signal,
    }
}

async fn shutdown_signal() {
    let signal = wait_for_signal().await;

    tracing::info!(?signal, "Shutting down, draining in-flight requests");
}
